use std::fs;
use std::path::Path;

use glob::Pattern;

use crate::error::{Result, ToolError};

// ---------------------------------------------------------------------------
// Spectrum selection by filename pattern
// ---------------------------------------------------------------------------

/// Compile a shell-style pattern (`*`, `?`, `[seq]`).
pub fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| ToolError::Parse {
        slot: "filename pattern".to_string(),
        token: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Keep the names that match `pattern`, preserving their order.
pub fn filter_names<'a, I>(names: I, pattern: &Pattern) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| pattern.matches(name))
        .map(str::to_string)
        .collect()
}

/// Return the names of files in `dir` matching `pattern`, in directory
/// listing order.
pub fn select_spectra(dir: &Path, pattern: &str) -> Result<Vec<String>> {
    let pattern = compile(pattern)?;
    let context = || format!("listing {}", dir.display());

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ToolError::io(context(), e))? {
        let entry = entry.map_err(|e| ToolError::io(context(), e))?;
        let Ok(name) = entry.file_name().into_string() else {
            log::warn!("skipping non-UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        names.push(name);
    }

    let selected = filter_names(names.iter().map(String::as_str), &pattern);
    log::debug!(
        "{} of {} entries in {} match {}",
        selected.len(),
        names.len(),
        dir.display(),
        pattern
    );
    Ok(selected)
}
