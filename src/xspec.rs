use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::config::LoadConfig;
use crate::error::{Result, ToolError};

// ---------------------------------------------------------------------------
// Running XSPEC on a generated macro
// ---------------------------------------------------------------------------

/// Create or overwrite the macro file.
pub fn write_macro(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| ToolError::io(format!("writing {}", path.display()), e))?;
    log::debug!("wrote macro {} ({} bytes)", path.display(), text.len());
    Ok(())
}

/// Run `<program> - <macro_file>` in the foreground and wait for it.
///
/// A failed spawn or a non-zero exit status is an I/O error.
pub fn run_macro(config: &LoadConfig) -> Result<()> {
    let context = || format!("running {} - {}", config.program, config.macro_file.display());
    log::info!("{}", context());

    let status = Command::new(&config.program)
        .arg("-")
        .arg(&config.macro_file)
        .status()
        .map_err(|e| ToolError::io(context(), e))?;

    if !status.success() {
        return Err(ToolError::io(
            context(),
            io::Error::other(format!("exited with {status}")),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_io_error() {
        let config = LoadConfig {
            program: "xspec-tools-no-such-program".to_string(),
            ..LoadConfig::default()
        };
        let err = run_macro(&config).unwrap_err();
        assert!(matches!(err, ToolError::Io { .. }));
        assert!(err.to_string().starts_with("running xspec-tools-no-such-program - load.tcl"));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_inspected() {
        let ok = LoadConfig {
            program: "true".to_string(),
            ..LoadConfig::default()
        };
        assert!(run_macro(&ok).is_ok());

        let failing = LoadConfig {
            program: "false".to_string(),
            ..LoadConfig::default()
        };
        let err = run_macro(&failing).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn macro_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("load.tcl");
        write_macro(&path, "first\n").unwrap();
        write_macro(&path, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }
}
