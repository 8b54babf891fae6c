use std::path::Path;

use anyhow::Context;

use xspec_tools::args::ArgumentStream;
use xspec_tools::config::LoadConfig;
use xspec_tools::data::{filter, macro_script};
use xspec_tools::xspec;

/// spec-load ["*grp*pha"]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = LoadConfig::from_args(&ArgumentStream::from_env()).apply_environment_variables();

    let spectra = filter::select_spectra(Path::new("."), &config.pattern)
        .with_context(|| format!("finding spectra matching {}", config.pattern))?;
    if spectra.is_empty() {
        log::warn!("no files in the current directory match {}", config.pattern);
    }
    for (i, name) in spectra.iter().enumerate() {
        log::info!("spectrum {}: {name}", i + 1);
    }

    let text = macro_script::build_macro(&spectra, &config);
    xspec::write_macro(&config.macro_file, &text)?;
    xspec::run_macro(&config)?;
    Ok(())
}
