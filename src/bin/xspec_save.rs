use anyhow::Context;

use xspec_tools::args::{scan, ArgumentStream, Variant};
use xspec_tools::config::SaveConfig;
use xspec_tools::data::model::SaveData;
use xspec_tools::data::writer::write_columns;

/// xspec-save x "$X" y "$Y" xerr1 "$XLO" xerr2 "$XHI" yerr1 "$YLO" yerr2 "$YHI"
///             [fname out.dat]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = ArgumentStream::from_env();
    let values = scan(Variant::Save, &args).context("reading save arguments")?;
    let config = SaveConfig::from_slots(&values);
    let data = SaveData::from_slots(&values).context("checking save arrays")?;

    write_columns(&config.output, &data)
        .with_context(|| format!("saving to {}", config.output.display()))?;
    Ok(())
}
