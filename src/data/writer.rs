use std::path::Path;

use serde::Deserialize;

use super::model::SaveData;
use crate::error::{Result, ToolError};

// ---------------------------------------------------------------------------
// Columnar text output
// ---------------------------------------------------------------------------

/// Write `data` as space-delimited rows `x xlo xhi y ylo yhi`.
///
/// Values use the `%.18e` layout NumPy's `savetxt` produces, e.g.
/// `1.000000000000000000e+00`, which reads back to the identical `f64`.
/// An existing file is overwritten.
pub fn write_columns(path: &Path, data: &SaveData) -> Result<()> {
    data.validate()?;
    let context = || format!("writing {}", path.display());

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| ToolError::io(context(), e.into()))?;

    for i in 0..data.len() {
        writer
            .write_record(data.row(i).iter().map(|&v| format_sci(v)))
            .map_err(|e| ToolError::io(context(), e.into()))?;
    }
    writer.flush().map_err(|e| ToolError::io(context(), e))?;

    log::info!("wrote {} rows to {}", data.len(), path.display());
    Ok(())
}

/// `%.18e` with a signed, at-least-two-digit exponent.
pub fn format_sci(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let s = format!("{v:.18e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => s,
        },
        None => s,
    }
}

// ---------------------------------------------------------------------------
// Reading the output back
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Row {
    x: f64,
    x_err_low: f64,
    x_err_high: f64,
    y: f64,
    y_err_low: f64,
    y_err_high: f64,
}

/// Read a file produced by [`write_columns`].
pub fn read_columns(path: &Path) -> Result<SaveData> {
    let context = || format!("reading {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| ToolError::io(context(), e.into()))?;

    let mut data = SaveData::default();
    for (row_no, result) in reader.deserialize::<Row>().enumerate() {
        let row = result.map_err(|e| ToolError::Parse {
            slot: format!("{} row {row_no}", path.display()),
            token: String::new(),
            reason: e.to_string(),
        })?;
        data.x.push(row.x);
        data.x_err_low.push(row.x_err_low);
        data.x_err_high.push(row.x_err_high);
        data.y.push(row.y);
        data.y_err_low.push(row.y_err_low);
        data.y_err_high.push(row.y_err_high);
    }
    Ok(data)
}
