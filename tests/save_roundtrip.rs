use approx::assert_relative_eq;
use tempfile::TempDir;

use xspec_tools::args::{scan, ArgumentStream, Variant};
use xspec_tools::config::SaveConfig;
use xspec_tools::data::model::SaveData;
use xspec_tools::data::writer::{read_columns, write_columns};

fn resolve(tokens: &[&str]) -> (SaveConfig, SaveData) {
    let values = scan(Variant::Save, &ArgumentStream::new(tokens.iter().copied())).unwrap();
    (
        SaveConfig::from_slots(&values),
        SaveData::from_slots(&values).unwrap(),
    )
}

#[test]
fn zero_errors_round_trip() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("params.dat");
    let out_str = out.to_str().unwrap();

    let (config, data) = resolve(&[
        "x", "1 2", "y", "3 4", "xerr1", "0 0", "xerr2", "0 0", "yerr1", "0 0", "yerr2",
        "0 0", "fname", out_str,
    ]);
    assert_eq!(config.output, out);
    write_columns(&config.output, &data).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let first: Vec<&str> = text.lines().next().unwrap().split(' ').collect();
    assert_eq!(
        first,
        [
            "1.000000000000000000e+00",
            "0.000000000000000000e+00",
            "0.000000000000000000e+00",
            "3.000000000000000000e+00",
            "0.000000000000000000e+00",
            "0.000000000000000000e+00",
        ]
    );

    let back = read_columns(&out).unwrap();
    assert_eq!(back, data);
    assert_eq!(back.row(1), [2.0, 0.0, 0.0, 4.0, 0.0, 0.0]);
}

#[test]
fn asymmetric_errors_keep_column_order() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("fit.dat");

    let (_, data) = resolve(&[
        "x", "0.5 1.5 2.5", "xerr1", "0.1 0.1 0.1", "xerr2", "0.2 0.2 0.2", "y",
        "1e-3 2.25e-3 3.125e-3", "yerr1", "1e-4 1e-4 1e-4", "yerr2", "3e-4 3e-4 3e-4",
    ]);
    write_columns(&out, &data).unwrap();

    let back = read_columns(&out).unwrap();
    assert_eq!(back.len(), 3);
    for i in 0..3 {
        for (got, want) in back.row(i).iter().zip(data.row(i)) {
            assert_relative_eq!(*got, want, max_relative = f64::EPSILON);
        }
    }
    assert_eq!(back.x_err_high, vec![0.2, 0.2, 0.2]);
}

#[test]
fn existing_file_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.dat");
    std::fs::write(&out, "stale contents\nmore\nand more\n").unwrap();

    let (_, data) = resolve(&[
        "x", "1", "y", "2", "xerr1", "0", "xerr2", "0", "yerr1", "0", "yerr2", "0",
    ]);
    write_columns(&out, &data).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap().lines().count(), 1);
}

#[test]
fn unwritable_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("out.dat");
    let (_, data) = resolve(&[
        "x", "1", "y", "2", "xerr1", "0", "xerr2", "0", "yerr1", "0", "yerr2", "0",
    ]);
    let err = write_columns(&out, &data).unwrap_err();
    assert!(matches!(err, xspec_tools::ToolError::Io { .. }));
}
