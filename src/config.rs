use std::env;
use std::path::PathBuf;

use crate::args::{ArgumentStream, Slot, SlotValues};

// ---------------------------------------------------------------------------
// Plot tool
// ---------------------------------------------------------------------------

/// Presentation settings for `xspec-plot`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub x_label: String,
    pub y_label: String,
    /// Both axes logarithmic.
    pub log_scale: bool,
    pub window_size: [f32; 2],
    pub title: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            log_scale: false,
            window_size: [1000.0, 750.0],
            title: "XSPEC Plot".to_string(),
        }
    }
}

impl PlotConfig {
    pub fn from_slots(values: &SlotValues) -> Self {
        let mut config = Self::default();
        if let Some(label) = values.text(Slot::XLabel) {
            config.x_label = label.to_string();
        }
        if let Some(label) = values.text(Slot::YLabel) {
            config.y_label = label.to_string();
        }
        config.log_scale = values.log();
        config
    }
}

// ---------------------------------------------------------------------------
// Save tool
// ---------------------------------------------------------------------------

pub const DEFAULT_OUTPUT: &str = "xspecParamsOut.dat";

/// Output settings for `xspec-save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConfig {
    pub output: PathBuf,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl SaveConfig {
    pub fn from_slots(values: &SlotValues) -> Self {
        match values.text(Slot::FileName) {
            Some(name) => Self {
                output: PathBuf::from(name),
            },
            None => Self::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Load tool
// ---------------------------------------------------------------------------

pub const DEFAULT_PATTERN: &str = "*grp*pha";

/// Settings for `spec-load`: which spectra to pick up and how the
/// generated macro drives XSPEC.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadConfig {
    /// Shell-style filename filter.
    pub pattern: String,
    pub macro_file: PathBuf,
    /// Executable started with `- <macro_file>`.
    pub program: String,
    /// Energy range kept by `notice`, in keV.
    pub notice: (f64, f64),
    pub plot_device: String,
    /// Macro sourced with `@` before any data is loaded.
    pub startup_script: Option<PathBuf>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            macro_file: PathBuf::from("load.tcl"),
            program: "xspec".to_string(),
            notice: (0.5, 10.0),
            plot_device: "/xw".to_string(),
            startup_script: None,
        }
    }
}

impl LoadConfig {
    /// The first argument, if any, replaces the default pattern.
    pub fn from_args(args: &ArgumentStream) -> Self {
        let mut config = Self::default();
        if let Some(pattern) = args.first() {
            config.pattern = pattern.to_string();
        }
        config
    }

    /// Apply `XSPEC_PROGRAM`, `SPECLOAD_MACRO_FILE` and
    /// `SPECLOAD_STARTUP_SCRIPT` overrides.
    pub fn apply_environment_variables(mut self) -> Self {
        if let Ok(program) = env::var("XSPEC_PROGRAM") {
            if !program.trim().is_empty() {
                self.program = program;
            }
        }
        if let Ok(file) = env::var("SPECLOAD_MACRO_FILE") {
            if !file.trim().is_empty() {
                self.macro_file = PathBuf::from(file);
            }
        }
        if let Ok(script) = env::var("SPECLOAD_STARTUP_SCRIPT") {
            if !script.trim().is_empty() {
                self.startup_script = Some(PathBuf::from(script));
            }
        }
        self
    }
}
