//! Helpers for moving spectral data between the shell, XSPEC and the
//! screen: `spec-load` feeds matching spectra to XSPEC, `xspec-plot` draws
//! arrays passed on the command line and `xspec-save` writes them to a
//! six-column text file.

pub mod app;
pub mod args;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
pub mod xspec;

pub use error::{Result, ToolError};
