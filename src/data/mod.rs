/// Data layer: typed sink inputs, spectrum selection, macro text and
/// columnar output.
///
/// Architecture:
/// ```text
///   SlotValues                       directory listing
///       │                                   │
///       ▼                                   ▼
///   ┌────────┐                        ┌──────────┐
///   │ model  │  PlotData / SaveData   │  filter  │  pattern → spectra
///   └────────┘                        └──────────┘
///       │                                   │
///       ▼                                   ▼
///   ┌────────┐                      ┌──────────────┐
///   │ writer │  six-column text     │ macro_script │  Tcl for XSPEC
///   └────────┘                      └──────────────┘
/// ```

pub mod filter;
pub mod macro_script;
pub mod model;
pub mod writer;
