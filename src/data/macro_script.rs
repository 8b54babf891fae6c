use crate::config::LoadConfig;

/// Build the Tcl macro that loads `spectra` into XSPEC, one data group
/// per file, then sets up and shows the plot.
pub fn build_macro(spectra: &[String], config: &LoadConfig) -> String {
    let mut out = String::from("puts \"Starting macro...\"\n");

    if let Some(script) = &config.startup_script {
        out.push_str(&format!("@{}\n", script.display()));
    }

    for (i, name) in spectra.iter().enumerate() {
        let n = i + 1;
        out.push_str(&format!("data {n}:{n} {name}\n"));
    }

    let (lo, hi) = config.notice;
    out.push_str("ignore *:*\n");
    out.push_str(&format!("notice *:{lo:?}-{hi:?}\n"));
    out.push_str("ignore bad\n");
    out.push_str("ignore *:1\n");
    out.push_str("query y\n");
    out.push_str("setplot energy\n");
    out.push_str(&format!("cpd {}\n", config.plot_device));
    out.push_str("plot ldata\n");
    out
}
