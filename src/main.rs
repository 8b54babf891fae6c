use anyhow::{anyhow, Context};
use eframe::egui;

use xspec_tools::app::XspecPlotApp;
use xspec_tools::args::{scan, ArgumentStream, Variant};
use xspec_tools::config::PlotConfig;
use xspec_tools::data::model::PlotData;
use xspec_tools::state::PlotState;

/// xspec-plot x "$XVALS" y "$YVALS" [xe ..] [ye ..] [xm .. ym ..]
///             [xl LABEL] [yl LABEL] [log | None]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = ArgumentStream::from_env();
    let values = scan(Variant::Plot, &args).context("reading plot arguments")?;
    let config = PlotConfig::from_slots(&values);
    let data = PlotData::from_slots(&values).context("checking plot arrays")?;
    log::info!(
        "plotting {} points{}{}",
        data.len(),
        if data.has_model() { " with model" } else { "" },
        if config.log_scale { " on log axes" } else { "" }
    );

    let state = PlotState::new(data, config);
    let title = state.config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(state.config.window_size)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(XspecPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("plot window failed: {e}"))
}
