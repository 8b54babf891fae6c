use eframe::egui;

use crate::state::PlotState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct XspecPlotApp {
    pub state: PlotState,
}

impl XspecPlotApp {
    pub fn new(state: PlotState) -> Self {
        Self { state }
    }
}

impl eframe::App for XspecPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::data_plot(ui, &self.state);
        });
    }
}
