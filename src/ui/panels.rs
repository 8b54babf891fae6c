use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::PlotState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Point count, scale mode and any points the log view had to leave out.
pub fn top_bar(ui: &mut Ui, state: &PlotState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!("{} points", state.n_input));

        if !state.model.is_empty() {
            ui.separator();
            ui.label(format!("model: {} samples", state.model.len()));
        }

        ui.separator();
        ui.label(if state.config.log_scale { "log-log" } else { "linear" });

        if state.dropped > 0 {
            ui.separator();
            ui.label(
                RichText::new(format!("{} non-positive point(s) hidden", state.dropped))
                    .color(Color32::RED),
            );
        }
    });
}
