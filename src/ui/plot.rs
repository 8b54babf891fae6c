use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{GridMark, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::{log_tick_label, PlotState};

// ---------------------------------------------------------------------------
// Data plot (central panel)
// ---------------------------------------------------------------------------

const MODEL_COLOR: Color32 = Color32::BLACK;
const POINT_COLOR: Color32 = Color32::RED;
const ERROR_COLOR: Color32 = Color32::GRAY;

/// Render the model curve, error bars and data points.
pub fn data_plot(ui: &mut Ui, state: &PlotState) {
    let config = &state.config;

    let mut plot = Plot::new("xspec_plot")
        .legend(Legend::default())
        .x_axis_label(config.x_label.as_str())
        .y_axis_label(config.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if config.log_scale {
        plot = plot
            .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
                log_tick_label(mark.value)
            })
            .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
                log_tick_label(mark.value)
            });
    }

    plot.show(ui, |plot_ui| {
        if !state.model.is_empty() {
            let line = Line::new(PlotPoints::new(state.model.clone()))
                .name("model")
                .color(MODEL_COLOR)
                .width(1.5);
            plot_ui.line(line);
        }

        // no caps, so each bar is a bare segment
        for segment in &state.error_bars {
            let bar = Line::new(PlotPoints::new(segment.to_vec()))
                .color(ERROR_COLOR)
                .width(1.0);
            plot_ui.line(bar);
        }

        let points = Points::new(PlotPoints::new(state.points.clone()))
            .name("data")
            .shape(MarkerShape::Circle)
            .filled(true)
            .radius(3.5)
            .color(POINT_COLOR);
        plot_ui.points(points);
    });
}
