use crate::config::PlotConfig;
use crate::data::model::PlotData;

// ---------------------------------------------------------------------------
// Plot state – render-ready traces, independent of egui
// ---------------------------------------------------------------------------

/// One error-bar segment between two plot-space points.
pub type Segment = [[f64; 2]; 2];

/// Everything the chart needs, already mapped into plot coordinates
/// (`log10` of the data when the log scale is on).
pub struct PlotState {
    pub config: PlotConfig,

    /// Model curve, empty when no model was supplied.
    pub model: Vec<[f64; 2]>,

    /// Data markers.
    pub points: Vec<[f64; 2]>,

    /// Horizontal and vertical error bars.
    pub error_bars: Vec<Segment>,

    /// Points given on the command line.
    pub n_input: usize,

    /// Points that cannot be shown on log axes.
    pub dropped: usize,
}

impl PlotState {
    pub fn new(data: PlotData, config: PlotConfig) -> Self {
        let axis = Axis {
            log: config.log_scale,
        };

        let model: Vec<[f64; 2]> = data
            .model_x
            .iter()
            .zip(&data.model_y)
            .filter_map(|(&x, &y)| axis.point(x, y))
            .collect();

        let mut points = Vec::with_capacity(data.len());
        let mut error_bars = Vec::new();
        let mut dropped = 0;

        for i in 0..data.len() {
            let (x, y) = (data.x[i], data.y[i]);
            let Some(p) = axis.point(x, y) else {
                dropped += 1;
                continue;
            };
            points.push(p);

            if let Some(xe) = &data.x_err {
                let (lo, hi) = axis.span(x, xe[i]);
                error_bars.push([[lo, p[1]], [hi, p[1]]]);
            }
            if let Some(ye) = &data.y_err {
                let (lo, hi) = axis.span(y, ye[i]);
                error_bars.push([[p[0], lo], [p[0], hi]]);
            }
        }

        if dropped > 0 {
            log::warn!("{dropped} point(s) with non-positive coordinates left off the log plot");
        }

        PlotState {
            config,
            model,
            points,
            error_bars,
            n_input: data.len(),
            dropped,
        }
    }
}

/// Maps data values into plot coordinates.
#[derive(Clone, Copy)]
struct Axis {
    log: bool,
}

impl Axis {
    fn value(self, v: f64) -> Option<f64> {
        if !self.log {
            return Some(v);
        }
        (v > 0.0).then(|| v.log10())
    }

    fn point(self, x: f64, y: f64) -> Option<[f64; 2]> {
        Some([self.value(x)?, self.value(y)?])
    }

    /// Ends of a symmetric bar around `center`. On a log axis a lower end
    /// at or below zero is clamped to the centre.
    fn span(self, center: f64, err: f64) -> (f64, f64) {
        let err = err.abs();
        let c = self.value(center).unwrap_or(center);
        let lo = self.value(center - err).unwrap_or(c);
        let hi = self.value(center + err).unwrap_or(c);
        (lo, hi)
    }
}

/// Tick label for a log axis mark at `exponent`.
pub fn log_tick_label(exponent: f64) -> String {
    let value = 10f64.powf(exponent);
    if (-3.0..=4.0).contains(&exponent) {
        let s = format!("{value:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        format!("{value:.1e}")
    }
}
