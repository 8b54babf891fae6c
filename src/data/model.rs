use crate::args::{Slot, SlotValues};
use crate::error::{check_len, Result, ToolError};

// ---------------------------------------------------------------------------
// PlotData – input of the chart renderer
// ---------------------------------------------------------------------------

/// Validated arrays for the plot tool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotData {
    pub x: Vec<f64>,
    /// Same length as `x`.
    pub y: Vec<f64>,
    /// Symmetric errors; `None` draws no bars on that axis.
    pub x_err: Option<Vec<f64>>,
    pub y_err: Option<Vec<f64>>,
    /// Model curve; empty when no model was given.
    pub model_x: Vec<f64>,
    pub model_y: Vec<f64>,
}

impl PlotData {
    pub fn from_slots(values: &SlotValues) -> Result<Self> {
        let owned = |slot: Slot| values.numeric(slot).map(<[f64]>::to_vec);

        let x = owned(Slot::X).unwrap_or_default();
        let y = owned(Slot::Y).unwrap_or_default();
        check_len("x", &x, "y", &y)?;

        let x_err = owned(Slot::XErr);
        if let Some(xe) = &x_err {
            check_len("x", &x, "xe", xe)?;
        }
        let y_err = owned(Slot::YErr);
        if let Some(ye) = &y_err {
            check_len("y", &y, "ye", ye)?;
        }

        let model_x = owned(Slot::ModelX).unwrap_or_default();
        let model_y = owned(Slot::ModelY).unwrap_or_default();
        if !model_x.is_empty() {
            check_len("xm", &model_x, "ym", &model_y)?;
        }

        Ok(PlotData {
            x,
            y,
            x_err,
            y_err,
            model_x,
            model_y,
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn has_model(&self) -> bool {
        !self.model_x.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SaveData – input of the columnar writer
// ---------------------------------------------------------------------------

/// Six parallel columns, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveData {
    pub x: Vec<f64>,
    pub x_err_low: Vec<f64>,
    pub x_err_high: Vec<f64>,
    pub y: Vec<f64>,
    pub y_err_low: Vec<f64>,
    pub y_err_high: Vec<f64>,
}

impl SaveData {
    /// Every column must be supplied and all must match `x` in length.
    pub fn from_slots(values: &SlotValues) -> Result<Self> {
        let required = |slot: Slot| {
            values
                .numeric(slot)
                .map(<[f64]>::to_vec)
                .ok_or_else(|| ToolError::Missing(slot.to_string()))
        };
        let data = SaveData {
            x: required(Slot::X)?,
            x_err_low: required(Slot::XErrLow)?,
            x_err_high: required(Slot::XErrHigh)?,
            y: required(Slot::Y)?,
            y_err_low: required(Slot::YErrLow)?,
            y_err_high: required(Slot::YErrHigh)?,
        };
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, col) in self.named_columns().into_iter().skip(1) {
            check_len("x", &self.x, name, col)?;
        }
        Ok(())
    }

    /// Columns paired with their keyword, in file order.
    pub fn named_columns(&self) -> [(&'static str, &[f64]); 6] {
        [
            (Slot::X.keyword(), self.x.as_slice()),
            (Slot::XErrLow.keyword(), self.x_err_low.as_slice()),
            (Slot::XErrHigh.keyword(), self.x_err_high.as_slice()),
            (Slot::Y.keyword(), self.y.as_slice()),
            (Slot::YErrLow.keyword(), self.y_err_low.as_slice()),
            (Slot::YErrHigh.keyword(), self.y_err_high.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Row `i` as `[x, xlo, xhi, y, ylo, yhi]`.
    pub fn row(&self, i: usize) -> [f64; 6] {
        [
            self.x[i],
            self.x_err_low[i],
            self.x_err_high[i],
            self.y[i],
            self.y_err_low[i],
            self.y_err_high[i],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{scan, ArgumentStream, Variant};

    fn slots(variant: Variant, tokens: &[&str]) -> SlotValues {
        scan(variant, &ArgumentStream::new(tokens.iter().copied())).unwrap()
    }

    #[test]
    fn plot_without_errors_or_model() {
        let data = PlotData::from_slots(&slots(Variant::Plot, &["x", "1 2", "y", "3 4"])).unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.x_err.is_none());
        assert!(data.y_err.is_none());
        assert!(!data.has_model());
    }

    #[test]
    fn plot_rejects_unequal_x_and_y() {
        let err = PlotData::from_slots(&slots(Variant::Plot, &["x", "1 2 3", "y", "4 5"]))
            .unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn plot_rejects_short_error_array() {
        let values = slots(Variant::Plot, &["x", "1 2", "y", "3 4", "ye", "0.1"]);
        assert!(PlotData::from_slots(&values).unwrap_err().is_shape());
    }

    #[test]
    fn plot_model_lengths_must_match() {
        let values = slots(Variant::Plot, &["x", "1", "y", "1", "xm", "1 2 3", "ym", "1 2"]);
        assert!(PlotData::from_slots(&values).unwrap_err().is_shape());
    }

    #[test]
    fn save_requires_every_column() {
        let values = slots(Variant::Save, &["x", "1 2", "y", "3 4"]);
        let err = SaveData::from_slots(&values).unwrap_err();
        assert!(matches!(err, ToolError::Missing(ref s) if s == "xerr1"));
    }

    #[test]
    fn save_rejects_ragged_columns() {
        let values = slots(
            Variant::Save,
            &[
                "x", "1 2", "y", "3 4", "xerr1", "0 0", "xerr2", "0 0", "yerr1", "0",
                "yerr2", "0 0",
            ],
        );
        let err = SaveData::from_slots(&values).unwrap_err();
        assert_eq!(err.to_string(), "x has 2 values but yerr1 has 1");
    }

    #[test]
    fn save_rejects_unequal_x_and_y() {
        let values = slots(
            Variant::Save,
            &[
                "x", "1 2 3", "y", "1 2", "xerr1", "0 0 0", "xerr2", "0 0 0", "yerr1", "0 0",
                "yerr2", "0 0",
            ],
        );
        let err = SaveData::from_slots(&values).unwrap_err();
        assert!(err.is_shape());
        assert_eq!(err.to_string(), "x has 3 values but y has 2");
    }

    #[test]
    fn save_rows_follow_file_order() {
        let values = slots(
            Variant::Save,
            &[
                "yerr2", "6", "yerr1", "5", "y", "4", "xerr2", "3", "xerr1", "2", "x", "1",
            ],
        );
        let data = SaveData::from_slots(&values).unwrap();
        assert_eq!(data.row(0), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
