use std::io;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error kinds shared by the three tools
// ---------------------------------------------------------------------------

/// Every failure aborts the current invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A payload token could not be coerced to its slot's type.
    #[error("{slot}: cannot parse {token:?} ({reason})")]
    Parse {
        slot: String,
        token: String,
        reason: String,
    },

    /// Arrays that must line up point-for-point do not.
    #[error("{left} has {left_len} values but {right} has {right_len}")]
    Shape {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },

    /// A required array was never supplied.
    #[error("missing values for '{0}'")]
    Missing(String),

    /// File or process I/O failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ToolError>;

impl ToolError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        ToolError::Io {
            context: context.into(),
            source,
        }
    }

    /// `true` for the two length-related kinds.
    pub fn is_shape(&self) -> bool {
        matches!(self, ToolError::Shape { .. } | ToolError::Missing(_))
    }
}

/// Check two named arrays for equal length.
pub(crate) fn check_len(left: &str, a: &[f64], right: &str, b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(ToolError::Shape {
            left: left.to_string(),
            left_len: a.len(),
            right: right.to_string(),
            right_len: b.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_message_names_both_arrays() {
        let err = check_len("x", &[1.0, 2.0], "y", &[1.0]).unwrap_err();
        assert!(err.is_shape());
        assert_eq!(err.to_string(), "x has 2 values but y has 1");
    }

    #[test]
    fn equal_lengths_pass() {
        assert!(check_len("x", &[], "y", &[]).is_ok());
    }
}
