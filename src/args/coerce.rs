use crate::error::{Result, ToolError};

use super::tag::{Slot, SlotKind};

/// A payload after coercion to its slot's type.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Numbers(Vec<f64>),
    Text(String),
}

/// Coerce one payload token for `slot`.
///
/// Numeric payloads are split on whitespace and every piece must parse as
/// an `f64`; an empty payload gives an empty sequence. Text payloads are kept
/// verbatim.
pub fn coerce(slot: Slot, token: &str) -> Result<Payload> {
    match slot.kind() {
        SlotKind::Text => Ok(Payload::Text(token.to_string())),
        SlotKind::Numeric => parse_floats(token, slot).map(Payload::Numbers),
    }
}

fn parse_floats(s: &str, slot: Slot) -> Result<Vec<f64>> {
    s.split_whitespace()
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>().map_err(|e| ToolError::Parse {
                slot: format!("{slot}[{j}]"),
                token: tok.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_split_on_any_whitespace() {
        let got = coerce(Slot::X, " 1\t2.5\n-3e2  ").unwrap();
        assert_eq!(got, Payload::Numbers(vec![1.0, 2.5, -300.0]));
    }

    #[test]
    fn empty_payload_is_empty_sequence() {
        assert_eq!(coerce(Slot::Y, "   ").unwrap(), Payload::Numbers(vec![]));
    }

    #[test]
    fn bad_number_is_a_parse_error() {
        let err = coerce(Slot::X, "1 foo 3").unwrap_err();
        match err {
            ToolError::Parse { slot, token, .. } => {
                assert_eq!(slot, "x[1]");
                assert_eq!(token, "foo");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn labels_are_verbatim() {
        let got = coerce(Slot::XLabel, "Energy (keV)").unwrap();
        assert_eq!(got, Payload::Text("Energy (keV)".to_string()));
        let got = coerce(Slot::FileName, " 1 2 ").unwrap();
        assert_eq!(got, Payload::Text(" 1 2 ".to_string()));
    }
}
