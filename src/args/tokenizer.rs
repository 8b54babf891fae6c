use std::collections::BTreeMap;

use crate::error::Result;

use super::coerce::{coerce, Payload};
use super::tag::{Keyword, Slot, Variant};
use super::ArgumentStream;

// ---------------------------------------------------------------------------
// SlotValues – resolved payloads
// ---------------------------------------------------------------------------

/// Payloads resolved by a scan, keyed by slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotValues {
    numeric: BTreeMap<Slot, Vec<f64>>,
    text: BTreeMap<Slot, String>,
    log: bool,
}

impl SlotValues {
    pub fn numeric(&self, slot: Slot) -> Option<&[f64]> {
        self.numeric.get(&slot).map(Vec::as_slice)
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.text.get(&slot).map(String::as_str)
    }

    pub fn log(&self) -> bool {
        self.log
    }

    /// Store a payload, replacing any earlier one for the same slot.
    fn assign(&mut self, slot: Slot, payload: Payload) {
        match payload {
            Payload::Numbers(v) => {
                self.numeric.insert(slot, v);
            }
            Payload::Text(s) => {
                self.text.insert(slot, s);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tokenizer – single pass, one active slot
// ---------------------------------------------------------------------------

/// Scanning state. `active` is the only mode register, so at most one
/// slot is live at any position.
#[derive(Debug)]
pub struct Tokenizer {
    variant: Variant,
    active: Option<Slot>,
    values: SlotValues,
}

impl Tokenizer {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            active: None,
            values: SlotValues::default(),
        }
    }

    /// The slot the next payload token would go to.
    pub fn active(&self) -> Option<Slot> {
        self.active
    }

    /// Apply one token.
    pub fn push(&mut self, token: &str) -> Result<()> {
        match self.variant.lookup(token) {
            Some(Keyword::Slot(slot)) => {
                self.active = Some(slot);
            }
            Some(Keyword::Log(on)) => {
                self.active = None;
                self.values.log = on;
            }
            None => match self.active {
                Some(slot) => {
                    let payload = coerce(slot, token)?;
                    self.values.assign(slot, payload);
                }
                None => log::trace!("dropping payload {token:?} with no active keyword"),
            },
        }
        Ok(())
    }

    pub fn finish(self) -> SlotValues {
        self.values
    }
}

/// Scan a whole argument stream left to right.
pub fn scan(variant: Variant, stream: &ArgumentStream) -> Result<SlotValues> {
    let mut tokenizer = Tokenizer::new(variant);
    for token in stream.tokens() {
        tokenizer.push(token)?;
    }
    Ok(tokenizer.finish())
}
