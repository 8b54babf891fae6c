/// Argument layer: turns a flat keyword/payload stream into typed slots.
///
/// Architecture:
/// ```text
///  argv (minus program name)
///        │
///        ▼
///   ┌──────────┐
///   │   tag    │  keyword text → Keyword (per tool variant)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ tokenizer │  one active slot at a time, routes payload tokens
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  coerce  │  payload text → numbers or label
///   └──────────┘
///        │
///        ▼
///     SlotValues
/// ```

pub mod coerce;
pub mod tag;
pub mod tokenizer;

pub use coerce::{coerce, Payload};
pub use tag::{Keyword, Slot, SlotKind, Variant};
pub use tokenizer::{scan, SlotValues, Tokenizer};

/// The process argument vector, captured once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentStream {
    tokens: Vec<String>,
}

impl ArgumentStream {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Capture `std::env::args()`, dropping the program-name token.
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
