use std::fmt;

// ---------------------------------------------------------------------------
// Slot – one named destination for payload data
// ---------------------------------------------------------------------------

/// A destination that a keyword switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    X,
    Y,
    /// Symmetric x error (plot tool).
    XErr,
    /// Symmetric y error (plot tool).
    YErr,
    XErrLow,
    XErrHigh,
    YErrLow,
    YErrHigh,
    ModelX,
    ModelY,
    XLabel,
    YLabel,
    FileName,
}

/// How a slot's payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Whitespace-separated floats.
    Numeric,
    /// Taken verbatim.
    Text,
}

impl Slot {
    pub fn kind(self) -> SlotKind {
        match self {
            Slot::XLabel | Slot::YLabel | Slot::FileName => SlotKind::Text,
            _ => SlotKind::Numeric,
        }
    }

    /// The keyword that activates this slot on the command line.
    pub fn keyword(self) -> &'static str {
        match self {
            Slot::X => "x",
            Slot::Y => "y",
            Slot::XErr => "xe",
            Slot::YErr => "ye",
            Slot::XErrLow => "xerr1",
            Slot::XErrHigh => "xerr2",
            Slot::YErrLow => "yerr1",
            Slot::YErrHigh => "yerr2",
            Slot::ModelX => "xm",
            Slot::ModelY => "ym",
            Slot::XLabel => "xl",
            Slot::YLabel => "yl",
            Slot::FileName => "fname",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// ---------------------------------------------------------------------------
// Keyword registry
// ---------------------------------------------------------------------------

/// A reserved token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Switches the active slot.
    Slot(Slot),
    /// Bare flag: `log` sets the log scale, `None` clears it.
    Log(bool),
}

/// Which tool is reading the stream. Both recognise `x y xm ym`; the save
/// tool ignores the model arrays once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Plot,
    Save,
}

const PLOT_SLOTS: &[Slot] = &[
    Slot::X,
    Slot::Y,
    Slot::XErr,
    Slot::YErr,
    Slot::XLabel,
    Slot::YLabel,
    Slot::ModelX,
    Slot::ModelY,
];

const SAVE_SLOTS: &[Slot] = &[
    Slot::X,
    Slot::Y,
    Slot::XErrLow,
    Slot::XErrHigh,
    Slot::YErrLow,
    Slot::YErrHigh,
    Slot::ModelX,
    Slot::ModelY,
    Slot::FileName,
];

impl Variant {
    /// Slots this variant recognises.
    pub fn slots(self) -> &'static [Slot] {
        match self {
            Variant::Plot => PLOT_SLOTS,
            Variant::Save => SAVE_SLOTS,
        }
    }

    /// Return the keyword for `token`, or `None` for a payload token.
    pub fn lookup(self, token: &str) -> Option<Keyword> {
        if self == Variant::Plot {
            match token {
                "log" => return Some(Keyword::Log(true)),
                "None" => return Some(Keyword::Log(false)),
                _ => {}
            }
        }
        self.slots()
            .iter()
            .copied()
            .find(|slot| slot.keyword() == token)
            .map(Keyword::Slot)
    }
}
