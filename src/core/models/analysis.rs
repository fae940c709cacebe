//! Analysis results
//!
//! An [`Analysis`] bundles what is known about one input line and renders
//! it as a fixed-width verdict:
//!
//! ```text
//! VISA: 4111111111111111       (valid)
//! MasterCard: 5105105105105100 (valid)
//! ```
//!
//! The status always starts at column 29 unless the prologue is already
//! that long, in which case a single space separates them.

use serde::Serialize;

use super::{CandidateNumber, CardType, Validity};

/// Column at which the parenthesized status starts
pub const STATUS_COLUMN: usize = 29;

/// Classification and checksum verdict for one candidate number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Network inferred from length and prefix
    pub card_type: CardType,
    /// Whitespace-stripped input
    pub number: CandidateNumber,
    /// Luhn outcome
    pub validity: Validity,
}

impl Analysis {
    /// The `"<CardType>: <number>"` part of the verdict line
    #[must_use]
    pub fn prologue(&self) -> String {
        format!("{}: {}", self.card_type, self.number)
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prologue = self.prologue();
        let padding = STATUS_COLUMN.saturating_sub(prologue.chars().count()).max(1);
        write!(f, "{prologue}{:padding$}({})", "", self.validity)
    }
}
