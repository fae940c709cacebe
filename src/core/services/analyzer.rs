//! Card analyzer - classify, checksum and format one input
//!
//! This is the whole core of cardvalid. It never fails: any string,
//! however malformed, produces a well-formed verdict line.
//!
//! # Examples
//!
//! ```
//! use cardvalid::core::services::analyze;
//!
//! assert_eq!(analyze("4111111111111111"), "VISA: 4111111111111111       (valid)");
//! assert_eq!(analyze("5105 1051 0510 5106"), "MasterCard: 5105105105105106 (invalid)");
//! ```

use log::trace;

use super::{classifier, luhn};
use crate::core::models::{Analysis, CandidateNumber};

impl Analysis {
    /// Normalize, classify and checksum `raw`
    #[must_use]
    pub fn of(raw: &str) -> Self {
        let number = CandidateNumber::normalize(raw);
        let card_type = classifier::classify(&number);
        let validity = luhn::validity(&number);
        trace!("analyzed {number:?} as {card_type} ({validity})");
        Self {
            card_type,
            number,
            validity,
        }
    }
}

/// Analyze `raw` and return its verdict line
#[must_use]
pub fn analyze(raw: &str) -> String {
    Analysis::of(raw).to_string()
}
