//! Card network types
//!
//! The fixed set of networks a number can be attributed to.

use serde::Serialize;

/// Label printed for [`CardType::Visa`]
pub const VISA_LABEL: &str = "VISA";

/// Label printed for [`CardType::Amex`]
pub const AMEX_LABEL: &str = "AMEX";

/// Label printed for [`CardType::Discover`]
pub const DISCOVER_LABEL: &str = "Discover";

/// Label printed for [`CardType::MasterCard`]
pub const MASTERCARD_LABEL: &str = "MasterCard";

/// Label printed for [`CardType::Unknown`]
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Card network inferred from length and leading digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CardType {
    /// Starts with 4, 13 or 16 characters
    #[serde(rename = "VISA")]
    Visa,
    /// Starts with 34 or 37, 15 characters
    #[serde(rename = "AMEX")]
    Amex,
    /// Starts with 6011, 16 characters
    Discover,
    /// Starts with 51 through 55, 16 characters
    MasterCard,
    /// Anything no rule matched
    #[default]
    Unknown,
}

impl CardType {
    /// The label used in verdict lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Visa => VISA_LABEL,
            Self::Amex => AMEX_LABEL,
            Self::Discover => DISCOVER_LABEL,
            Self::MasterCard => MASTERCARD_LABEL,
            Self::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
