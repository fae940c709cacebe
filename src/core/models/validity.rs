//! Checksum verdicts

use serde::Serialize;

/// Label printed for [`Validity::Valid`]
pub const VALID_LABEL: &str = "valid";

/// Label printed for [`Validity::Invalid`]
pub const INVALID_LABEL: &str = "invalid";

/// Outcome of the Luhn check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    /// Checksum is a multiple of 10
    Valid,
    /// Checksum failed, or the number was not all digits
    #[default]
    Invalid,
}

impl Validity {
    /// The label used in verdict lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => VALID_LABEL,
            Self::Invalid => INVALID_LABEL,
        }
    }

    /// Whether the checksum passed
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl std::fmt::Display for Validity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
