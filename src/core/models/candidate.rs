//! Candidate numbers
//!
//! A [`CandidateNumber`] is the raw input with every whitespace character
//! removed. Whitespace here is Unicode `White_Space` plus the ASCII
//! information separators U+001C to U+001F. It is what gets classified, checksummed and echoed back in the
//! verdict line.
//!
//! # Examples
//!
//! ```
//! use cardvalid::core::models::CandidateNumber;
//!
//! let number = CandidateNumber::normalize("5105 1051\t0510 5106\n");
//! assert_eq!(number.as_str(), "5105105105105106");
//! assert_eq!(number.len(), 16);
//! assert!(number.digits().is_some());
//!
//! assert!(CandidateNumber::normalize("4111-1111").digits().is_none());
//! ```

use serde::Serialize;

/// Whitespace-stripped input under analysis
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct CandidateNumber(String);

impl CandidateNumber {
    /// Strip all whitespace from `raw`
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.chars().filter(|&c| !is_space(c)).collect())
    }

    /// The normalized text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether nothing but whitespace was supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character at `index`, counted from the left
    #[must_use]
    pub fn nth_char(&self, index: usize) -> Option<char> {
        self.0.chars().nth(index)
    }

    /// Whether the number begins with `prefix`
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Decimal digit values, left to right
    ///
    /// Returns `None` when the number is empty or holds anything other than
    /// ASCII digits. Such numbers never pass the checksum.
    #[must_use]
    pub fn digits(&self) -> Option<Vec<u32>> {
        if self.0.is_empty() {
            return None;
        }
        self.0
            .chars()
            .map(|c| if c.is_ascii_digit() { c.to_digit(10) } else { None })
            .collect()
    }
}

/// Unicode whitespace, plus the file/group/record/unit separators
fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

impl std::fmt::Display for CandidateNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
