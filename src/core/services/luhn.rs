//! Luhn checksum
//!
//! Digits are walked from the right. The rightmost digit sits at index 0
//! and is added as is; every digit at an odd index is doubled and reduced
//! to its digit sum. For a single digit `d` that reduction is `2d mod 9`,
//! except for 9 which doubles to 18 and reduces to 9.

use crate::core::models::{CandidateNumber, Validity};

/// Contribution of a digit sitting at an odd index from the right
const fn doubled(digit: u32) -> u32 {
    if digit == 9 { 9 } else { (digit * 2) % 9 }
}

/// Luhn sum of `digits`, given left to right
#[must_use]
pub fn checksum(digits: &[u32]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 1 { doubled(d) } else { d })
        .sum()
}

/// Whether `digits` carries a valid Luhn check digit
#[must_use]
pub fn is_valid(digits: &[u32]) -> bool {
    checksum(digits) % 10 == 0
}

/// Checksum verdict for a candidate number
///
/// Empty numbers and numbers with anything but ASCII digits are invalid
/// without running the checksum.
#[must_use]
pub fn validity(number: &CandidateNumber) -> Validity {
    number
        .digits()
        .map_or(Validity::Invalid, |digits| Validity::from(is_valid(&digits)))
}
