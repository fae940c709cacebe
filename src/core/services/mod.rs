//! Business logic services
//!
//! Pure functions over the domain models. Nothing here does I/O.
//!
//! - [`analyzer`] - The full analysis of one input line
//! - [`classifier`] - Ordered card network rules
//! - [`luhn`] - The Luhn checksum

pub mod analyzer;
pub mod classifier;
pub mod luhn;

pub use analyzer::analyze;
pub use classifier::{CARD_RULES, CardRule, classify, classify_with};
