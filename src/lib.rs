//! cardvalid - Classify credit card numbers and validate their Luhn checksum
//!
//! This library provides the analysis core (normalization, network
//! classification, Luhn checksum, verdict formatting) and the thin layers
//! the CLI builds on: batch reading, the self-test, configuration and
//! output rendering.
//!
//! ```
//! assert_eq!(
//!     cardvalid::analyze("378282246310005"),
//!     "AMEX: 378282246310005        (valid)"
//! );
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod batch;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use crate::core::services::analyze;
pub use error::{Error, Result};
