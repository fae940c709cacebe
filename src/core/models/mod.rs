//! Domain models for cardvalid
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CandidateNumber`] - The input with whitespace removed
//! - [`CardType`] - Which network the number belongs to
//! - [`Validity`] - Whether the Luhn checksum passed
//! - [`Analysis`] - All three together, renderable as a verdict line

mod analysis;
mod candidate;
mod card_type;
mod validity;

pub use analysis::{Analysis, STATUS_COLUMN};
pub use candidate::CandidateNumber;
pub use card_type::{
    AMEX_LABEL, CardType, DISCOVER_LABEL, MASTERCARD_LABEL, UNKNOWN_LABEL, VISA_LABEL,
};
pub use validity::{INVALID_LABEL, VALID_LABEL, Validity};
