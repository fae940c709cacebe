//! Card network classification
//!
//! Networks are recognised by an ordered table of rules; the first rule
//! whose predicate holds decides the [`CardType`]. Rules only look at the
//! leading characters and the character count, so they apply to malformed
//! numbers too.

use crate::core::models::{CandidateNumber, CardType};

/// One row of the classification table
#[derive(Debug, Clone, Copy)]
pub struct CardRule {
    /// Network reported when the rule matches
    pub card_type: CardType,
    /// Predicate over the normalized number
    pub matches: fn(&CandidateNumber) -> bool,
}

/// Classification rules in priority order
pub const CARD_RULES: &[CardRule] = &[
    CardRule {
        card_type: CardType::Visa,
        matches: is_visa,
    },
    CardRule {
        card_type: CardType::Amex,
        matches: is_amex,
    },
    CardRule {
        card_type: CardType::MasterCard,
        matches: is_mastercard,
    },
    CardRule {
        card_type: CardType::Discover,
        matches: is_discover,
    },
];

fn is_visa(number: &CandidateNumber) -> bool {
    number.nth_char(0) == Some('4') && matches!(number.len(), 13 | 16)
}

fn is_amex(number: &CandidateNumber) -> bool {
    number.nth_char(0) == Some('3')
        && matches!(number.nth_char(1), Some('4' | '7'))
        && number.len() == 15
}

fn is_mastercard(number: &CandidateNumber) -> bool {
    number.nth_char(0) == Some('5')
        && matches!(number.nth_char(1), Some('1'..='5'))
        && number.len() == 16
}

fn is_discover(number: &CandidateNumber) -> bool {
    number.starts_with("6011") && number.len() == 16
}

/// Classify `number` against [`CARD_RULES`]
#[must_use]
pub fn classify(number: &CandidateNumber) -> CardType {
    classify_with(CARD_RULES, number)
}

/// Classify `number` against an arbitrary rule table, first match wins
#[must_use]
pub fn classify_with(rules: &[CardRule], number: &CandidateNumber) -> CardType {
    rules
        .iter()
        .find(|rule| (rule.matches)(number))
        .map_or(CardType::Unknown, |rule| rule.card_type)
}
