//! Tests for the analysis core
//!
//! Exact verdict lines for the golden inputs, plus the malformed and
//! boundary inputs that must degrade to `invalid` without failing.

use cardvalid::analyze;
use cardvalid::core::models::{Analysis, CandidateNumber, CardType, STATUS_COLUMN, Validity};
use cardvalid::self_test::GOLDEN_CASES;

use crate::common::{SAMPLE_INPUT, SAMPLE_OUTPUT};

// =============================================================================
// Golden lines
// =============================================================================

#[test]
fn golden_cases_match() {
    for (input, expected) in GOLDEN_CASES {
        assert_eq!(analyze(input), *expected, "input={input:?}");
    }
}

#[test]
fn sample_input_matches_sample_output() {
    let actual: Vec<String> = SAMPLE_INPUT.lines().map(analyze).collect();
    assert_eq!(actual, SAMPLE_OUTPUT);
}

#[test]
fn whitespace_does_not_change_the_verdict() {
    assert_eq!(analyze("5105 1051 0510 5106"), analyze("5105105105105106"));
    assert_eq!(analyze("\t4012 8888\n8888 1881 "), analyze("4012888888881881"));
}

#[test]
fn trailing_unit_separator_is_whitespace() {
    assert_eq!(
        analyze("4111111111111111\u{1f}"),
        "VISA: 4111111111111111       (valid)"
    );
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn all_whitespace_is_unknown_and_invalid() {
    let analysis = Analysis::of(" \t \r\n");
    assert_eq!(analysis.card_type, CardType::Unknown);
    assert_eq!(analysis.validity, Validity::Invalid);
    assert!(analysis.number.is_empty());
    assert_eq!(analysis.to_string(), format!("Unknown: {}(invalid)", " ".repeat(20)));
}

#[test]
fn empty_string_is_unknown_and_invalid() {
    assert_eq!(analyze(""), analyze("   "));
}

#[test]
fn dashes_make_the_number_invalid() {
    assert_eq!(
        analyze("4111-1111-1111-1111"),
        "Unknown: 4111-1111-1111-1111 (invalid)"
    );
}

#[test]
fn letters_are_still_classified() {
    let analysis = Analysis::of("37828224631000X");
    assert_eq!(analysis.card_type, CardType::Amex);
    assert_eq!(analysis.validity, Validity::Invalid);
}

#[test]
fn non_ascii_digits_are_invalid() {
    // Fullwidth digits are numeric but not ASCII
    let analysis = Analysis::of("４１１１１１１１１１１１１１１１");
    assert_eq!(analysis.validity, Validity::Invalid);
    assert_eq!(analysis.card_type, CardType::Unknown);
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn status_starts_at_column_for_short_prologues() {
    for (input, _) in GOLDEN_CASES {
        let analysis = Analysis::of(input);
        let line = analysis.to_string();
        if analysis.prologue().len() < STATUS_COLUMN {
            assert_eq!(line.find('('), Some(STATUS_COLUMN), "line={line:?}");
        }
    }
}

#[test]
fn long_prologue_gets_single_space() {
    let line = analyze("6011 0000 0000 0000 0004 2");
    assert_eq!(line, "Unknown: 601100000000000000042 (invalid)");
}

#[test]
fn candidate_number_round_trips_through_verdict() {
    let number = CandidateNumber::normalize("6011 1111 1111 1117");
    let line = analyze(number.as_str());
    assert!(line.contains(number.as_str()));
}
