//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered either as
//! verdict lines or machine-parseable JSON.

use cardvalid::batch::analyze_all;
use cardvalid::output::{BatchResult, OutputMode, SelfTestCase, SelfTestResult};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// BatchResult Tests
// =============================================================================

#[test]
fn batch_result_counts() {
    let lines = analyze_all(&["4111111111111111", "4111111111111", "378282246310005"]);
    let result = BatchResult::new("arguments", &lines);
    assert_eq!(result.valid, 2);
    assert_eq!(result.invalid, 1);
    assert_eq!(result.results.len(), 3);
}

#[test]
fn batch_result_human_lines_are_verdicts() {
    let lines = analyze_all(&["6011111111111117", "9111111111111111"]);
    let result = BatchResult::new("cards.txt", &lines);
    assert_eq!(
        result.human_lines(),
        vec![
            "Discover: 6011111111111117   (valid)",
            "Unknown: 9111111111111111    (invalid)",
        ]
    );
}

#[test]
fn batch_result_serialization() {
    let lines = analyze_all(&["5105 1051 0510 5100"]);
    let result = BatchResult::new("arguments", &lines);

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["source"], "arguments");
    assert_eq!(json["valid"], 1);
    let first = &json["results"][0];
    assert_eq!(first["line"], 1);
    assert_eq!(first["card_type"], "MasterCard");
    assert_eq!(first["number"], "5105105105105100");
    assert_eq!(first["validity"], "valid");
    assert_eq!(first["verdict"], "MasterCard: 5105105105105100 (valid)");
}

#[test]
fn card_type_labels_in_json() {
    let lines = analyze_all(&["4111111111111111", "378282246310005", "1"]);
    let json = serde_json::to_string(&BatchResult::new("arguments", &lines)).unwrap();
    assert!(json.contains("\"card_type\":\"VISA\""));
    assert!(json.contains("\"card_type\":\"AMEX\""));
    assert!(json.contains("\"card_type\":\"Unknown\""));
}

// =============================================================================
// SelfTestResult Tests
// =============================================================================

fn case(input: &str, expected: &str, actual: &str) -> SelfTestCase {
    SelfTestCase {
        input: input.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
        passed: expected == actual,
    }
}

#[test]
fn self_test_summary_line() {
    let result = SelfTestResult {
        passed: false,
        cases: vec![case("1", "a", "a"), case("2", "b", "c")],
    };
    let lines = result.human_lines();
    assert_eq!(lines[0], "ok      1");
    assert_eq!(lines[1], "FAILED  2");
    assert!(lines[2].contains("expected: b"));
    assert!(lines[3].contains("actual:   c"));
    assert_eq!(lines.last().unwrap(), "self-test: 1 passed; 1 failed");
}

#[test]
fn self_test_serialization() {
    let result = SelfTestResult {
        passed: true,
        cases: vec![case("1", "a", "a")],
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"passed\":true"));
    assert!(json.contains("\"input\":\"1\""));
}
