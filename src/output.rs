//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! the classic verdict lines or as machine-parseable JSON.

use serde::Serialize;

use crate::batch::LineAnalysis;
use crate::core::models::{CardType, Validity};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Verdict lines (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A single verdict, flattened for serialization
#[derive(Debug, Clone, Serialize)]
pub struct VerdictInfo {
    /// One-based input line (or argument position)
    pub line: usize,
    /// Detected card network
    pub card_type: CardType,
    /// Whitespace-stripped number
    pub number: String,
    /// Luhn outcome
    pub validity: Validity,
    /// The formatted verdict line
    pub verdict: String,
}

impl From<&LineAnalysis> for VerdictInfo {
    fn from(item: &LineAnalysis) -> Self {
        Self {
            line: item.line,
            card_type: item.analysis.card_type,
            number: item.analysis.number.to_string(),
            validity: item.analysis.validity,
            verdict: item.analysis.to_string(),
        }
    }
}

/// Result of analyzing a file or a list of numbers
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    /// Where the numbers came from (a path, `-`, or `arguments`)
    pub source: String,
    /// Verdicts in input order
    pub results: Vec<VerdictInfo>,
    /// Number of valid verdicts
    pub valid: usize,
    /// Number of invalid verdicts
    pub invalid: usize,
}

impl BatchResult {
    /// Build a result from analyzed lines
    #[must_use]
    pub fn new(source: impl Into<String>, lines: &[LineAnalysis]) -> Self {
        let results: Vec<VerdictInfo> = lines.iter().map(VerdictInfo::from).collect();
        let valid = results.iter().filter(|r| r.validity.is_valid()).count();
        Self {
            source: source.into(),
            invalid: results.len() - valid,
            valid,
            results,
        }
    }

    /// The verdict lines as printed in human mode
    #[must_use]
    pub fn human_lines(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.verdict.as_str()).collect()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for line in self.human_lines() {
            println!("{line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// One comparison made by the self-test
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestCase {
    /// Raw input handed to the analyzer
    pub input: String,
    /// Verdict line the input must produce
    pub expected: String,
    /// Verdict line actually produced
    pub actual: String,
    /// Whether `actual` equals `expected`
    pub passed: bool,
}

/// Result of the built-in self-test
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestResult {
    /// Whether every case passed
    pub passed: bool,
    /// Every case in table order
    pub cases: Vec<SelfTestCase>,
}

impl SelfTestResult {
    /// Cases whose output did not match
    pub fn failures(&self) -> impl Iterator<Item = &SelfTestCase> {
        self.cases.iter().filter(|c| !c.passed)
    }

    /// The report printed in human mode
    #[must_use]
    pub fn human_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.cases.len() + 2);
        for case in &self.cases {
            if case.passed {
                lines.push(format!("ok      {}", case.input));
            } else {
                lines.push(format!("FAILED  {}", case.input));
                lines.push(format!("          expected: {}", case.expected));
                lines.push(format!("          actual:   {}", case.actual));
            }
        }
        let failed = self.failures().count();
        lines.push(String::new());
        lines.push(format!(
            "self-test: {} passed; {failed} failed",
            self.cases.len() - failed
        ));
        lines
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for line in self.human_lines() {
                    println!("{line}");
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
