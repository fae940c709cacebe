//! Analyze numbers given on the command line

use cardvalid::batch;
use cardvalid::output::{BatchResult, OutputMode};

/// Source name reported for numbers passed with `--number`
const ARGUMENTS_SOURCE: &str = "arguments";

/// Analyze each of `numbers` and print the verdicts in argument order
pub fn analyze_numbers(numbers: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let lines = batch::analyze_all(numbers);
    BatchResult::new(ARGUMENTS_SOURCE, &lines).render(mode);
    Ok(())
}
