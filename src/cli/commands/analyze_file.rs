//! Analyze a file of card numbers, one per line

use std::path::Path;

use cardvalid::batch::{self, BatchOptions};
use cardvalid::output::{BatchResult, OutputMode};
use log::debug;

/// Analyze every line of `path` and print the verdicts in order
///
/// Human mode prints each verdict as soon as its line is read, so a read
/// error partway through still leaves the earlier verdicts on stdout.
pub fn analyze_file(path: &Path, options: BatchOptions, mode: OutputMode) -> anyhow::Result<()> {
    debug!("batch mode: {} ({options:?})", path.display());
    match mode {
        OutputMode::Human => {
            batch::for_each_in_path(path, options, |line| println!("{}", line.analysis))?;
        },
        OutputMode::Json => {
            let lines = batch::analyze_path(path, options)?;
            BatchResult::new(path.display().to_string(), &lines).render(mode);
        },
    }
    Ok(())
}
