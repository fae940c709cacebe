//! Line-oriented batch analysis
//!
//! Each line of the input is analyzed on its own. Results are either
//! streamed to a callback as lines are read or collected in input order.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::Analysis;
use crate::error::{Error, Result};

/// Path that makes [`for_each_in_path`] read standard input
pub const STDIN_PATH: &str = "-";

/// Options for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Drop lines that contain nothing but whitespace
    pub skip_blank_lines: bool,
}

/// One analyzed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAnalysis {
    /// One-based line number in the input
    pub line: usize,
    /// Verdict for the line
    pub analysis: Analysis,
}

/// Analyze `reader` line by line, handing each result to `on_line` as
/// soon as it is read
///
/// Lines before a read error have already been delivered when the error
/// is returned. `source` only names the input in errors. Returns the
/// number of lines delivered.
pub fn for_each_line<R, F>(
    reader: R,
    source: &Path,
    options: BatchOptions,
    mut on_line: F,
) -> Result<usize>
where
    R: BufRead,
    F: FnMut(LineAnalysis),
{
    let mut delivered = 0;
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let text = line.map_err(|source_err| read_error(source, number, source_err))?;
        let analysis = Analysis::of(&text);
        if options.skip_blank_lines && analysis.number.is_empty() {
            continue;
        }
        on_line(LineAnalysis {
            line: number,
            analysis,
        });
        delivered += 1;
    }
    debug!("analyzed {delivered} line(s) from {}", source.display());
    Ok(delivered)
}

/// Stream every line of the file at `path`, or stdin for [`STDIN_PATH`]
pub fn for_each_in_path<F>(path: &Path, options: BatchOptions, on_line: F) -> Result<usize>
where
    F: FnMut(LineAnalysis),
{
    if path.as_os_str() == STDIN_PATH {
        return for_each_line(io::stdin().lock(), path, options, on_line);
    }
    let file = File::open(path).map_err(|source| Error::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    for_each_line(BufReader::new(file), path, options, on_line)
}

/// Analyze every line of `reader` and collect the results
pub fn analyze_reader<R: BufRead>(
    reader: R,
    source: &Path,
    options: BatchOptions,
) -> Result<Vec<LineAnalysis>> {
    let mut results = Vec::new();
    for_each_line(reader, source, options, |line| results.push(line))?;
    Ok(results)
}

/// Analyze every line of the file at `path` and collect the results
pub fn analyze_path(path: &Path, options: BatchOptions) -> Result<Vec<LineAnalysis>> {
    let mut results = Vec::new();
    for_each_in_path(path, options, |line| results.push(line))?;
    Ok(results)
}

/// Analyze a list of numbers given directly, numbered from one
#[must_use]
pub fn analyze_all<S: AsRef<str>>(inputs: &[S]) -> Vec<LineAnalysis> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, raw)| LineAnalysis {
            line: index + 1,
            analysis: Analysis::of(raw.as_ref()),
        })
        .collect()
}

fn read_error(path: &Path, line: usize, source: io::Error) -> Error {
    let path = PathBuf::from(path);
    if source.kind() == io::ErrorKind::InvalidData {
        Error::NotUtf8 { path, line }
    } else {
        Error::Read { path, line, source }
    }
}
