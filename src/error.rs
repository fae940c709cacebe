//! Error types for reading input and configuration
//!
//! Card numbers themselves never produce errors; only the files around
//! them can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading batch input or configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be opened
    #[error("the argument at {} is not a readable file", path.display())]
    Unreadable {
        /// Path that was given
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input file contains bytes that are not UTF-8
    #[error("the argument at {} is not utf-8 (line {line})", path.display())]
    NotUtf8 {
        /// Path that was given
        path: PathBuf,
        /// One-based line number of the offending line
        line: usize,
    },

    /// Reading failed partway through the input
    #[error("failed to read {} at line {line}", path.display())]
    Read {
        /// Path that was given
        path: PathBuf,
        /// One-based line number being read
        line: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be read
    #[error("cannot read config file {}", path.display())]
    ConfigUnreadable {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::Config`]
    #[error("invalid config file {}", path.display())]
    Config {
        /// Config path
        path: PathBuf,
        /// Parse error
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias for cardvalid library operations
pub type Result<T> = std::result::Result<T, Error>;
