//! Configuration management
//!
//! Preferences are read from `config.toml` in the cardvalid config
//! directory (see [`crate::paths`]), or from a file given with `--config`.
//! A missing default file simply means defaults.
//!
//! ```toml
//! json = false
//! skip_blank_lines = false
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::batch::BatchOptions;
use crate::error::{Error, Result};
use crate::output::OutputMode;
use crate::paths;

/// cardvalid configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit JSON instead of verdict lines
    pub json: bool,
    /// Drop verdicts for blank input lines
    pub skip_blank_lines: bool,
}

impl Config {
    /// Load config from `explicit`, or from the default location
    ///
    /// An explicit path must exist. The default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match paths::config_file() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Read and parse the config file at `path`
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading config from {}", path.display());
        Self::parse(path, &content)
    }

    /// Parse TOML `content`; `path` only names the source in errors
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Output mode implied by this config
    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        if self.json { OutputMode::Json } else { OutputMode::Human }
    }

    /// Batch options implied by this config
    #[must_use]
    pub const fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            skip_blank_lines: self.skip_blank_lines,
        }
    }
}
