//! Filesystem locations used by cardvalid
//!
//! ```text
//! <config dir>/cardvalid/
//! └── config.toml               # User preferences (output mode, blank lines)
//! ```
//!
//! `<config dir>` is the platform config directory (`~/.config` on Linux).

use std::path::PathBuf;

/// Directory name under the platform config directory
const CONFIG_DIR: &str = "cardvalid";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the cardvalid config directory, if the platform has one.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR))
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}
