//! Vend Configuration
//!
//! TOML-based configuration with sensible defaults. An empty document is a
//! valid config; the CLI flags override whatever the file says.
//!
//! # Example
//!
//! ```toml
//! [dataset]
//! source = "data/sales.csv"
//!
//! [log]
//! level = "debug"
//! ```

mod dataset;
mod error;
mod logging;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use dataset::DatasetConfig;
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogLevel};

/// Main configuration structure
///
/// All sections are optional with defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Dataset source settings
    pub dataset: DatasetConfig,

    /// Logging settings
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(ConfigError::Parse)
    }
}
