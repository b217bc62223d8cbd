//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// No dataset source is configured anywhere
    #[error("no dataset source configured - set [dataset] source or pass --data")]
    MissingSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_message() {
        let err = ConfigError::MissingSource;
        assert!(err.to_string().contains("--data"));
    }
}
