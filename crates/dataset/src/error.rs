//! Dataset error types

use std::io;
use thiserror::Error;

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors that can occur while loading the sales table
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to read a local dataset file
    #[error("failed to read dataset '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to fetch a remote dataset
    #[error("failed to fetch dataset '{url}': {source}")]
    Fetch {
        /// The requested URL
        url: String,
        /// Underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// Malformed CSV input
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A value failed validation
    #[error("row {row}: invalid {column}: {message}")]
    InvalidValue {
        /// CSV line number (header is line 1)
        row: usize,
        /// Column the value came from
        column: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// The dataset contains no data rows
    #[error("dataset contains no rows")]
    Empty,
}

impl DatasetError {
    /// Create an InvalidValue error
    pub fn invalid_value(row: usize, column: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            row,
            column,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = DatasetError::MissingColumn("Order_Date");
        assert!(err.to_string().contains("Order_Date"));
        assert!(err.to_string().contains("missing required column"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = DatasetError::invalid_value(7, "Hour", "'29' must be within 0-23");
        let msg = err.to_string();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("Hour"));
        assert!(msg.contains("29"));
    }
}
