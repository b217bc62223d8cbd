//! Analytics error types

use thiserror::Error;

/// Analytics errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid date interval
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),
}

/// Result type for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
