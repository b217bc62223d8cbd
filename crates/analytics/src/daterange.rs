//! Inclusive calendar date ranges
//!
//! The dashboard filters on whole days; both endpoints are included.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// An inclusive [start, end] range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date in the range (inclusive)
    pub start: NaiveDate,
    /// Last date in the range (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range
    ///
    /// An inverted interval (start after end) is rejected here, so malformed
    /// bounds can never reach the filter engine.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(AnalyticsError::InvalidDateRange(
                "end must not be before start".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Range covering a single day
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Parse a `YYYY-MM-DD,YYYY-MM-DD` pair
    pub fn parse(s: &str) -> Result<Self> {
        let (start, end) = s.split_once(',').ok_or_else(|| {
            AnalyticsError::InvalidDateRange(format!(
                "expected YYYY-MM-DD,YYYY-MM-DD, got '{}'",
                s
            ))
        })?;

        Self::new(parse_date(start.trim())?, parse_date(end.trim())?)
    }

    /// Whether a date falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered (both endpoints counted)
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        AnalyticsError::InvalidDateRange(format!("invalid date '{}' (use YYYY-MM-DD)", s))
    })
}
