//! Vend Analytics Core
//!
//! Filtering and aggregation over the loaded sales table.
//!
//! # Overview
//!
//! This crate is the computational core behind the dashboard:
//!
//! - **Criteria**: date interval plus city and product selections
//! - **FilteredView**: the records passing the current criteria
//! - **MetricsSummary**: the four scalar metric displays
//! - **ChartBundle**: the four grouped aggregates behind the chart panels
//!
//! # Usage
//!
//! ```ignore
//! use vend_analytics::{Criteria, Dashboard};
//!
//! let dashboard = Dashboard::new(table);
//!
//! // Default selection covers the full observed domain
//! let criteria = dashboard.default_criteria().unwrap().with_cities(["NYC"]);
//!
//! let snapshot = dashboard.snapshot(&criteria);
//! println!("total: {}", snapshot.summary.total_sales);
//! ```
//!
//! Every interaction recomputes the full pass (filter → summarize → build)
//! from the raw table. There is no incremental state and nothing to
//! invalidate; equal criteria always produce equal snapshots.

pub mod charts;
pub mod daterange;
pub mod engine;
pub mod error;
pub mod filter;
pub mod summary;

#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod summary_test;
#[cfg(test)]
mod testutil;

// Re-exports for convenience
pub use charts::{build, ChartBundle, DatePoint, HourPoint, LabelPoint};
pub use daterange::DateRange;
pub use engine::{Dashboard, DashboardSnapshot};
pub use error::{AnalyticsError, Result};
pub use filter::{Criteria, FilteredView};
pub use summary::{summarize, MetricsSummary, NO_TOP_PRODUCT};
