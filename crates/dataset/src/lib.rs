//! Vend sales dataset
//!
//! Loading and in-memory representation of the sales table.
//!
//! The table is loaded once, from a local CSV file or an HTTP(S) URL, and is
//! immutable afterwards. Loading is strict: a missing required column, an
//! unparsable value, or an empty dataset fails the whole load rather than
//! producing a partial table.
//!
//! # Usage
//!
//! ```ignore
//! use vend_dataset::SalesTable;
//!
//! let table = SalesTable::load("data/sales.csv").await?;
//! println!("{} rows, cities: {:?}", table.len(), table.cities());
//! ```

pub mod error;
pub mod loader;
pub mod record;

// Re-exports for convenience
pub use error::{DatasetError, Result};
pub use loader::{DATE_FORMAT, REQUIRED_COLUMNS};
pub use record::{SalesRecord, SalesTable};
