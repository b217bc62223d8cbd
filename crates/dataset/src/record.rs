//! Sales record and table types

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the sales dataset
///
/// Immutable once loaded; filtering and aggregation never modify records,
/// they produce new derived collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Order identifier (unique per order, not necessarily per row)
    pub order_id: String,
    /// Calendar date of the order
    pub date: NaiveDate,
    /// City of the sale
    pub city: String,
    /// Product sold
    pub product: String,
    /// Sale amount (non-negative)
    pub sales: f64,
    /// Hour of day the order was placed (0-23)
    pub hour: u8,
}

/// The loaded sales table: an ordered, read-only sequence of records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    /// Create a table from records, keeping their order
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// Records in load order
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records
    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// Earliest and latest order date; None when the table is empty
    ///
    /// Seeds the default date interval the same way the dashboard's date
    /// picker is bounded by the observed data.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.date;
        let span = self.records.iter().skip(1).fold((first, first), |(lo, hi), r| {
            (lo.min(r.date), hi.max(r.date))
        });
        Some(span)
    }

    /// Distinct cities, in first-seen order
    pub fn cities(&self) -> Vec<String> {
        distinct_first_seen(self.records.iter().map(|r| r.city.as_str()))
    }

    /// Distinct products, in first-seen order
    pub fn products(&self) -> Vec<String> {
        distinct_first_seen(self.records.iter().map(|r| r.product.as_str()))
    }
}

fn distinct_first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for value in values {
        if seen.insert(value) {
            distinct.push(value.to_string());
        }
    }
    distinct
}
