//! Filter criteria and the filtered view
//!
//! Criteria are a value object: the date interval plus the selected city and
//! product sets. A record passes when all three predicates hold. An empty
//! city or product selection selects nothing, matching a dashboard with
//! every option deselected.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use vend_dataset::{SalesRecord, SalesTable};

use crate::daterange::DateRange;

/// The current filter selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Date interval, inclusive on both ends
    pub dates: DateRange,
    /// Cities to include; an empty set matches no record
    pub cities: HashSet<String>,
    /// Products to include; an empty set matches no record
    pub products: HashSet<String>,
}

impl Criteria {
    /// Create criteria for a date interval with nothing selected
    ///
    /// Chain `with_cities`/`with_products` to populate the selections;
    /// criteria built here match no record until both sets are non-empty.
    pub fn new(dates: DateRange) -> Self {
        Self {
            dates,
            cities: HashSet::new(),
            products: HashSet::new(),
        }
    }

    /// The default selection: full observed date span, every city, every
    /// product. None when the table has no records.
    pub fn spanning(table: &SalesTable) -> Option<Self> {
        let (start, end) = table.date_span()?;
        Some(Self {
            dates: DateRange { start, end },
            cities: table.cities().into_iter().collect(),
            products: table.products().into_iter().collect(),
        })
    }

    /// Replace the date interval
    pub fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    /// Replace the city selection
    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = cities.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the product selection
    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = products.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a record passes all three predicates
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.dates.contains(record.date)
            && self.cities.contains(&record.city)
            && self.products.contains(&record.product)
    }

    /// Filter records into a view, preserving order
    ///
    /// Pure: the input is never modified. Applying the same criteria to the
    /// resulting view again returns an identical view.
    pub fn apply(&self, records: &[SalesRecord]) -> FilteredView {
        FilteredView {
            records: records.iter().filter(|r| self.matches(r)).cloned().collect(),
        }
    }
}

/// The subsequence of the table passing the current criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredView {
    records: Vec<SalesRecord>,
}

impl FilteredView {
    /// Records in the view, in table order
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Number of records in the view
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the view is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records
    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }
}
