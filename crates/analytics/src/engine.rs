//! Dashboard facade
//!
//! Owns the loaded table (loading is the only expensive step, so it happens
//! once) and runs the full filter → summarize → build pass per interaction.

use serde::{Deserialize, Serialize};
use vend_dataset::SalesTable;

use crate::charts::{self, ChartBundle};
use crate::filter::{Criteria, FilteredView};
use crate::summary::{self, MetricsSummary};

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// The four metric displays
    pub summary: MetricsSummary,
    /// The four chart aggregates
    pub charts: ChartBundle,
}

/// The dashboard core: a write-once table and pure recomputation
pub struct Dashboard {
    table: SalesTable,
}

impl Dashboard {
    /// Create a dashboard over a loaded table
    pub fn new(table: SalesTable) -> Self {
        Self { table }
    }

    /// The underlying table
    pub fn table(&self) -> &SalesTable {
        &self.table
    }

    /// Default criteria covering the whole observed domain
    ///
    /// None when the table has no records.
    pub fn default_criteria(&self) -> Option<Criteria> {
        Criteria::spanning(&self.table)
    }

    /// Records passing the criteria, in table order
    ///
    /// Backs the "show filtered data" drill-down.
    pub fn view(&self, criteria: &Criteria) -> FilteredView {
        criteria.apply(self.table.records())
    }

    /// Run one full recomputation pass
    ///
    /// Nothing is cached between calls; two calls with equal criteria do
    /// the same work and return equal snapshots.
    pub fn snapshot(&self, criteria: &Criteria) -> DashboardSnapshot {
        let view = self.view(criteria);
        DashboardSnapshot {
            summary: summary::summarize(&view),
            charts: charts::build(&view),
        }
    }
}
