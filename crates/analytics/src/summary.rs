//! Scalar summaries over a filtered view
//!
//! The four metric displays: total sales, distinct order count, average
//! order value, and the most frequent product.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::filter::FilteredView;

/// Sentinel reported as the top product of an empty view
pub const NO_TOP_PRODUCT: &str = "N/A";

/// The four metric displays of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Sum of the sales amount over the view
    pub total_sales: f64,
    /// Count of distinct order identifiers in the view
    pub order_count: usize,
    /// Mean sales amount per row
    ///
    /// Divides by row count, not by distinct orders: an order spanning
    /// several rows weighs once per row.
    pub avg_order_value: f64,
    /// Product appearing on the most rows; ties go to the product seen
    /// first in the view. `"N/A"` for an empty view.
    pub top_product: String,
}

impl MetricsSummary {
    /// Summary of an empty view
    pub fn empty() -> Self {
        Self {
            total_sales: 0.0,
            order_count: 0,
            avg_order_value: 0.0,
            top_product: NO_TOP_PRODUCT.to_string(),
        }
    }
}

/// Compute the four metrics in one pass over the view
pub fn summarize(view: &FilteredView) -> MetricsSummary {
    if view.is_empty() {
        return MetricsSummary::empty();
    }

    let mut total = 0.0;
    let mut orders: HashSet<&str> = HashSet::new();
    // product -> (first-seen row index, row count)
    let mut product_counts: HashMap<&str, (usize, u64)> = HashMap::new();

    for (i, record) in view.iter().enumerate() {
        total += record.sales;
        orders.insert(record.order_id.as_str());
        product_counts
            .entry(record.product.as_str())
            .or_insert((i, 0))
            .1 += 1;
    }

    // Highest row count wins; equal counts fall back to first-seen order,
    // which keeps the result independent of hash iteration order.
    let top_product = product_counts
        .iter()
        .max_by(|(_, (ia, ca)), (_, (ib, cb))| ca.cmp(cb).then(ib.cmp(ia)))
        .map(|(product, _)| (*product).to_string())
        .unwrap_or_else(|| NO_TOP_PRODUCT.to_string());

    MetricsSummary {
        total_sales: total,
        order_count: orders.len(),
        avg_order_value: total / view.len() as f64,
        top_product,
    }
}
