//! Tests for the metric summaries

use crate::filter::Criteria;
use crate::summary::{summarize, MetricsSummary, NO_TOP_PRODUCT};
use crate::testutil::{record, sample_table};
use vend_dataset::SalesTable;

fn view_of(table: &SalesTable) -> crate::filter::FilteredView {
    Criteria::spanning(table).unwrap().apply(table.records())
}

#[test]
fn test_nyc_view_metrics() {
    let table = sample_table();
    let criteria = Criteria::spanning(&table).unwrap().with_cities(["NYC"]);
    let view = criteria.apply(table.records());

    let summary = summarize(&view);
    assert_eq!(summary.total_sales, 15.0);
    assert_eq!(summary.order_count, 2);
    assert_eq!(summary.avg_order_value, 7.5);
    // Widget and Gadget both appear once; Widget is seen first
    assert_eq!(summary.top_product, "Widget");
}

#[test]
fn test_empty_view() {
    let summary = summarize(&crate::filter::FilteredView::default());
    assert_eq!(
        summary,
        MetricsSummary {
            total_sales: 0.0,
            order_count: 0,
            avg_order_value: 0.0,
            top_product: NO_TOP_PRODUCT.to_string(),
        }
    );
}

#[test]
fn test_order_count_is_distinct() {
    // One order split across two rows
    let table = SalesTable::new(vec![
        record("O1", "2024-01-01", "NYC", "Widget", 10.0, 9),
        record("O1", "2024-01-01", "NYC", "Gadget", 30.0, 9),
        record("O2", "2024-01-02", "NYC", "Widget", 20.0, 10),
    ]);

    let summary = summarize(&view_of(&table));
    assert_eq!(summary.order_count, 2);
}

#[test]
fn test_avg_divides_by_rows_not_orders() {
    // O1 spans two rows: the mean is 60/3, not 60/2
    let table = SalesTable::new(vec![
        record("O1", "2024-01-01", "NYC", "Widget", 10.0, 9),
        record("O1", "2024-01-01", "NYC", "Gadget", 30.0, 9),
        record("O2", "2024-01-02", "NYC", "Widget", 20.0, 10),
    ]);

    let summary = summarize(&view_of(&table));
    assert_eq!(summary.avg_order_value, 20.0);
}

#[test]
fn test_top_product_by_row_count_not_revenue() {
    // Gadget earns more total but Widget has more rows
    let table = SalesTable::new(vec![
        record("O1", "2024-01-01", "NYC", "Widget", 1.0, 9),
        record("O2", "2024-01-01", "NYC", "Widget", 1.0, 10),
        record("O3", "2024-01-02", "NYC", "Gadget", 500.0, 11),
    ]);

    let summary = summarize(&view_of(&table));
    assert_eq!(summary.top_product, "Widget");
}

#[test]
fn test_top_product_tie_breaks_first_seen() {
    let table = SalesTable::new(vec![
        record("O1", "2024-01-01", "NYC", "Gadget", 5.0, 9),
        record("O2", "2024-01-01", "NYC", "Widget", 50.0, 10),
        record("O3", "2024-01-02", "NYC", "Widget", 50.0, 11),
        record("O4", "2024-01-02", "NYC", "Gadget", 5.0, 12),
    ]);

    // Two rows each; Gadget appears first in the view
    let summary = summarize(&view_of(&table));
    assert_eq!(summary.top_product, "Gadget");
}

#[test]
fn test_total_over_full_sample() {
    let summary = summarize(&view_of(&sample_table()));
    assert_eq!(summary.total_sales, 35.0);
    assert_eq!(summary.order_count, 3);
}
