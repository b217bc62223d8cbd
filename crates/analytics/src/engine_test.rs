//! Tests for the dashboard facade

use crate::engine::Dashboard;
use crate::summary::NO_TOP_PRODUCT;
use crate::testutil::sample_table;

#[test]
fn test_default_criteria_spans_the_table() {
    let dashboard = Dashboard::new(sample_table());
    let criteria = dashboard.default_criteria().unwrap();

    assert_eq!(criteria.dates.start.to_string(), "2024-01-01");
    assert_eq!(criteria.dates.end.to_string(), "2024-01-02");
    assert_eq!(criteria.cities.len(), 2);
    assert_eq!(criteria.products.len(), 2);
}

#[test]
fn test_snapshot_full_domain() {
    let dashboard = Dashboard::new(sample_table());
    let criteria = dashboard.default_criteria().unwrap();

    let snapshot = dashboard.snapshot(&criteria);
    assert_eq!(snapshot.summary.total_sales, 35.0);
    assert_eq!(snapshot.summary.order_count, 3);
    assert_eq!(snapshot.charts.daily_sales.len(), 2);
    assert_eq!(snapshot.charts.city_sales.len(), 2);
}

#[test]
fn test_snapshot_empty_selection() {
    let dashboard = Dashboard::new(sample_table());
    let criteria = dashboard
        .default_criteria()
        .unwrap()
        .with_cities(Vec::<String>::new());

    let snapshot = dashboard.snapshot(&criteria);
    assert_eq!(snapshot.summary.total_sales, 0.0);
    assert_eq!(snapshot.summary.order_count, 0);
    assert_eq!(snapshot.summary.avg_order_value, 0.0);
    assert_eq!(snapshot.summary.top_product, NO_TOP_PRODUCT);
    assert!(snapshot.charts.is_empty());
}

#[test]
fn test_snapshot_is_deterministic() {
    let dashboard = Dashboard::new(sample_table());
    let criteria = dashboard.default_criteria().unwrap().with_cities(["NYC"]);

    assert_eq!(dashboard.snapshot(&criteria), dashboard.snapshot(&criteria));
}

#[test]
fn test_view_backs_the_drill_down() {
    let dashboard = Dashboard::new(sample_table());
    let criteria = dashboard.default_criteria().unwrap().with_cities(["LA"]);

    let view = dashboard.view(&criteria);
    assert_eq!(view.len(), 1);
    assert_eq!(view.records()[0].order_id, "O2");
}

#[test]
fn test_snapshot_serializes() {
    let dashboard = Dashboard::new(sample_table());
    let criteria = dashboard.default_criteria().unwrap();

    let json = serde_json::to_value(dashboard.snapshot(&criteria)).unwrap();
    assert!(json["summary"]["total_sales"].is_number());
    assert!(json["charts"]["daily_sales"].is_array());
}
