//! Shared fixtures for analytics tests

use chrono::NaiveDate;
use vend_dataset::{SalesRecord, SalesTable};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn record(
    order_id: &str,
    day: &str,
    city: &str,
    product: &str,
    sales: f64,
    hour: u8,
) -> SalesRecord {
    SalesRecord {
        order_id: order_id.to_string(),
        date: date(day),
        city: city.to_string(),
        product: product.to_string(),
        sales,
        hour,
    }
}

/// Three orders across two days, two cities, and two products
pub fn sample_table() -> SalesTable {
    SalesTable::new(vec![
        record("O1", "2024-01-01", "NYC", "Widget", 10.0, 9),
        record("O2", "2024-01-01", "LA", "Widget", 20.0, 14),
        record("O3", "2024-01-02", "NYC", "Gadget", 5.0, 9),
    ])
}
