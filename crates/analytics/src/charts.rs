//! Chart-ready aggregates
//!
//! Each series pairs a grouping key with the summed sales amount over the
//! view. Groups with no matching rows are absent rather than zero-filled;
//! consumers render missing groups as gaps.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::FilteredView;

/// Sales summed for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePoint {
    /// The calendar date
    pub date: NaiveDate,
    /// Summed sales amount
    pub sales: f64,
}

/// Sales summed for one label (a product or a city)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPoint {
    /// The grouping label
    pub label: String,
    /// Summed sales amount
    pub sales: f64,
}

/// Sales summed for one hour of the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourPoint {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Summed sales amount
    pub sales: f64,
}

/// The four aggregates behind the dashboard's chart panels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartBundle {
    /// Daily sales trend, ascending by date
    pub daily_sales: Vec<DatePoint>,
    /// Per-product sales, in the order products appear in the view
    pub product_sales: Vec<LabelPoint>,
    /// Per-city sales, in the order cities appear in the view
    pub city_sales: Vec<LabelPoint>,
    /// Per-hour sales, ascending by hour
    pub hourly_sales: Vec<HourPoint>,
}

impl ChartBundle {
    /// Check if every series is empty
    pub fn is_empty(&self) -> bool {
        self.daily_sales.is_empty()
            && self.product_sales.is_empty()
            && self.city_sales.is_empty()
            && self.hourly_sales.is_empty()
    }
}

/// Build all four aggregates in one pass over the view
pub fn build(view: &FilteredView) -> ChartBundle {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut hourly: BTreeMap<u8, f64> = BTreeMap::new();
    let mut products = LabelSums::default();
    let mut cities = LabelSums::default();

    for record in view.iter() {
        *daily.entry(record.date).or_insert(0.0) += record.sales;
        *hourly.entry(record.hour).or_insert(0.0) += record.sales;
        products.add(&record.product, record.sales);
        cities.add(&record.city, record.sales);
    }

    ChartBundle {
        daily_sales: daily
            .into_iter()
            .map(|(date, sales)| DatePoint { date, sales })
            .collect(),
        product_sales: products.into_points(),
        city_sales: cities.into_points(),
        hourly_sales: hourly
            .into_iter()
            .map(|(hour, sales)| HourPoint { hour, sales })
            .collect(),
    }
}

/// Label sums kept in first-seen order
#[derive(Default)]
struct LabelSums {
    index: HashMap<String, usize>,
    points: Vec<LabelPoint>,
}

impl LabelSums {
    fn add(&mut self, label: &str, sales: f64) {
        match self.index.get(label) {
            Some(&i) => self.points[i].sales += sales,
            None => {
                self.index.insert(label.to_string(), self.points.len());
                self.points.push(LabelPoint {
                    label: label.to_string(),
                    sales,
                });
            }
        }
    }

    fn into_points(self) -> Vec<LabelPoint> {
        self.points
    }
}
