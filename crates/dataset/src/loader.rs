//! Strict CSV loading for the sales table
//!
//! Supports local files and HTTP(S) URLs. The header must carry every
//! required column; every row must parse. A malformed row fails the whole
//! load so no partial table ever reaches the pipeline.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{DatasetError, Result};
use crate::record::{SalesRecord, SalesTable};

/// Header columns every dataset must carry
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Order_ID",
    "Order_Date",
    "City",
    "Product",
    "Sales",
    "Hour",
];

/// Date format used by the `Order_Date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Positions of the required columns in the header
struct ColumnIndex {
    order_id: usize,
    date: usize,
    city: usize,
    product: usize,
    sales: usize,
    hour: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))
        };

        Ok(Self {
            order_id: find("Order_ID")?,
            date: find("Order_Date")?,
            city: find("City")?,
            product: find("Product")?,
            sales: find("Sales")?,
            hour: find("Hour")?,
        })
    }
}

impl SalesTable {
    /// Load the table from any CSV reader
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(csv.headers()?)?;

        let mut records = Vec::new();
        for (i, row) in csv.records().enumerate() {
            let row = row?;
            // Header occupies line 1; data rows start at line 2
            records.push(parse_row(&row, &columns, i + 2)?);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        tracing::debug!(rows = records.len(), "loaded sales table");
        Ok(SalesTable::new(records))
    }

    /// Load the table from a local CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_csv_reader(file)
    }

    /// Fetch the table from an HTTP(S) URL
    pub async fn fetch(url: &str) -> Result<Self> {
        tracing::debug!(url, "fetching sales dataset");

        let body = reqwest::get(url)
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| DatasetError::Fetch {
                url: url.to_string(),
                source: e,
            })?
            .text()
            .await
            .map_err(|e| DatasetError::Fetch {
                url: url.to_string(),
                source: e,
            })?;

        Self::from_csv_reader(body.as_bytes())
    }

    /// Load from a local path or an http(s) URL
    pub async fn load(source: &str) -> Result<Self> {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::fetch(source).await
        } else {
            Self::from_csv_path(source)
        }
    }
}

fn parse_row(row: &StringRecord, columns: &ColumnIndex, line: usize) -> Result<SalesRecord> {
    let field = |index: usize, column: &'static str| -> Result<&str> {
        row.get(index)
            .ok_or_else(|| DatasetError::invalid_value(line, column, "missing value"))
    };

    let date_str = field(columns.date, "Order_Date")?;
    let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| {
        DatasetError::invalid_value(
            line,
            "Order_Date",
            format!("'{}' is not a YYYY-MM-DD date", date_str),
        )
    })?;

    let sales_str = field(columns.sales, "Sales")?;
    let sales: f64 = sales_str.parse().map_err(|_| {
        DatasetError::invalid_value(line, "Sales", format!("'{}' is not a number", sales_str))
    })?;
    if !sales.is_finite() || sales < 0.0 {
        return Err(DatasetError::invalid_value(
            line,
            "Sales",
            format!("'{}' must be a non-negative amount", sales_str),
        ));
    }

    let hour_str = field(columns.hour, "Hour")?;
    let hour: u8 = hour_str.parse().map_err(|_| {
        DatasetError::invalid_value(line, "Hour", format!("'{}' is not an integer", hour_str))
    })?;
    if hour > 23 {
        return Err(DatasetError::invalid_value(
            line,
            "Hour",
            format!("'{}' must be within 0-23", hour),
        ));
    }

    Ok(SalesRecord {
        order_id: field(columns.order_id, "Order_ID")?.to_string(),
        date,
        city: field(columns.city, "City")?.to_string(),
        product: field(columns.product, "Product")?.to_string(),
        sales,
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Order_ID,Order_Date,City,Product,Sales,Hour
O1,2024-01-01,NYC,Widget,10.50,9
O2,2024-01-01,LA,Widget,20,14
O3,2024-01-02,NYC,Gadget,5.25,9
";

    #[test]
    fn test_load_valid_csv() {
        let table = SalesTable::from_csv_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        let first = &table.records()[0];
        assert_eq!(first.order_id, "O1");
        assert_eq!(first.date.to_string(), "2024-01-01");
        assert_eq!(first.city, "NYC");
        assert_eq!(first.product, "Widget");
        assert_eq!(first.sales, 10.50);
        assert_eq!(first.hour, 9);
    }

    #[test]
    fn test_load_preserves_row_order() {
        let table = SalesTable::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        let ids: Vec<&str> = table.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["O1", "O2", "O3"]);
    }

    #[test]
    fn test_columns_in_any_order() {
        let csv = "\
Hour,Sales,Product,City,Order_Date,Order_ID
9,10,Widget,NYC,2024-01-01,O1
";
        let table = SalesTable::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.records()[0].order_id, "O1");
        assert_eq!(table.records()[0].hour, 9);
    }

    #[test]
    fn test_missing_column() {
        let csv = "Order_ID,Order_Date,City,Sales,Hour\nO1,2024-01-01,NYC,10,9\n";
        let err = SalesTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Product")));
    }

    #[test]
    fn test_bad_date_rejected() {
        let csv = "Order_ID,Order_Date,City,Product,Sales,Hour\nO1,01/02/2024,NYC,Widget,10,9\n";
        let err = SalesTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Order_Date"));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_bad_amount_rejected() {
        let csv = "Order_ID,Order_Date,City,Product,Sales,Hour\nO1,2024-01-01,NYC,Widget,lots,9\n";
        let err = SalesTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Sales"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let csv = "Order_ID,Order_Date,City,Product,Sales,Hour\nO1,2024-01-01,NYC,Widget,-5,9\n";
        let err = SalesTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_hour_out_of_range_rejected() {
        let csv = "Order_ID,Order_Date,City,Product,Sales,Hour\nO1,2024-01-01,NYC,Widget,10,24\n";
        let err = SalesTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("0-23"));
    }

    #[test]
    fn test_non_integer_hour_rejected() {
        let csv = "Order_ID,Order_Date,City,Product,Sales,Hour\nO1,2024-01-01,NYC,Widget,10,nine\n";
        let err = SalesTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Hour"));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let csv = "Order_ID,Order_Date,City,Product,Sales,Hour\n";
        let err = SalesTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_from_csv_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = SalesTable::from_csv_path(file.path()).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_from_csv_path_missing_file() {
        let err = SalesTable::from_csv_path("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_dispatches_to_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = file.path().display().to_string();
        let table = SalesTable::load(&source).await.unwrap();
        assert_eq!(table.len(), 3);
    }
}
