//! Rows command - the raw filtered records
//!
//! The dashboard's "show filtered data" toggle: prints the records passing
//! the current filters, in table order.
//!
//! # Usage
//!
//! ```bash
//! vend rows --city NYC --limit 20
//! vend rows --format csv > nyc.csv
//! ```

use anyhow::Result;
use clap::Args;
use vend_analytics::Dashboard;
use vend_dataset::SalesRecord;

use super::{output, Context, FilterArgs};

/// Rows command arguments
#[derive(Args, Debug)]
pub struct RowsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum number of rows to print
    #[arg(short, long, default_value = "100")]
    pub limit: usize,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the rows command
pub async fn run(ctx: &Context, args: RowsArgs) -> Result<()> {
    let dashboard = Dashboard::new(ctx.load_table().await?);
    let criteria = args.filter.build_criteria(&dashboard)?;

    let view = dashboard.view(&criteria);
    let shown = &view.records()[..view.len().min(args.limit)];

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(shown)?);
        }
        "csv" => {
            println!("order_id,order_date,city,product,sales,hour");
            for r in shown {
                println!(
                    "{},{},{},{},{},{}",
                    r.order_id, r.date, r.city, r.product, r.sales, r.hour
                );
            }
        }
        _ => print_table(shown, view.len()),
    }

    Ok(())
}

fn print_table(rows: &[SalesRecord], total: usize) {
    if rows.is_empty() {
        println!("(no data)");
        return;
    }

    let order_width = column_width(rows.iter().map(|r| r.order_id.len()), "Order ID");
    let city_width = column_width(rows.iter().map(|r| r.city.len()), "City");
    let product_width = column_width(rows.iter().map(|r| r.product.len()), "Product");

    println!(
        "{:<ow$}  {:<10}  {:<cw$}  {:<pw$}  {:>12}  {:>4}",
        "Order ID",
        "Date",
        "City",
        "Product",
        "Sales",
        "Hour",
        ow = order_width,
        cw = city_width,
        pw = product_width,
    );

    let line_width = order_width + city_width + product_width + 10 + 12 + 4 + 10;
    println!("{}", "-".repeat(line_width));

    for r in rows {
        println!(
            "{:<ow$}  {:<10}  {:<cw$}  {:<pw$}  {:>12}  {:>4}",
            r.order_id,
            r.date.to_string(),
            r.city,
            r.product,
            output::format_money(r.sales),
            r.hour,
            ow = order_width,
            cw = city_width,
            pw = product_width,
        );
    }

    println!("{}", "-".repeat(line_width));
    if rows.len() < total {
        println!("{} of {} rows", rows.len(), total);
    } else {
        println!("{} rows", total);
    }
}

fn column_width(lengths: impl Iterator<Item = usize>, header: &str) -> usize {
    lengths.max().unwrap_or(0).max(header.len())
}
