//! Charts command - the grouped aggregates
//!
//! # Usage
//!
//! ```bash
//! vend charts                    # all four panels
//! vend charts --chart daily
//! vend charts --chart hourly --format csv
//! vend charts --chart product --format json
//! ```

use anyhow::Result;
use clap::Args;
use vend_analytics::{build, ChartBundle, Dashboard};

use super::{output, Context, FilterArgs};

/// Charts command arguments
#[derive(Args, Debug)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Which chart to print (daily, product, city, hourly, all)
    #[arg(short = 'C', long, default_value = "all")]
    pub chart: String,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the charts command
pub async fn run(ctx: &Context, args: ChartsArgs) -> Result<()> {
    let dashboard = Dashboard::new(ctx.load_table().await?);
    let criteria = args.filter.build_criteria(&dashboard)?;
    let bundle = build(&dashboard.view(&criteria));

    let chart = args.chart.to_lowercase();
    match args.format.as_str() {
        "json" => print_json(&bundle, &chart)?,
        "csv" => print_csv(&bundle, &chart)?,
        _ => print_tables(&bundle, &chart)?,
    }

    Ok(())
}

/// Chart panel titles, matching the dashboard layout
const DAILY_TITLE: &str = "Daily Sales Trend";
const PRODUCT_TITLE: &str = "Product Performance";
const CITY_TITLE: &str = "Sales by City";
const HOURLY_TITLE: &str = "Hourly Sales Pattern";

pub(crate) fn daily_rows(bundle: &ChartBundle) -> Vec<(String, f64)> {
    bundle
        .daily_sales
        .iter()
        .map(|p| (p.date.to_string(), p.sales))
        .collect()
}

pub(crate) fn product_rows(bundle: &ChartBundle) -> Vec<(String, f64)> {
    bundle
        .product_sales
        .iter()
        .map(|p| (p.label.clone(), p.sales))
        .collect()
}

pub(crate) fn city_rows(bundle: &ChartBundle) -> Vec<(String, f64)> {
    bundle
        .city_sales
        .iter()
        .map(|p| (p.label.clone(), p.sales))
        .collect()
}

pub(crate) fn hourly_rows(bundle: &ChartBundle) -> Vec<(String, f64)> {
    bundle
        .hourly_sales
        .iter()
        .map(|p| (format!("{:02}", p.hour), p.sales))
        .collect()
}

fn unknown_chart(chart: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "unknown chart: {}. Use one of: daily, product, city, hourly, all",
        chart
    )
}

/// Print all four panels, in the dashboard's layout order
pub(crate) fn print_all_tables(bundle: &ChartBundle) {
    output::print_series(DAILY_TITLE, "Date", &daily_rows(bundle));
    println!();
    output::print_series(PRODUCT_TITLE, "Product", &product_rows(bundle));
    println!();
    output::print_series(CITY_TITLE, "City", &city_rows(bundle));
    println!();
    output::print_series(HOURLY_TITLE, "Hour", &hourly_rows(bundle));
}

fn print_tables(bundle: &ChartBundle, chart: &str) -> Result<()> {
    match chart {
        "daily" => output::print_series(DAILY_TITLE, "Date", &daily_rows(bundle)),
        "product" => output::print_series(PRODUCT_TITLE, "Product", &product_rows(bundle)),
        "city" => output::print_series(CITY_TITLE, "City", &city_rows(bundle)),
        "hourly" => output::print_series(HOURLY_TITLE, "Hour", &hourly_rows(bundle)),
        "all" => print_all_tables(bundle),
        other => return Err(unknown_chart(other)),
    }
    Ok(())
}

fn print_json(bundle: &ChartBundle, chart: &str) -> Result<()> {
    let json = match chart {
        "daily" => serde_json::to_string_pretty(&bundle.daily_sales)?,
        "product" => serde_json::to_string_pretty(&bundle.product_sales)?,
        "city" => serde_json::to_string_pretty(&bundle.city_sales)?,
        "hourly" => serde_json::to_string_pretty(&bundle.hourly_sales)?,
        "all" => serde_json::to_string_pretty(bundle)?,
        other => return Err(unknown_chart(other)),
    };
    println!("{}", json);
    Ok(())
}

fn print_csv(bundle: &ChartBundle, chart: &str) -> Result<()> {
    match chart {
        "daily" => output::print_series_csv("date", &daily_rows(bundle)),
        "product" => output::print_series_csv("product", &product_rows(bundle)),
        "city" => output::print_series_csv("city", &city_rows(bundle)),
        "hourly" => output::print_series_csv("hour", &hourly_rows(bundle)),
        "all" => {
            output::print_series_csv("date", &daily_rows(bundle));
            println!();
            output::print_series_csv("product", &product_rows(bundle));
            println!();
            output::print_series_csv("city", &city_rows(bundle));
            println!();
            output::print_series_csv("hour", &hourly_rows(bundle));
        }
        other => return Err(unknown_chart(other)),
    }
    Ok(())
}
