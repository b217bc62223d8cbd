//! Summary command - the four metric displays
//!
//! # Usage
//!
//! ```bash
//! vend summary
//! vend summary --range 2024-01-01,2024-06-30 --city NYC --city LA
//! vend summary --format json
//! ```

use anyhow::Result;
use clap::Args;
use vend_analytics::{summarize, Dashboard, MetricsSummary};

use super::{output, Context, FilterArgs};

/// Summary command arguments
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the summary command
pub async fn run(ctx: &Context, args: SummaryArgs) -> Result<()> {
    let dashboard = Dashboard::new(ctx.load_table().await?);
    let criteria = args.filter.build_criteria(&dashboard)?;

    let summary = summarize(&dashboard.view(&criteria));
    print_summary(&summary, &args.format)
}

pub(crate) fn print_summary(summary: &MetricsSummary, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        "csv" => {
            println!("total_sales,order_count,avg_order_value,top_product");
            println!(
                "{},{},{},{}",
                summary.total_sales, summary.order_count, summary.avg_order_value, summary.top_product
            );
        }
        _ => {
            println!(
                "{:<16} {}",
                "Total Sales",
                output::format_money(summary.total_sales)
            );
            println!("{:<16} {}", "Total Orders", summary.order_count);
            println!(
                "{:<16} {}",
                "Avg Order Value",
                output::format_money(summary.avg_order_value)
            );
            println!("{:<16} {}", "Top Product", summary.top_product);
        }
    }

    Ok(())
}
