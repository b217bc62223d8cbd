//! Dashboard command - the full page
//!
//! Prints the metrics row followed by all four chart panels: the whole
//! dashboard in one screen. This is also what running `vend` with no
//! subcommand does.

use anyhow::Result;
use clap::Args;
use vend_analytics::Dashboard;

use super::{charts, summary, Context, FilterArgs};

/// Dashboard command arguments
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Run the dashboard command
pub async fn run(ctx: &Context, args: DashboardArgs) -> Result<()> {
    let dashboard = Dashboard::new(ctx.load_table().await?);
    let criteria = args.filter.build_criteria(&dashboard)?;
    let snapshot = dashboard.snapshot(&criteria);

    println!("Sales Dashboard");
    println!("===============");
    println!();
    summary::print_summary(&snapshot.summary, "table")?;
    println!();
    charts::print_all_tables(&snapshot.charts);

    Ok(())
}
