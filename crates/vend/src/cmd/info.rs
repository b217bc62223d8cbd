//! Info command - dataset overview
//!
//! Row count, date span, and the city/product domains the filters offer.
//!
//! # Usage
//!
//! ```bash
//! vend info
//! vend info --format json
//! ```

use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;

/// Info command arguments
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the info command
pub async fn run(ctx: &Context, args: InfoArgs) -> Result<()> {
    let table = ctx.load_table().await?;
    let (start, end) = table.date_span().context("dataset has no records")?;

    match args.format.as_str() {
        "json" => {
            let json = serde_json::json!({
                "rows": table.len(),
                "start": start,
                "end": end,
                "cities": table.cities(),
                "products": table.products(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!("{:<10} {}", "Rows", table.len());
            println!("{:<10} {} to {}", "Dates", start, end);
            println!("{:<10} {}", "Cities", table.cities().join(", "));
            println!("{:<10} {}", "Products", table.products().join(", "));
        }
    }

    Ok(())
}
