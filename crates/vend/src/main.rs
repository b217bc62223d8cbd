//! Vend - sales dashboard in the terminal
//!
//! # Usage
//!
//! ```bash
//! # Full dashboard (metrics row + all chart panels)
//! vend --data data/sales.csv
//!
//! # Individual panels, with filters
//! vend summary --data data/sales.csv --city NYC --range 2024-01-01,2024-03-31
//! vend charts --chart hourly --format csv
//! vend rows --limit 20
//! vend info
//! ```

mod cmd;

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vend_config::Config;

/// Vend - sales dashboard in the terminal
#[derive(Parser, Debug)]
#[command(name = "vend")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Dataset path or http(s) URL. Overrides config file.
    #[arg(short, long, global = true)]
    data: Option<String>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full dashboard (metrics row + all chart panels)
    Dashboard(cmd::dashboard::DashboardArgs),

    /// Show the four summary metrics
    Summary(cmd::summary::SummaryArgs),

    /// Show chart aggregates (daily, product, city, hourly)
    Charts(cmd::charts::ChartsArgs),

    /// Show the filtered rows
    Rows(cmd::rows::RowsArgs),

    /// Show dataset overview (row count, date span, cities, products)
    Info(cmd::info::InfoArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = resolve_log_level(cli.log_level.as_deref(), cli.config.as_deref());
    init_logging(&log_level)?;

    let ctx = cmd::Context {
        config: cli.config,
        data: cli.data,
    };

    match cli.command {
        Some(Command::Dashboard(args)) => cmd::dashboard::run(&ctx, args).await,
        Some(Command::Summary(args)) => cmd::summary::run(&ctx, args).await,
        Some(Command::Charts(args)) => cmd::charts::run(&ctx, args).await,
        Some(Command::Rows(args)) => cmd::rows::run(&ctx, args).await,
        Some(Command::Info(args)) => cmd::info::run(&ctx, args).await,
        // No subcommand = full dashboard (default behavior)
        None => cmd::dashboard::run(&ctx, Default::default()).await,
    }
}

/// Resolve log level: CLI flag > config file > default "info"
fn resolve_log_level(cli_level: Option<&str>, config_path: Option<&Path>) -> String {
    if let Some(level) = cli_level {
        return level.to_string();
    }

    if let Some(path) = config_path {
        if path.exists() {
            if let Ok(config) = Config::from_file(path) {
                return config.log.level.as_str().to_string();
            }
        }
    }

    "info".to_string()
}

/// Initialize the tracing subscriber for logging
///
/// Logs go to stderr so stdout stays clean for the rendered tables.
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
