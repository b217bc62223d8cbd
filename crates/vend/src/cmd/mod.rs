//! CLI subcommands

pub mod charts;
pub mod dashboard;
pub mod info;
pub mod rows;
pub mod summary;

mod output;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use vend_analytics::{Criteria, Dashboard, DateRange};
use vend_config::{Config, ConfigError};
use vend_dataset::SalesTable;

/// Global CLI context shared by every subcommand
pub struct Context {
    /// Config file path (optional)
    pub config: Option<PathBuf>,
    /// Dataset source override from --data
    pub data: Option<String>,
}

impl Context {
    /// Load the sales table from --data, falling back to the config file
    pub async fn load_table(&self) -> Result<SalesTable> {
        let source = self.resolve_source()?;
        tracing::info!(source = %source, "loading sales dataset");

        let table = SalesTable::load(&source)
            .await
            .with_context(|| format!("failed to load dataset from '{}'", source))?;

        tracing::debug!(rows = table.len(), "dataset ready");
        Ok(table)
    }

    fn resolve_source(&self) -> Result<String> {
        if let Some(data) = &self.data {
            return Ok(data.clone());
        }

        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        config
            .dataset
            .source
            .ok_or_else(|| ConfigError::MissingSource.into())
    }
}

/// Filter flags shared by the data commands
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Date range as YYYY-MM-DD,YYYY-MM-DD (default: full observed span)
    #[arg(short, long)]
    pub range: Option<String>,

    /// City to include (repeat for several; default: all cities)
    #[arg(long = "city")]
    pub cities: Vec<String>,

    /// Product to include (repeat for several; default: all products)
    #[arg(long = "product")]
    pub products: Vec<String>,
}

impl FilterArgs {
    /// Build criteria; unset dimensions default to the full observed domain
    pub fn build_criteria(&self, dashboard: &Dashboard) -> Result<Criteria> {
        let mut criteria = dashboard
            .default_criteria()
            .context("dataset has no records")?;

        if let Some(range) = &self.range {
            criteria = criteria.with_dates(DateRange::parse(range)?);
        }
        if !self.cities.is_empty() {
            criteria = criteria.with_cities(self.cities.iter().cloned());
        }
        if !self.products.is_empty() {
            criteria = criteria.with_products(self.products.iter().cloned());
        }

        Ok(criteria)
    }
}
