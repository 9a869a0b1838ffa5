//! CLI interface for pricewatch
//!
//! Provides subcommands for:
//! - `history`: Synthetic price history report for one product
//! - `alerts`: Dashboard price alerts for the configured catalog
//! - `watchlist`: Tracked keywords and stores with a sortable product listing
//! - `config`: Show the effective configuration

mod alerts;
mod history;
mod watchlist;

pub use alerts::AlertsArgs;
pub use history::HistoryArgs;
pub use watchlist::{build_listings, WatchlistArgs};

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};

use crate::history::HistoryGenerator;
use crate::source::SyntheticSource;

#[derive(Parser, Debug)]
#[command(name = "pricewatch")]
#[command(about = "Synthetic price histories and price statistics for tracked products")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate and summarize a product's price history
    History(HistoryArgs),
    /// List price alerts for tracked products
    Alerts(AlertsArgs),
    /// Show tracked keywords and stores with their products
    Watchlist(WatchlistArgs),
    /// Show configuration
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Synthetic source for a command run, seeded when `seed` is given
fn synthetic_source(
    generator: HistoryGenerator,
    seed: Option<u64>,
    today: Option<NaiveDate>,
) -> SyntheticSource {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let source = match seed {
        Some(seed) => SyntheticSource::seeded(generator, seed),
        None => SyntheticSource::new(generator),
    };
    source.with_today(today)
}
