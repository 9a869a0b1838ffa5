//! pricewatch: synthetic price histories for e-commerce price tracking
//!
//! This library provides:
//! - A seedable random-walk generator for daily price histories
//! - Summary statistics and day-over-day change tables
//! - An async history source with last-request-wins loading
//! - Display policies: viewport layout, chart scaling, tr-TR formatting,
//!   dashboard alerts
//! - Keyword and store watchlists with sortable product listings
//! - Configuration, logging and a CLI

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod source;
pub mod stats;
pub mod telemetry;
pub mod view;
pub mod watchlist;

pub use error::{HistoryError, WatchlistError};
pub use history::{HistoryGenerator, HistoryParams, PricePoint, PriceSeries};
pub use stats::{summarize, tabulate, DeltaRow, SummaryStatistics};
