//! Price history module
//!
//! Synthetic daily price series standing in for an external price feed

mod generator;
mod types;

pub use generator::{HistoryGenerator, HistoryParams};
pub use types::{PricePoint, PriceSeries};
