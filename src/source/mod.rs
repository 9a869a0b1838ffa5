//! History source module
//!
//! Async boundary between display surfaces and wherever price histories come
//! from. The only implementation today is the synthetic generator, but a real
//! feed would slot in behind the same trait.

mod loader;
mod synthetic;

pub use loader::{HistoryLoader, HistoryView};
pub use synthetic::SyntheticSource;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;
use crate::history::PriceSeries;

/// A request for one product's trailing price history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Product identifier (e.g., "trendyol-protein-0")
    pub product_id: String,
    /// Current price of the product, used as the walk's seed price
    pub base_price: Decimal,
    /// Trailing window length in days; `None` uses the source's configured window
    #[serde(default)]
    pub window_days: Option<u32>,
}

impl HistoryRequest {
    /// Create a new history request
    pub fn new(product_id: impl Into<String>, base_price: Decimal, window_days: u32) -> Self {
        Self {
            product_id: product_id.into(),
            base_price,
            window_days: Some(window_days),
        }
    }

    /// Create a request over the source's configured window
    pub fn with_default_window(product_id: impl Into<String>, base_price: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            base_price,
            window_days: None,
        }
    }
}

/// Trait for price history providers
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch the trailing price history for a product
    async fn fetch(&self, request: HistoryRequest) -> Result<PriceSeries, HistoryError>;
}
