//! Synthetic history source backed by the random walk generator

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use super::{HistoryRequest, HistorySource};
use crate::error::HistoryError;
use crate::history::{HistoryGenerator, PriceSeries};

/// Serves generated histories in place of a real price feed
pub struct SyntheticSource {
    generator: HistoryGenerator,
    rng: Mutex<StdRng>,
    /// Fixed end date; `None` uses the local calendar date at fetch time
    today: Option<NaiveDate>,
}

impl SyntheticSource {
    /// Create a source with an entropy-seeded RNG
    pub fn new(generator: HistoryGenerator) -> Self {
        Self {
            generator,
            rng: Mutex::new(StdRng::from_entropy()),
            today: None,
        }
    }

    /// Create a source with a reproducible RNG
    pub fn seeded(generator: HistoryGenerator, seed: u64) -> Self {
        Self {
            generator,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            today: None,
        }
    }

    /// Pin the last day of every generated series
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

#[async_trait]
impl HistorySource for SyntheticSource {
    async fn fetch(&self, request: HistoryRequest) -> Result<PriceSeries, HistoryError> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let mut rng = self.rng.lock().await;

        let window_days = request
            .window_days
            .unwrap_or(self.generator.params().window_days);

        tracing::debug!(product_id = %request.product_id, window_days, "Generating synthetic history");
        self.generator
            .generate(request.base_price, window_days, today, &mut *rng)
    }
}
