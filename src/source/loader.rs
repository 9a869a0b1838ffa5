//! Per-surface history loader with last-request-wins semantics
//!
//! Each display surface owns one loader. Every `load` takes a ticket; when
//! the fetch resolves, its result is dropped if a newer `load` has started in
//! the meantime, so a slow stale response never overwrites a fresher one.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::{HistoryRequest, HistorySource};
use crate::error::HistoryError;
use crate::history::PriceSeries;
use crate::stats::{summarize, tabulate, DeltaRow, SummaryStatistics};
use crate::telemetry::{self, CounterMetric};

/// Everything a surface renders for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub product_id: String,
    pub series: PriceSeries,
    pub summary: SummaryStatistics,
    pub rows: Vec<DeltaRow>,
}

/// Loads histories for a single display surface
pub struct HistoryLoader<S> {
    source: S,
    latest: AtomicU64,
}

impl<S: HistorySource> HistoryLoader<S> {
    /// Create a loader over the given source
    pub fn new(source: S) -> Self {
        Self {
            source,
            latest: AtomicU64::new(0),
        }
    }

    /// Underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and reduce a product's history
    ///
    /// Returns `Ok(None)` when a newer request superseded this one before it
    /// resolved; errors from superseded requests are discarded too.
    pub async fn load(&self, request: HistoryRequest) -> Result<Option<HistoryView>, HistoryError> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let product_id = request.product_id.clone();

        let fetched = self.source.fetch(request).await;

        if self.latest.load(Ordering::SeqCst) != ticket {
            telemetry::increment(CounterMetric::RequestSuperseded);
            tracing::debug!(product_id = %product_id, ticket, "Discarding superseded history");
            return Ok(None);
        }

        let series = fetched?;
        let summary = summarize(&series)?;
        let rows = tabulate(&series)?;

        Ok(Some(HistoryView {
            product_id,
            series,
            summary,
            rows,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{HistoryGenerator, PricePoint};
    use crate::source::SyntheticSource;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::{mpsc, oneshot, Mutex};

    /// Source whose responses are released by the test, one product at a time
    struct GatedSource {
        started: mpsc::UnboundedSender<String>,
        gates: Mutex<HashMap<String, oneshot::Receiver<Result<PriceSeries, HistoryError>>>>,
    }

    #[async_trait]
    impl HistorySource for GatedSource {
        async fn fetch(&self, request: HistoryRequest) -> Result<PriceSeries, HistoryError> {
            let gate = self.gates.lock().await.remove(&request.product_id);
            let _ = self.started.send(request.product_id.clone());
            match gate {
                Some(gate) => gate.await.unwrap_or(Err(HistoryError::EmptySeries)),
                None => Err(HistoryError::EmptySeries),
            }
        }
    }

    fn flat_series(price: rust_decimal::Decimal) -> PriceSeries {
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        PriceSeries::from_points(vec![PricePoint::new(today, price)]).unwrap()
    }

    #[tokio::test]
    async fn test_load_returns_reduced_view() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        let source = SyntheticSource::seeded(HistoryGenerator::with_defaults(), 5).with_today(today);
        let loader = HistoryLoader::new(source);

        let view = loader
            .load(HistoryRequest::new("hepsiburada-zuber-1", dec!(69.99), 30))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(view.product_id, "hepsiburada-zuber-1");
        assert_eq!(view.series.len(), 31);
        assert_eq!(view.rows.len(), 31);
        assert_eq!(view.summary.current, view.series.last().unwrap().price);
    }

    #[tokio::test]
    async fn test_load_surfaces_invalid_input() {
        let source = SyntheticSource::seeded(HistoryGenerator::with_defaults(), 5);
        let loader = HistoryLoader::new(source);

        let result = loader.load(HistoryRequest::new("p", dec!(-1), 30)).await;

        assert_eq!(result, Err(HistoryError::NonPositiveBasePrice(dec!(-1))));
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let (started_tx, mut started_rx) = mpsc::unbounded_channel();
        let (slow_tx, slow_rx) = oneshot::channel();
        let (fast_tx, fast_rx) = oneshot::channel();

        let mut gates = HashMap::new();
        gates.insert("slow".to_string(), slow_rx);
        gates.insert("fast".to_string(), fast_rx);

        let loader = Arc::new(HistoryLoader::new(GatedSource {
            started: started_tx,
            gates: Mutex::new(gates),
        }));

        let slow = tokio::spawn({
            let loader = Arc::clone(&loader);
            async move { loader.load(HistoryRequest::new("slow", dec!(100), 0)).await }
        });
        assert_eq!(started_rx.recv().await.unwrap(), "slow");

        let fast = tokio::spawn({
            let loader = Arc::clone(&loader);
            async move { loader.load(HistoryRequest::new("fast", dec!(50), 0)).await }
        });
        assert_eq!(started_rx.recv().await.unwrap(), "fast");

        fast_tx.send(Ok(flat_series(dec!(50)))).unwrap();
        let fresh = fast.await.unwrap().unwrap().unwrap();
        assert_eq!(fresh.product_id, "fast");
        assert_eq!(fresh.summary.current, dec!(50));

        slow_tx.send(Ok(flat_series(dec!(100)))).unwrap();
        assert_eq!(slow.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_stale_error_is_discarded() {
        let (started_tx, mut started_rx) = mpsc::unbounded_channel();
        let (slow_tx, slow_rx) = oneshot::channel();
        let (fast_tx, fast_rx) = oneshot::channel();

        let mut gates = HashMap::new();
        gates.insert("slow".to_string(), slow_rx);
        gates.insert("fast".to_string(), fast_rx);

        let loader = Arc::new(HistoryLoader::new(GatedSource {
            started: started_tx,
            gates: Mutex::new(gates),
        }));

        let slow = tokio::spawn({
            let loader = Arc::clone(&loader);
            async move { loader.load(HistoryRequest::new("slow", dec!(100), 0)).await }
        });
        started_rx.recv().await.unwrap();

        let fast = tokio::spawn({
            let loader = Arc::clone(&loader);
            async move { loader.load(HistoryRequest::new("fast", dec!(50), 0)).await }
        });
        started_rx.recv().await.unwrap();

        slow_tx.send(Err(HistoryError::EmptySeries)).unwrap();
        assert_eq!(slow.await.unwrap(), Ok(None));

        fast_tx.send(Ok(flat_series(dec!(50)))).unwrap();
        assert!(fast.await.unwrap().unwrap().is_some());
    }
}
