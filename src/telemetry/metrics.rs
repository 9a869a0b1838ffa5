//! Counters
//!
//! Recorded through the `metrics` facade. Without an installed recorder
//! these are no-ops.

/// Counter metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMetric {
    /// A price series was generated
    SeriesGenerated,
    /// A history load resolved after a newer one had started
    RequestSuperseded,
}

impl CounterMetric {
    /// Exported metric name
    pub fn name(self) -> &'static str {
        match self {
            CounterMetric::SeriesGenerated => "pricewatch_series_generated_total",
            CounterMetric::RequestSuperseded => "pricewatch_requests_superseded_total",
        }
    }
}

/// Increment a counter by one
pub fn increment(metric: CounterMetric) {
    ::metrics::counter!(metric.name()).increment(1);
    tracing::trace!(metric = metric.name(), "Incremented counter");
}
