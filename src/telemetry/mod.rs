//! Telemetry module
//!
//! Logging and counters

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{increment, CounterMetric};

use crate::config::TelemetryConfig;

/// Guard that cleans up telemetry on drop
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, LogFormat::from_json_flag(config.json))?;

    Ok(TelemetryGuard { _priv: () })
}
