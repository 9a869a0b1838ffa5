//! Synthetic price history generator
//!
//! Random walk over a trailing window of days. Every `volatility_interval`-th
//! offset from today gets a large perturbation, all other days a small one,
//! and the running price never drops below the floor.

use chrono::{Days, Local, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::types::{PricePoint, PriceSeries};
use crate::error::HistoryError;
use crate::telemetry::{self, CounterMetric};

/// Random walk parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryParams {
    /// Trailing window in days for requests that do not name one (series has
    /// one more point)
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Lowest price the walk may reach
    #[serde(default = "default_floor")]
    pub floor: Decimal,

    /// Offsets from today divisible by this are volatility days (0 disables)
    #[serde(default = "default_volatility_interval")]
    pub volatility_interval: u32,

    /// Exclusive upper bound of the whole-unit step on volatility days
    #[serde(default = "default_volatility_step")]
    pub volatility_step: u32,

    /// Exclusive upper bound of the whole-unit step on ordinary days
    #[serde(default = "default_daily_step")]
    pub daily_step: u32,
}

fn default_window_days() -> u32 {
    30
}
fn default_floor() -> Decimal {
    Decimal::from(20)
}
fn default_volatility_interval() -> u32 {
    5
}
fn default_volatility_step() -> u32 {
    15
}
fn default_daily_step() -> u32 {
    3
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            window_days: 30,
            floor: Decimal::from(20),
            volatility_interval: 5,
            volatility_step: 15,
            daily_step: 3,
        }
    }
}

impl HistoryParams {
    /// Whether the day `offset` days before today gets the large perturbation
    pub fn is_volatility_day(&self, offset: u32) -> bool {
        self.volatility_interval != 0 && offset % self.volatility_interval == 0
    }
}

/// Generates synthetic daily price histories
#[derive(Debug, Clone, Default)]
pub struct HistoryGenerator {
    params: HistoryParams,
}

impl HistoryGenerator {
    /// Create a generator with the given parameters
    pub fn new(params: HistoryParams) -> Self {
        Self { params }
    }

    /// Create a generator with default parameters
    pub fn with_defaults() -> Self {
        Self::new(HistoryParams::default())
    }

    /// Walk parameters
    pub fn params(&self) -> &HistoryParams {
        &self.params
    }

    /// Generate `window_days + 1` daily points ending at `today`
    ///
    /// Rejects a non-positive `base_price` rather than clamping it.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        base_price: Decimal,
        window_days: u32,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<PriceSeries, HistoryError> {
        if base_price <= Decimal::ZERO {
            return Err(HistoryError::NonPositiveBasePrice(base_price));
        }

        // Fail before doing any work if the window start is not a valid date
        today
            .checked_sub_days(Days::new(u64::from(window_days)))
            .ok_or(HistoryError::WindowOutOfRange(window_days))?;

        let mut points = Vec::with_capacity(window_days as usize + 1);
        let mut price = base_price;

        for offset in (0..=window_days).rev() {
            let max_step = if self.params.is_volatility_day(offset) {
                self.params.volatility_step
            } else {
                self.params.daily_step
            };

            price = price
                .checked_add(perturbation(rng, max_step))
                .ok_or(HistoryError::Overflow)?
                .max(self.params.floor);

            let date = today
                .checked_sub_days(Days::new(u64::from(offset)))
                .ok_or(HistoryError::WindowOutOfRange(window_days))?;

            points.push(PricePoint::new(date, price));
        }

        telemetry::increment(CounterMetric::SeriesGenerated);
        tracing::debug!(
            base_price = %base_price,
            window_days,
            last_price = %price,
            "Generated price history"
        );

        Ok(PriceSeries::from_generated(points))
    }

    /// Generate a history ending at today's local calendar date
    pub fn generate_from_today<R: Rng + ?Sized>(
        &self,
        base_price: Decimal,
        window_days: u32,
        rng: &mut R,
    ) -> Result<PriceSeries, HistoryError> {
        self.generate(base_price, window_days, Local::now().date_naive(), rng)
    }
}

/// Whole-unit step with magnitude uniform in `0..max_step` and a fair-coin sign
fn perturbation<R: Rng + ?Sized>(rng: &mut R, max_step: u32) -> Decimal {
    if max_step == 0 {
        return Decimal::ZERO;
    }

    let magnitude = Decimal::from(rng.gen_range(0..max_step));
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
