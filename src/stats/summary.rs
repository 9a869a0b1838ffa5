//! Summary statistics over a price series

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::HistoryError;
use crate::history::PriceSeries;

/// Read-only summary of a price series
///
/// Values are unrounded; presentation rounds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryStatistics {
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
    /// Arithmetic mean of all prices
    #[serde(with = "rust_decimal::serde::float")]
    pub average: Decimal,
    /// Price of the most recent point
    #[serde(with = "rust_decimal::serde::float")]
    pub current: Decimal,
    /// Price of the oldest point
    #[serde(with = "rust_decimal::serde::float")]
    pub oldest: Decimal,
    /// `current - oldest`
    #[serde(with = "rust_decimal::serde::float")]
    pub absolute_change: Decimal,
    /// `absolute_change / oldest * 100`, `None` when `oldest` is zero
    #[serde(with = "rust_decimal::serde::float_option")]
    pub percent_change: Option<Decimal>,
    /// Date of the earliest point priced at `min`
    pub lowest_price_date: NaiveDate,
}

impl SummaryStatistics {
    /// `max - min`
    pub fn range(&self) -> Decimal {
        self.max - self.min
    }

    /// Whether every price in the series was identical
    pub fn is_flat(&self) -> bool {
        self.range().is_zero()
    }
}

/// Derive summary statistics from a non-empty series
pub fn summarize(series: &PriceSeries) -> Result<SummaryStatistics, HistoryError> {
    let points = series.points();
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(HistoryError::EmptySeries),
    };

    let mut lowest = first;
    let mut max = first.price;
    let mut sum = Decimal::ZERO;

    for point in points {
        // Strict comparison keeps the earliest date on ties
        if point.price < lowest.price {
            lowest = point;
        }
        max = max.max(point.price);
        sum = sum.checked_add(point.price).ok_or(HistoryError::Overflow)?;
    }

    let average = sum
        .checked_div(Decimal::from(points.len()))
        .ok_or(HistoryError::Overflow)?;
    let absolute_change = last.price - first.price;

    Ok(SummaryStatistics {
        min: lowest.price,
        max,
        average,
        current: last.price,
        oldest: first.price,
        absolute_change,
        percent_change: percent_of(absolute_change, first.price)?,
        lowest_price_date: lowest.date,
    })
}

/// `change / base * 100`, `None` when `base` is zero
pub(crate) fn percent_of(change: Decimal, base: Decimal) -> Result<Option<Decimal>, HistoryError> {
    if base.is_zero() {
        return Ok(None);
    }
    change
        .checked_div(base)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(Some)
        .ok_or(HistoryError::Overflow)
}
