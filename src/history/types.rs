//! Price history types
//!
//! A series is a chronological run of daily points, oldest first, with no
//! gaps assumed by consumers and no duplicate dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;

/// One day of price history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Price on that day, never negative
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl PricePoint {
    /// Create a new price point
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }
}

/// Ordered daily price history, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from hand-assembled points
    ///
    /// Dates must strictly increase and prices must be non-negative. An empty
    /// vector is accepted; the reducer rejects it when asked for statistics.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self, HistoryError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(HistoryError::UnorderedDates {
                    previous: pair[0].date,
                    next: pair[1].date,
                });
            }
        }

        if let Some(point) = points.iter().find(|p| p.price < Decimal::ZERO) {
            return Err(HistoryError::NegativePrice {
                date: point.date,
                price: point.price,
            });
        }

        Ok(Self { points })
    }

    /// Points were produced by the generator and already satisfy the invariants
    pub(crate) fn from_generated(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    /// All points, oldest first
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest point
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Most recent point
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Iterate over prices in chronological order
    pub fn prices(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.points.iter().map(|p| p.price)
    }

    /// Consume the series, returning its points
    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }
}

impl<'de> Deserialize<'de> for PriceSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<PricePoint>::deserialize(deserializer)?;
        PriceSeries::from_points(points).map_err(serde::de::Error::custom)
    }
}
