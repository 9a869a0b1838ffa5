//! Error types for history generation and reduction

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the history generator and statistics reducer
///
/// Every variant is an invalid-input condition: nothing in this crate performs
/// I/O, so a failure is always deterministic given its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Base price was zero or negative
    #[error("Base price must be positive: {0}")]
    NonPositiveBasePrice(Decimal),
    /// Reducer was given a series with no points
    #[error("Price series is empty")]
    EmptySeries,
    /// Hand-built series with dates out of order or duplicated
    #[error("Dates must strictly increase: {previous} then {next}")]
    UnorderedDates {
        previous: NaiveDate,
        next: NaiveDate,
    },
    /// Hand-built series with a negative price
    #[error("Negative price {price} on {date}")]
    NegativePrice { date: NaiveDate, price: Decimal },
    /// Trailing window starts before the earliest representable date
    #[error("Window of {0} days is out of calendar range")]
    WindowOutOfRange(u32),
    /// Decimal arithmetic overflowed while aggregating
    #[error("Decimal overflow while aggregating prices")]
    Overflow,
}

impl HistoryError {
    /// Whether the error signals rejected caller input
    pub fn is_invalid_input(&self) -> bool {
        match self {
            HistoryError::NonPositiveBasePrice(_)
            | HistoryError::EmptySeries
            | HistoryError::UnorderedDates { .. }
            | HistoryError::NegativePrice { .. }
            | HistoryError::WindowOutOfRange(_)
            | HistoryError::Overflow => true,
        }
    }
}

/// Errors raised while editing keyword and store watchlists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchlistError {
    /// Keyword or store name was blank
    #[error("Watchlist entries must not be blank")]
    Blank,
    /// Entry is already tracked
    #[error("{0:?} is already tracked")]
    Duplicate(String),
    /// Keyword list is full
    #[error("At most {0} keywords can be tracked")]
    KeywordLimit(usize),
}
