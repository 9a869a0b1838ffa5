//! Day-over-day change table

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::summary::percent_of;
use crate::error::HistoryError;
use crate::history::PriceSeries;

/// One row of the change table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeltaRow {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// `price - previous price`, zero on the first row
    #[serde(with = "rust_decimal::serde::float")]
    pub change_from_previous: Decimal,
    /// Change relative to the previous price in percent, `None` when the
    /// previous price was zero
    #[serde(with = "rust_decimal::serde::float_option")]
    pub change_percent: Option<Decimal>,
}

/// Build one delta row per point, in series order
pub fn tabulate(series: &PriceSeries) -> Result<Vec<DeltaRow>, HistoryError> {
    let points = series.points();
    let first = points.first().ok_or(HistoryError::EmptySeries)?;

    let mut rows = Vec::with_capacity(points.len());
    rows.push(DeltaRow {
        date: first.date,
        price: first.price,
        change_from_previous: Decimal::ZERO,
        change_percent: Some(Decimal::ZERO),
    });

    for pair in points.windows(2) {
        let (previous, point) = (&pair[0], &pair[1]);
        let change = point.price - previous.price;
        rows.push(DeltaRow {
            date: point.date,
            price: point.price,
            change_from_previous: change,
            change_percent: percent_of(change, previous.price)?,
        });
    }

    Ok(rows)
}
