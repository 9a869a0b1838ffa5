//! Integration tests for the statistics reducer

use chrono::NaiveDate;
use pricewatch::{summarize, tabulate, HistoryError, HistoryGenerator, PricePoint, PriceSeries};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
}

fn generated(seed: u64) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    HistoryGenerator::with_defaults()
        .generate(dec!(100), 30, today(), &mut rng)
        .unwrap()
}

#[test]
fn test_min_max_bound_every_point() {
    for seed in 0..50 {
        let series = generated(seed);
        let stats = summarize(&series).unwrap();

        assert!(series.prices().all(|p| stats.min <= p && p <= stats.max));
        assert!(stats.min <= stats.average && stats.average <= stats.max);
    }
}

#[test]
fn test_lowest_date_is_first_minimum() {
    let d0 = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let d1 = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let d2 = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
    let series = PriceSeries::from_points(vec![
        PricePoint::new(d0, dec!(20)),
        PricePoint::new(d1, dec!(20)),
        PricePoint::new(d2, dec!(30)),
    ])
    .unwrap();

    assert_eq!(summarize(&series).unwrap().lowest_price_date, d0);
}

#[test]
fn test_delta_rows_follow_series() {
    let series = generated(17);
    let rows = tabulate(&series).unwrap();
    let points = series.points();

    assert_eq!(rows.len(), points.len());
    assert_eq!(rows[0].change_from_previous, Decimal::ZERO);
    assert_eq!(rows[0].change_percent, Some(Decimal::ZERO));
    for i in 1..rows.len() {
        assert_eq!(rows[i].date, points[i].date);
        assert_eq!(rows[i].change_from_previous, points[i].price - points[i - 1].price);
    }
}

#[test]
fn test_reducer_is_idempotent() {
    let series = generated(23);

    assert_eq!(summarize(&series).unwrap(), summarize(&series).unwrap());
    assert_eq!(tabulate(&series).unwrap(), tabulate(&series).unwrap());
}

#[test]
fn test_outputs_independent_of_input() {
    let series = generated(29);
    let rows = tabulate(&series).unwrap();
    let stats = summarize(&series).unwrap();
    let expected_last = series.last().unwrap().price;

    drop(series);

    assert_eq!(rows.last().unwrap().price, expected_last);
    assert_eq!(stats.current, expected_last);
}

#[test]
fn test_single_point_summary() {
    let series = PriceSeries::from_points(vec![PricePoint::new(today(), dec!(64))]).unwrap();
    let stats = summarize(&series).unwrap();

    assert_eq!(stats.min, dec!(64));
    assert_eq!(stats.max, dec!(64));
    assert_eq!(stats.average, dec!(64));
    assert_eq!(stats.current, dec!(64));
    assert_eq!(stats.oldest, dec!(64));
    assert_eq!(stats.percent_change, Some(Decimal::ZERO));
}

#[test]
fn test_empty_series_is_invalid_input() {
    let empty = PriceSeries::from_points(Vec::new()).unwrap();

    let summary_err = summarize(&empty).unwrap_err();
    let table_err = tabulate(&empty).unwrap_err();

    assert_eq!(summary_err, HistoryError::EmptySeries);
    assert_eq!(table_err, HistoryError::EmptySeries);
    assert!(summary_err.is_invalid_input());
}

#[test]
fn test_generate_then_summarize_scenario() {
    let series = generated(31);
    let stats = summarize(&series).unwrap();

    assert_eq!(series.len(), 31);

    let current = series.last().unwrap().price;
    let oldest = series.first().unwrap().price;
    assert_eq!(stats.current, current);
    assert_eq!(stats.oldest, oldest);
    assert_eq!(stats.absolute_change, current - oldest);
    assert_eq!(
        stats.percent_change,
        Some((current - oldest) / oldest * dec!(100))
    );
}
