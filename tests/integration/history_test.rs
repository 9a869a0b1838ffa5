//! Integration tests for the history generator

use chrono::NaiveDate;
use pricewatch::{HistoryError, HistoryGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()
}

#[test]
fn test_structure_holds_across_inputs() {
    let generator = HistoryGenerator::with_defaults();
    let bases = [dec!(0.01), dec!(20), dec!(49.99), dec!(100), dec!(10000)];
    let windows = [0_u32, 1, 4, 5, 30, 90];

    for (seed, (base, window)) in bases
        .iter()
        .flat_map(|b| windows.iter().map(move |w| (*b, *w)))
        .enumerate()
    {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let series = generator.generate(base, window, today(), &mut rng).unwrap();

        assert_eq!(series.len(), window as usize + 1);
        assert_eq!(series.last().unwrap().date, today());
        assert!(series.prices().all(|p| p >= dec!(20)));
        for pair in series.points().windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
    }
}

#[test]
fn test_window_crosses_year_boundary() {
    let generator = HistoryGenerator::with_defaults();
    let mut rng = StdRng::seed_from_u64(2);

    let series = generator.generate(dec!(100), 30, today(), &mut rng).unwrap();

    assert_eq!(
        series.first().unwrap().date,
        NaiveDate::from_ymd_opt(2025, 12, 4).unwrap()
    );
}

#[test]
fn test_walk_moves_both_ways() {
    let generator = HistoryGenerator::with_defaults();
    let mut ups = 0;
    let mut downs = 0;

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let series = generator.generate(dec!(1000), 30, today(), &mut rng).unwrap();
        for pair in series.points().windows(2) {
            match (pair[1].price - pair[0].price).cmp(&Decimal::ZERO) {
                std::cmp::Ordering::Greater => ups += 1,
                std::cmp::Ordering::Less => downs += 1,
                std::cmp::Ordering::Equal => {}
            }
        }
    }

    assert!(ups > 50, "expected upward moves, got {ups}");
    assert!(downs > 50, "expected downward moves, got {downs}");
}

#[test]
fn test_invalid_base_price_signalled() {
    let generator = HistoryGenerator::with_defaults();
    let mut rng = StdRng::seed_from_u64(0);

    let err = generator.generate(dec!(-0.01), 30, today(), &mut rng).unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(err, HistoryError::NonPositiveBasePrice(dec!(-0.01)));
}

#[test]
fn test_generate_from_today_ends_today() {
    let generator = HistoryGenerator::with_defaults();
    let mut rng = StdRng::seed_from_u64(0);

    let before = chrono::Local::now().date_naive();
    let series = generator.generate_from_today(dec!(80), 30, &mut rng).unwrap();
    let after = chrono::Local::now().date_naive();

    let last = series.last().unwrap().date;
    assert!(last == before || last == after);
}
