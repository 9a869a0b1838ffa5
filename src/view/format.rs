//! Presentation formatting for the fixed tr-TR locale
//!
//! The core hands over unrounded decimals and ISO dates; rounding to two
//! decimals and the TL suffix happen only here.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

const MONTHS_SHORT: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

const MONTHS_LONG: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Shown wherever a percentage is undefined
pub const UNDEFINED: &str = "—";

/// Direction of a price move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    /// Classify a signed change
    pub fn of(change: Decimal) -> Self {
        if change.is_zero() {
            Direction::Flat
        } else if change.is_sign_negative() {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Price drops are good news for a shopper
    pub fn is_favourable(self) -> bool {
        self == Direction::Down
    }

    /// Arrow glyph for terminal output
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Flat => " ",
        }
    }
}

/// Round half away from zero to two places, without a negative zero
fn two_places(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// `129.99 TL`
pub fn currency(value: Decimal) -> String {
    format!("{:.2} TL", two_places(value))
}

/// `+12.50%`, `-3.10%`, or the undefined marker
pub fn percent(value: Option<Decimal>) -> String {
    match value {
        Some(p) => {
            let p = two_places(p);
            let sign = if p.is_sign_negative() { "" } else { "+" };
            format!("{sign}{:.2}%", p)
        }
        None => UNDEFINED.to_string(),
    }
}

/// Change cell of the delta table: `+4.00 TL (10.00%)`, or `-` when unchanged
pub fn change(change: Decimal, change_percent: Option<Decimal>) -> String {
    if change.is_zero() {
        return "-".to_string();
    }

    let sign = if change.is_sign_negative() { "" } else { "+" };
    let pct = match change_percent {
        Some(p) => format!("{:.2}%", two_places(p)),
        None => UNDEFINED.to_string(),
    };
    format!("{sign}{} ({pct})", currency(change))
}

/// `14 May 2024`, or `14 May` without the year
pub fn date(date: NaiveDate, with_year: bool) -> String {
    let month = MONTHS_SHORT[date.month0() as usize];
    if with_year {
        format!("{} {} {}", date.day(), month, date.year())
    } else {
        format!("{} {}", date.day(), month)
    }
}

/// `14 Mayıs`
pub fn date_long(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_LONG[date.month0() as usize])
}

/// `05/14` axis tick
pub fn tick(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}
