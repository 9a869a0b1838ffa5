//! Dashboard price alerts
//!
//! One alert per tracked product, comparing the oldest and current price of
//! its trailing history.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::CatalogEntry;
use crate::stats::SummaryStatistics;

/// Platform filter value matching every alert
pub const ALL_PLATFORMS: &str = "all";

/// A price movement worth showing on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceAlert {
    pub product_id: String,
    pub product_name: String,
    pub platform: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub old_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub new_price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub percent_change: Option<Decimal>,
    /// Day the new price was observed
    pub date: NaiveDate,
}

impl PriceAlert {
    /// Alert for a catalog product from its history summary
    pub fn from_summary(entry: &CatalogEntry, summary: &SummaryStatistics, date: NaiveDate) -> Self {
        Self {
            product_id: entry.product_id(),
            product_name: entry.name.clone(),
            platform: entry.platform.clone(),
            old_price: summary.oldest,
            new_price: summary.current,
            percent_change: summary.percent_change,
            date,
        }
    }

    /// Whether the price went down
    pub fn is_drop(&self) -> bool {
        self.percent_change.is_some_and(|p| p < Decimal::ZERO)
    }

    /// Whether the price went up
    pub fn is_rise(&self) -> bool {
        self.percent_change.is_some_and(|p| p > Decimal::ZERO)
    }
}

/// Alerts on `platform` (case-insensitive), or all of them for `"all"`
pub fn filter_by_platform<'a>(alerts: &'a [PriceAlert], platform: &str) -> Vec<&'a PriceAlert> {
    let wanted = platform.to_lowercase();
    alerts
        .iter()
        .filter(|a| wanted == ALL_PLATFORMS || a.platform.to_lowercase() == wanted)
        .collect()
}

/// Up to `limit` drops, steepest first
pub fn biggest_drops<'a>(
    alerts: impl IntoIterator<Item = &'a PriceAlert>,
    limit: usize,
) -> Vec<&'a PriceAlert> {
    let mut drops: Vec<&PriceAlert> = alerts.into_iter().filter(|a| a.is_drop()).collect();
    drops.sort_by(|a, b| compare_change(a, b));
    drops.truncate(limit);
    drops
}

/// Up to `limit` rises, steepest first
pub fn biggest_rises<'a>(
    alerts: impl IntoIterator<Item = &'a PriceAlert>,
    limit: usize,
) -> Vec<&'a PriceAlert> {
    let mut rises: Vec<&PriceAlert> = alerts.into_iter().filter(|a| a.is_rise()).collect();
    rises.sort_by(|a, b| compare_change(b, a));
    rises.truncate(limit);
    rises
}

fn compare_change(a: &PriceAlert, b: &PriceAlert) -> Ordering {
    a.percent_change.cmp(&b.percent_change)
}
