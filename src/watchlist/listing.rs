//! Product listings with user-selected sorting
//!
//! Picking the same column twice flips the direction; picking a new column
//! starts ascending again.

use std::cmp::Ordering;

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::CatalogEntry;
use crate::stats::SummaryStatistics;

/// A tracked product as shown in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListing {
    pub product_id: String,
    pub name: String,
    pub platform: String,
    pub store: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Previous price, present only when the product is discounted
    #[serde(with = "rust_decimal::serde::float_option")]
    pub old_price: Option<Decimal>,
}

impl ProductListing {
    /// Listing for a catalog product priced at the end of its history
    ///
    /// The oldest price in the window becomes the struck-through price when
    /// the product got cheaper.
    pub fn from_summary(entry: &CatalogEntry, summary: &SummaryStatistics) -> Self {
        Self {
            product_id: entry.product_id(),
            name: entry.name.clone(),
            platform: entry.platform.clone(),
            store: entry.store.clone(),
            price: summary.current,
            old_price: (summary.oldest > summary.current).then_some(summary.oldest),
        }
    }

    /// Discount relative to `old_price` in percent, zero without one
    pub fn percent_change(&self) -> Decimal {
        match self.old_price {
            Some(old) if !old.is_zero() => (self.price - old)
                .checked_div(old)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }

    pub fn is_discounted(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }
}

/// Column a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Platform,
    Store,
    Price,
    #[value(name = "change")]
    PercentChange,
}

impl SortKey {
    /// Column name as typed on the command line
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Platform => "platform",
            SortKey::Store => "store",
            SortKey::Price => "price",
            SortKey::PercentChange => "change",
        }
    }

    fn compare(self, a: &ProductListing, b: &ProductListing) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Platform => a.platform.cmp(&b.platform),
            SortKey::Store => a.store.cmp(&b.store),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::PercentChange => a.percent_change().cmp(&b.percent_change()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Current sort selection; no key keeps the original order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Sort by `key` in `direction`
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Select a column: the active ascending column flips to descending,
    /// anything else sorts ascending
    pub fn request(&mut self, key: SortKey) {
        self.direction = match (self.key, self.direction) {
            (Some(current), SortDirection::Ascending) if current == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.key = Some(key);
    }

    /// Sort listings in place; ties keep their relative order
    pub fn apply(&self, listings: &mut [ProductListing]) {
        let Some(key) = self.key else {
            return;
        };

        listings.sort_by(|a, b| {
            let ordering = key.compare(a, b);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}
