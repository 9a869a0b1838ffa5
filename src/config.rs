//! Configuration types for pricewatch

use anyhow::Context;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::history::HistoryParams;
use crate::watchlist::Watchlist;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryParams,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub watchlist: WatchlistConfig,
    #[serde(default = "default_catalog")]
    pub catalog: Vec<CatalogEntry>,
}

/// Viewport breakpoints in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    /// Narrowest width classified as a tablet
    #[serde(default = "default_tablet_min_width")]
    pub tablet_min_width: u32,

    /// Narrowest width classified as a desktop
    #[serde(default = "default_desktop_min_width")]
    pub desktop_min_width: u32,
}

fn default_tablet_min_width() -> u32 {
    768
}
fn default_desktop_min_width() -> u32 {
    1024
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tablet_min_width: 768,
            desktop_min_width: 1024,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

/// Tracked keywords and stores, plus the stores a search can find
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchlistConfig {
    /// At most five search keywords
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    #[serde(default = "default_stores")]
    pub stores: Vec<String>,

    /// Stores known to the store search
    #[serde(default = "default_store_directory")]
    pub store_directory: Vec<String>,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_keywords() -> Vec<String> {
    to_strings(&[
        "protein bar",
        "yüksek protein bar",
        "granola",
        "sağlıklı atıştırmalıklar",
        "protein tozu",
    ])
}

fn default_stores() -> Vec<String> {
    to_strings(&["Fellas", "Züber", "Waspco"])
}

fn default_store_directory() -> Vec<String> {
    to_strings(&[
        "Fellas",
        "Züber",
        "Waspco",
        "Protein Outlet",
        "Granolife",
        "Fitness Market",
        "Protein Plus",
        "Sağlıklı Yaşam",
        "Sporcu Gıdaları",
    ])
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            stores: default_stores(),
            store_directory: default_store_directory(),
        }
    }
}

/// A product whose price is being tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Marketplace, e.g. "Trendyol"
    pub platform: String,
    pub store: String,
    /// Current listed price
    pub price: Decimal,
}

impl CatalogEntry {
    /// Stable identifier: `platform-store-name`, lowercased, spaces dashed
    pub fn product_id(&self) -> String {
        format!("{}-{}-{}", self.platform, self.store, self.name)
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

fn default_catalog() -> Vec<CatalogEntry> {
    let entry = |name: &str, platform: &str, store: &str, price: Decimal| CatalogEntry {
        name: name.to_string(),
        platform: platform.to_string(),
        store: store.to_string(),
        price,
    };

    vec![
        entry("Fellas Protein Bar", "Trendyol", "Fellas", dec!(129.99)),
        entry("Züber Granola", "Hepsiburada", "Züber", dec!(69.99)),
        entry("Waspco Protein Tozu", "N11", "Waspco", dec!(449.99)),
        entry(
            "Protein Outlet Atıştırmalık",
            "Trendyol",
            "Protein Outlet",
            dec!(49.99),
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history: HistoryParams::default(),
            layout: LayoutConfig::default(),
            telemetry: TelemetryConfig::default(),
            watchlist: WatchlistConfig::default(),
            catalog: default_catalog(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot describe a usable walk or layout
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.history.floor < Decimal::ZERO {
            anyhow::bail!("history.floor must not be negative: {}", self.history.floor);
        }
        if self.layout.tablet_min_width > self.layout.desktop_min_width {
            anyhow::bail!(
                "layout.tablet_min_width ({}) exceeds layout.desktop_min_width ({})",
                self.layout.tablet_min_width,
                self.layout.desktop_min_width
            );
        }
        if let Some(entry) = self.catalog.iter().find(|e| e.price <= Decimal::ZERO) {
            anyhow::bail!("catalog price for {:?} must be positive", entry.name);
        }
        Watchlist::from_config(&self.watchlist).context("invalid [watchlist]")?;
        Ok(())
    }
}
