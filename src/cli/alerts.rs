//! Alerts command implementation

use chrono::NaiveDate;
use clap::Args;

use super::{synthetic_source, OutputFormat};
use crate::config::Config;
use crate::history::HistoryGenerator;
use crate::source::{HistoryRequest, HistorySource};
use crate::stats::summarize;
use crate::view::{filter_by_platform, render_alerts, PriceAlert, ALL_PLATFORMS};

#[derive(Args, Debug)]
pub struct AlertsArgs {
    /// Platform to show, or "all"
    #[arg(long, default_value = ALL_PLATFORMS)]
    pub platform: String,

    /// Seed for reproducible histories
    #[arg(long)]
    pub seed: Option<u64>,

    /// Last day of every history (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Number of entries in the biggest drops/rises lists
    #[arg(long, default_value = "3")]
    pub top: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl AlertsArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let alerts = build_alerts(config, self.seed, self.today).await?;
        let shown = filter_by_platform(&alerts, &self.platform);

        tracing::info!(
            platform = %self.platform,
            total = alerts.len(),
            shown = shown.len(),
            "Built price alerts"
        );

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown)?),
            OutputFormat::Table => print!("{}", render_alerts(&shown, &self.platform, self.top)),
        }

        Ok(())
    }
}

/// One alert per catalog product, each from a freshly generated history
pub async fn build_alerts(
    config: &Config,
    seed: Option<u64>,
    today: Option<NaiveDate>,
) -> anyhow::Result<Vec<PriceAlert>> {
    let generator = HistoryGenerator::new(config.history.clone());
    let source = synthetic_source(generator, seed, today);

    let mut alerts = Vec::with_capacity(config.catalog.len());
    for entry in &config.catalog {
        let request = HistoryRequest::with_default_window(entry.product_id(), entry.price);
        let series = source.fetch(request).await?;
        let summary = summarize(&series)?;
        let date = series.last().map(|p| p.date).unwrap_or(summary.lowest_price_date);
        alerts.push(PriceAlert::from_summary(entry, &summary, date));
    }

    Ok(alerts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_alerts_covers_catalog() {
        let config = Config::default();
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();

        let alerts = build_alerts(&config, Some(1), Some(today)).await.unwrap();

        assert_eq!(alerts.len(), config.catalog.len());
        assert!(alerts.iter().all(|a| a.date == today));
        assert!(alerts.iter().all(|a| a.new_price >= config.history.floor));
        assert_eq!(alerts[0].product_name, "Fellas Protein Bar");
        assert_eq!(filter_by_platform(&alerts, "trendyol").len(), 2);
    }

    #[tokio::test]
    async fn test_build_alerts_is_reproducible() {
        let config = Config::default();
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();

        let a = build_alerts(&config, Some(8), Some(today)).await.unwrap();
        let b = build_alerts(&config, Some(8), Some(today)).await.unwrap();

        assert_eq!(a, b);
    }
}
