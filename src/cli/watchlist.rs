//! Watchlist command implementation

use chrono::NaiveDate;
use clap::Args;

use super::{synthetic_source, OutputFormat};
use crate::config::Config;
use crate::history::HistoryGenerator;
use crate::source::{HistoryRequest, HistorySource};
use crate::stats::summarize;
use crate::view::{render_store_search, render_watchlist, ALL_PLATFORMS};
use crate::watchlist::{search_stores, ProductListing, SortDirection, SortKey, SortState, Watchlist};

#[derive(Args, Debug)]
pub struct WatchlistArgs {
    /// Platform to list, or "all"
    #[arg(long, default_value = ALL_PLATFORMS)]
    pub platform: String,

    /// Track an extra keyword for this run
    #[arg(long = "add-keyword")]
    pub add_keywords: Vec<String>,

    /// Stop tracking a keyword for this run
    #[arg(long = "remove-keyword")]
    pub remove_keywords: Vec<String>,

    /// Track an extra store for this run
    #[arg(long = "add-store")]
    pub add_stores: Vec<String>,

    /// Stop tracking a store for this run
    #[arg(long = "remove-store")]
    pub remove_stores: Vec<String>,

    /// Search the store directory by name
    #[arg(long)]
    pub search: Option<String>,

    /// Column to sort the product listing by
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub descending: bool,

    /// Seed for reproducible prices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Last day of every history (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl WatchlistArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let watchlist = self.edited_watchlist(config)?;
        let sort = self.sort_state();

        let mut listings =
            build_listings(config, &watchlist, &self.platform, self.seed, self.today).await?;
        sort.apply(&mut listings);

        tracing::info!(
            keywords = watchlist.keywords.len(),
            stores = watchlist.stores.len(),
            listed = listings.len(),
            "Built watchlist"
        );

        let search = self
            .search
            .as_deref()
            .map(|query| (query, search_stores(&config.watchlist.store_directory, query)));

        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "watchlist": watchlist,
                    "sort": sort,
                    "listings": listings,
                    "search": search.as_ref().map(|(_, results)| results),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                if let Some((query, results)) = &search {
                    println!("{}", render_store_search(query, results, &watchlist));
                }
                print!("{}", render_watchlist(&watchlist, &listings, &sort));
            }
        }

        Ok(())
    }

    /// Configured watchlist with this run's additions and removals
    fn edited_watchlist(&self, config: &Config) -> anyhow::Result<Watchlist> {
        let mut watchlist = Watchlist::from_config(&config.watchlist)?;

        for keyword in &self.remove_keywords {
            if !watchlist.keywords.remove(keyword) {
                tracing::warn!(keyword = %keyword, "Keyword was not tracked");
            }
        }
        for store in &self.remove_stores {
            if !watchlist.stores.remove(store) {
                tracing::warn!(store = %store, "Store was not tracked");
            }
        }
        for keyword in &self.add_keywords {
            watchlist.keywords.add(keyword)?;
        }
        for store in &self.add_stores {
            watchlist.stores.add(store)?;
        }

        Ok(watchlist)
    }

    fn sort_state(&self) -> SortState {
        match self.sort {
            Some(key) if self.descending => SortState::by(key, SortDirection::Descending),
            Some(key) => SortState::by(key, SortDirection::Ascending),
            None => SortState::default(),
        }
    }
}

/// Listings for every watched catalog product on `platform` (or all)
pub async fn build_listings(
    config: &Config,
    watchlist: &Watchlist,
    platform: &str,
    seed: Option<u64>,
    today: Option<NaiveDate>,
) -> anyhow::Result<Vec<ProductListing>> {
    let generator = HistoryGenerator::new(config.history.clone());
    let source = synthetic_source(generator, seed, today);
    let wanted = platform.to_lowercase();

    let mut listings = Vec::new();
    for entry in watchlist.watched(&config.catalog) {
        if wanted != ALL_PLATFORMS && entry.platform.to_lowercase() != wanted {
            continue;
        }
        let request = HistoryRequest::with_default_window(entry.product_id(), entry.price);
        let series = source.fetch(request).await?;
        let summary = summarize(&series)?;
        listings.push(ProductListing::from_summary(entry, &summary));
    }

    Ok(listings)
}
