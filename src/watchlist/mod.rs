//! Keyword and store watchlists
//!
//! Users track up to five search keywords plus any number of stores. A
//! catalog product is watched when its store is tracked or its name contains
//! a tracked keyword.

mod listing;
mod tracked;

pub use listing::{ProductListing, SortDirection, SortKey, SortState};
pub use tracked::{search_stores, TrackedList, MAX_KEYWORDS};

use serde::Serialize;

use crate::config::{CatalogEntry, WatchlistConfig};
use crate::error::WatchlistError;

/// A user's tracked keywords and stores
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Watchlist {
    pub keywords: TrackedList,
    pub stores: TrackedList,
}

impl Default for Watchlist {
    fn default() -> Self {
        Self {
            keywords: TrackedList::keywords(),
            stores: TrackedList::new(),
        }
    }
}

impl Watchlist {
    /// Build the watchlist configured under `[watchlist]`
    pub fn from_config(config: &WatchlistConfig) -> Result<Self, WatchlistError> {
        Ok(Self {
            keywords: TrackedList::keywords().from_entries(&config.keywords)?,
            stores: TrackedList::new().from_entries(&config.stores)?,
        })
    }

    /// Whether a catalog product falls under a tracked store or keyword
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if self.stores.contains(&entry.store) {
            return true;
        }
        let name = entry.name.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| name.contains(&keyword.to_lowercase()))
    }

    /// Watched products of `catalog`, in catalog order
    pub fn watched<'a>(&self, catalog: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        catalog.iter().filter(|entry| self.matches(entry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_default_config_watchlist() {
        let config = Config::default();
        let watchlist = Watchlist::from_config(&config.watchlist).unwrap();

        assert_eq!(watchlist.keywords.len(), 5);
        assert!(watchlist.keywords.is_full());
        assert!(watchlist.stores.contains("fellas"));
    }

    #[test]
    fn test_matches_store_or_keyword() {
        let config = Config::default();
        let mut watchlist = Watchlist::default();
        watchlist.stores.add("Züber").unwrap();
        watchlist.keywords.add("PROTEIN TOZU").unwrap();

        let names: Vec<&str> = watchlist
            .watched(&config.catalog)
            .iter()
            .map(|e| e.name.as_str())
            .collect();

        assert_eq!(names, vec!["Züber Granola", "Waspco Protein Tozu"]);
    }

    #[test]
    fn test_empty_watchlist_watches_nothing() {
        let config = Config::default();
        assert!(Watchlist::default().watched(&config.catalog).is_empty());
    }

    #[test]
    fn test_too_many_configured_keywords() {
        let config = WatchlistConfig {
            keywords: (1..=6).map(|i| format!("keyword {i}")).collect(),
            ..WatchlistConfig::default()
        };

        assert_eq!(
            Watchlist::from_config(&config),
            Err(WatchlistError::KeywordLimit(MAX_KEYWORDS))
        );
    }
}
