//! Tracked keyword and store lists

use serde::Serialize;

use crate::error::WatchlistError;

/// Most keywords a user may track at once
pub const MAX_KEYWORDS: usize = 5;

/// Case-insensitive comparison key for a tracked entry
fn fold(entry: &str) -> String {
    entry.trim().to_lowercase()
}

/// Ordered set of tracked names, unique ignoring case, with an optional cap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrackedList {
    entries: Vec<String>,
    #[serde(skip)]
    limit: Option<usize>,
}

impl TrackedList {
    /// Unbounded list
    pub fn new() -> Self {
        Self::default()
    }

    /// List that refuses entries past `limit`
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Keyword list capped at [`MAX_KEYWORDS`]
    pub fn keywords() -> Self {
        Self::with_limit(MAX_KEYWORDS)
    }

    /// Build a list from `entries`, failing on the first rejected one
    pub fn from_entries<I, S>(mut self, entries: I) -> Result<Self, WatchlistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            self.add(entry.as_ref())?;
        }
        Ok(self)
    }

    /// Track `entry` (trimmed)
    pub fn add(&mut self, entry: &str) -> Result<(), WatchlistError> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(WatchlistError::Blank);
        }
        if self.contains(entry) {
            return Err(WatchlistError::Duplicate(entry.to_string()));
        }
        if let Some(limit) = self.limit {
            if self.entries.len() >= limit {
                return Err(WatchlistError::KeywordLimit(limit));
            }
        }

        self.entries.push(entry.to_string());
        Ok(())
    }

    /// Stop tracking `entry`; returns whether it was tracked
    pub fn remove(&mut self, entry: &str) -> bool {
        let key = fold(entry);
        let before = self.entries.len();
        self.entries.retain(|e| fold(e) != key);
        self.entries.len() != before
    }

    /// Whether `entry` is tracked, ignoring case
    pub fn contains(&self, entry: &str) -> bool {
        let key = fold(entry);
        self.entries.iter().any(|e| fold(e) == key)
    }

    /// Whether another entry would be accepted
    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.entries.len() >= limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Stores in `directory` whose name contains `query`, ignoring case
///
/// A blank query matches nothing.
pub fn search_stores<'a>(directory: &'a [String], query: &str) -> Vec<&'a str> {
    let query = fold(query);
    if query.is_empty() {
        return Vec::new();
    }

    directory
        .iter()
        .filter(|store| store.to_lowercase().contains(&query))
        .map(String::as_str)
        .collect()
}
