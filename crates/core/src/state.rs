//! In-memory watchlist state and its pure transitions.
//!
//! No I/O here. The service layer owns persistence and rendering and calls
//! into these transitions in the order the watchlist contract requires.

use std::collections::HashSet;

use serde::Serialize;

use crate::watch::{WatchEntry, is_blank_name, normalize_name};

/// Outcome of a single history bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedWatch {
    pub watches: u32,
    pub first_seen: bool,
}

/// The active watchlist plus the cumulative watch history.
///
/// Invariants held by every constructor and transition:
/// - active names are lowercase, non-blank and unique, in insertion order
/// - history has at most one entry per name, in first-seen order, `watches >= 1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchlistState {
    active_list: Vec<String>,
    history: Vec<WatchEntry>,
}

impl WatchlistState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build state from loaded data, repairing anything that breaks the invariants.
    ///
    /// Active names are re-normalized; blank names and later duplicates are dropped.
    /// History entries that collide after normalization are merged by summing watches.
    /// Data that already satisfies the invariants passes through unchanged.
    #[must_use]
    pub fn from_parts(active_list: Vec<String>, history: Vec<WatchEntry>) -> Self {
        Self { active_list: sanitize_active(active_list), history: sanitize_history(history) }
    }

    pub fn active_list(&self) -> &[String] {
        &self.active_list
    }

    pub fn history(&self) -> &[WatchEntry] {
        &self.history
    }

    /// Exact match against the active list. `name` must already be normalized.
    pub fn contains(&self, name: &str) -> bool {
        self.active_list.iter().any(|item| item == name)
    }

    /// Watch count for a title, normalizing `name` first.
    pub fn watches(&self, name: &str) -> Option<u32> {
        let name = normalize_name(name);
        self.history.iter().find(|entry| entry.name == name).map(|entry| entry.watches)
    }

    /// Append a normalized name to the active list.
    ///
    /// Returns `false` and leaves the list untouched if the name is already present.
    pub fn push_active(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.active_list.push(name.to_owned());
        true
    }

    /// Count one more watch of `name`, appending a fresh entry on first sighting.
    pub fn record_watch(&mut self, name: &str) -> RecordedWatch {
        if let Some(entry) = self.history.iter_mut().find(|entry| entry.name == name) {
            entry.bump();
            return RecordedWatch { watches: entry.watches, first_seen: false };
        }
        self.history.push(WatchEntry::first_watch(name));
        RecordedWatch { watches: 1, first_seen: true }
    }

    /// Drop every active title. History is never touched.
    pub fn clear_active(&mut self) {
        self.active_list.clear();
    }

    /// Active titles containing `query` as a case-sensitive substring.
    ///
    /// An empty query matches everything. The query is not normalized, so an
    /// uppercase query never matches the lowercase stored names.
    #[must_use]
    pub fn filtered(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return self.active_list.clone();
        }
        self.active_list.iter().filter(|item| item.contains(query)).cloned().collect()
    }
}

fn sanitize_active(raw: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(raw.len());
    raw.into_iter()
        .map(|item| normalize_name(&item))
        .filter(|item| !is_blank_name(item))
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn sanitize_history(raw: Vec<WatchEntry>) -> Vec<WatchEntry> {
    let mut merged: Vec<WatchEntry> = Vec::with_capacity(raw.len());
    for entry in raw {
        let name = normalize_name(&entry.name);
        if is_blank_name(&name) {
            continue;
        }
        let watches = entry.watches.max(1);
        match merged.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => existing.watches = existing.watches.saturating_add(watches),
            None => merged.push(WatchEntry { name, watches }),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, watches: u32) -> WatchEntry {
        WatchEntry { name: name.to_owned(), watches }
    }

    #[test]
    fn test_record_watch_appends_then_increments() {
        let mut state = WatchlistState::new();
        assert_eq!(state.record_watch("dune"), RecordedWatch { watches: 1, first_seen: true });
        assert_eq!(state.record_watch("alien"), RecordedWatch { watches: 1, first_seen: true });
        assert_eq!(state.record_watch("dune"), RecordedWatch { watches: 2, first_seen: false });
        assert_eq!(state.history(), &[entry("dune", 2), entry("alien", 1)]);
    }

    #[test]
    fn test_push_active_rejects_duplicate() {
        let mut state = WatchlistState::new();
        assert!(state.push_active("dune"));
        assert!(!state.push_active("dune"));
        assert_eq!(state.active_list(), &["dune".to_owned()]);
    }

    #[test]
    fn test_filtered_is_case_sensitive_substring() {
        let state = WatchlistState::from_parts(
            vec!["dune".to_owned(), "dune part two".to_owned(), "alien".to_owned()],
            Vec::new(),
        );
        assert_eq!(state.filtered("du"), vec!["dune".to_owned(), "dune part two".to_owned()]);
        assert_eq!(state.filtered("two"), vec!["dune part two".to_owned()]);
        assert!(state.filtered("DU").is_empty());
        assert_eq!(state.filtered(""), state.active_list().to_vec());
    }

    #[test]
    fn test_clear_active_keeps_history() {
        let mut state = WatchlistState::new();
        state.push_active("dune");
        state.record_watch("dune");
        state.clear_active();
        assert!(state.active_list().is_empty());
        assert_eq!(state.watches("Dune"), Some(1));
    }

    #[test]
    fn test_from_parts_repairs_active_list() {
        let state = WatchlistState::from_parts(
            vec!["Dune".to_owned(), "".to_owned(), "dune".to_owned(), "  ".to_owned(), "Alien".to_owned()],
            Vec::new(),
        );
        assert_eq!(state.active_list(), &["dune".to_owned(), "alien".to_owned()]);
    }

    #[test]
    fn test_from_parts_merges_history() {
        let state = WatchlistState::from_parts(
            Vec::new(),
            vec![entry("Dune", 2), entry("alien", 0), entry("dune", 3), entry(" ", 4)],
        );
        assert_eq!(state.history(), &[entry("dune", 5), entry("alien", 1)]);
    }

    #[test]
    fn test_from_parts_is_identity_on_clean_data() {
        let active = vec!["dune".to_owned(), "alien".to_owned()];
        let history = vec![entry("dune", 2), entry("alien", 1), entry("heat", 4)];
        let state = WatchlistState::from_parts(active.clone(), history.clone());
        assert_eq!(state.active_list(), active.as_slice());
        assert_eq!(state.history(), history.as_slice());
    }
}
