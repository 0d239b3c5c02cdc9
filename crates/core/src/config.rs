//! Configuration: persisted key names and their env var overrides.

use crate::constants::{ACTIVE_LIST_KEY, ACTIVE_LIST_KEY_ENV, HISTORY_KEY, HISTORY_KEY_ENV};

/// Key names under which the two lists are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    pub active: String,
    pub history: String,
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self { active: ACTIVE_LIST_KEY.to_owned(), history: HISTORY_KEY.to_owned() }
    }
}

impl StoreKeys {
    /// Keys namespaced by `prefix`, for several watchlists sharing one store.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            active: format!("{prefix}{ACTIVE_LIST_KEY}"),
            history: format!("{prefix}{HISTORY_KEY}"),
        }
    }

    /// Default keys, each overridable by its env var. Blank values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Default keys, overridden by whatever `lookup` returns for each env var name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            active: key_or_default(ACTIVE_LIST_KEY_ENV, lookup(ACTIVE_LIST_KEY_ENV), defaults.active),
            history: key_or_default(HISTORY_KEY_ENV, lookup(HISTORY_KEY_ENV), defaults.history),
        }
    }
}

fn key_or_default(var: &str, value: Option<String>, default: String) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        Some(_) => {
            tracing::warn!(var, default = %default, "blank env var value, using default");
            default
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys_match_page_layout() {
        let keys = StoreKeys::default();
        assert_eq!(keys.active, "movie_list_items");
        assert_eq!(keys.history, "movie_history_items");
    }

    #[test]
    fn test_prefixed_keys() {
        let keys = StoreKeys::with_prefix("alice:");
        assert_eq!(keys.active, "alice:movie_list_items");
        assert_eq!(keys.history, "alice:movie_history_items");
    }

    #[test]
    fn test_lookup_overrides_both_keys() {
        let keys = StoreKeys::from_lookup(|var| match var {
            "WATCHLIST_ACTIVE_KEY" => Some("mine_active".to_owned()),
            "WATCHLIST_HISTORY_KEY" => Some("mine_history".to_owned()),
            _ => None,
        });
        assert_eq!(keys.active, "mine_active");
        assert_eq!(keys.history, "mine_history");
    }

    #[test]
    fn test_lookup_blank_values_fall_back() {
        let keys = StoreKeys::from_lookup(|_| Some("   ".to_owned()));
        assert_eq!(keys, StoreKeys::default());
    }

    #[test]
    fn test_from_env_reads_and_ignores_blank() {
        unsafe {
            std::env::set_var("WATCHLIST_ACTIVE_KEY", "env_active");
            std::env::set_var("WATCHLIST_HISTORY_KEY", "env_history");
        }
        let keys = StoreKeys::from_env();
        assert_eq!(keys.active, "env_active");
        assert_eq!(keys.history, "env_history");

        unsafe {
            std::env::set_var("WATCHLIST_ACTIVE_KEY", "");
            std::env::set_var("WATCHLIST_HISTORY_KEY", " ");
        }
        assert_eq!(StoreKeys::from_env(), StoreKeys::default());

        unsafe {
            std::env::remove_var("WATCHLIST_ACTIVE_KEY");
            std::env::remove_var("WATCHLIST_HISTORY_KEY");
        }
        assert_eq!(StoreKeys::from_env(), StoreKeys::default());
    }
}
