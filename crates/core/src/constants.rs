//! Shared constants for the movie watchlist.

/// Persisted key holding the active watchlist (JSON array of strings).
pub const ACTIVE_LIST_KEY: &str = "movie_list_items";

/// Persisted key holding the watch history (JSON array of `{name, watches}`).
pub const HISTORY_KEY: &str = "movie_history_items";

/// Env var overriding [`ACTIVE_LIST_KEY`].
pub const ACTIVE_LIST_KEY_ENV: &str = "WATCHLIST_ACTIVE_KEY";

/// Env var overriding [`HISTORY_KEY`].
pub const HISTORY_KEY_ENV: &str = "WATCHLIST_HISTORY_KEY";

