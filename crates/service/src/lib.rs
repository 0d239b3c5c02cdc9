//! Service layer for the movie watchlist
//!
//! Owns the in-memory watchlist, keeps it in step with the key-value store,
//! and tells the host what to draw after every change.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod render;
mod watchlist_store;

pub use render::{CallbackRenderer, LatestView, NoopRenderer, WatchlistRenderer};
pub use watchlist_core::{StoreKeys, ValidationError, WatchEntry, WatchlistState};
pub use watchlist_store::WatchlistStore;
