//! Core types for the movie watchlist
//!
//! This crate contains the domain types shared across all other crates:
//! the watch history entry, the in-memory watchlist state and its pure
//! transitions, name validation, and the persisted key layout.

pub mod config;
pub mod constants;
mod error;
mod state;
mod watch;

pub use config::StoreKeys;
pub use error::*;
pub use state::{RecordedWatch, WatchlistState};
pub use watch::{WatchEntry, is_blank_name, normalize_name, validate_name};
