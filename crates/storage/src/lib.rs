//! Storage layer for the movie watchlist
//!
//! A string key-value interface with two backends: an in-process map and a
//! pooled `SQLite` file. The watchlist only ever calls `get` and `set`.

mod backend;
mod error;
mod memory;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "sqlite")]
mod sqlite;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::{DEFAULT_POOL_SIZE, POOL_SIZE_ENV, SqliteStore, db_pool_size};
pub use traits::KeyValueStore;
