//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use crate::error::StorageError;
use crate::memory::MemoryStore;
use crate::traits::KeyValueStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <MemoryStore as KeyValueStore>::$method(s, $($arg),*),
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::SqliteStore as KeyValueStore>::$method(s, $($arg),*),
        }
    };
}

#[derive(Debug)]
pub enum StorageBackend {
    Memory(MemoryStore),
    #[cfg(feature = "sqlite")]
    Sqlite(crate::SqliteStore),
}

impl StorageBackend {
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::SqliteStore::with_pool_size(db_path, pool_size)?))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl KeyValueStore for StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        dispatch!(self, get(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        dispatch!(self, set(key, value))
    }
}
