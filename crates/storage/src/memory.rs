//! In-process key-value store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// `HashMap`-backed store. Contents live as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

fn lock_entries<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex.lock().map_err(|e: PoisonError<_>| StorageError::LockPoisoned(e.to_string()))
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: Mutex::new(entries) }
    }

    /// Number of keys written so far.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(lock_entries(&self.entries)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(lock_entries(&self.entries)?.is_empty())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(lock_entries(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        lock_entries(&self.entries)?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
