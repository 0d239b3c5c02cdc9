//! JSON load/save of the two persisted lists.
//!
//! Reads never fail: a missing key, a read error, `null` or malformed JSON
//! all load as an empty list. A transient write failure is retried once;
//! writes that still fail are logged and dropped; the
//! in-memory state stays authoritative and is written again on the next change.

use serde::Serialize;
use serde::de::DeserializeOwned;
use watchlist_storage::KeyValueStore;

pub(super) fn load_list<T, S>(storage: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "No persisted value, starting empty");
            return Vec::new();
        },
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted value, starting empty");
            return Vec::new();
        },
    };

    match serde_json::from_str::<Option<Vec<T>>>(&raw) {
        Ok(Some(items)) => items,
        Ok(None) => {
            tracing::debug!(key, "Persisted value is null, starting empty");
            Vec::new()
        },
        Err(e) => {
            tracing::warn!(key, error = %e, "Malformed persisted value, starting empty");
            Vec::new()
        },
    }
}

pub(super) fn save_list<T, S>(storage: &S, key: &str, items: &[T])
where
    T: Serialize,
    S: KeyValueStore,
{
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to serialize list, not persisted");
            return;
        },
    };
    let result = match storage.set(key, &json) {
        Err(e) if e.is_transient() => {
            tracing::debug!(key, error = %e, "Transient write failure, retrying once");
            storage.set(key, &json)
        },
        other => other,
    };
    if let Err(e) = result {
        tracing::warn!(key, error = %e, "Failed to persist list, keeping in-memory state");
    }
}
