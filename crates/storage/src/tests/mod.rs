//! Test utilities and module declarations for storage tests.

#[cfg(feature = "sqlite")]
use crate::SqliteStore;
#[cfg(feature = "sqlite")]
use tempfile::TempDir;

#[cfg(feature = "sqlite")]
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (SqliteStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = SqliteStore::new(&db_path).unwrap();
    (storage, temp_dir)
}
