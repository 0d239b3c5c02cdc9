#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod v1;

use rusqlite::Connection;

use crate::error::StorageError;

pub(crate) const SCHEMA_VERSION: i32 = 1;

pub(crate) fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;

    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if current_version > SCHEMA_VERSION {
        return Err(StorageError::Migration(format!(
            "database schema v{current_version} is newer than supported v{SCHEMA_VERSION}"
        )));
    }

    tracing::debug!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: kv table");
        conn.execute_batch(v1::SQL)
            .map_err(|e| StorageError::Migration(format!("v1: {e}")))?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
}
