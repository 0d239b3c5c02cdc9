//! `SQLite` key-value store on an r2d2 connection pool.

use std::path::Path;

use chrono::Utc;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, OptionalExtension as _, params};

use crate::error::StorageError;
use crate::migrations;
use crate::traits::KeyValueStore;

/// Default number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 4;

pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Store backed by a single `kv` table in a `SQLite` file.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

/// Env var sizing the connection pool.
pub const POOL_SIZE_ENV: &str = "WATCHLIST_POOL_SIZE";

fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 5000;
         PRAGMA synchronous = NORMAL;",
    )
}

/// Pool size from `WATCHLIST_POOL_SIZE`, falling back to [`DEFAULT_POOL_SIZE`].
pub fn db_pool_size() -> u32 {
    parse_pool_size(std::env::var(POOL_SIZE_ENV).ok().as_deref())
}

pub(crate) fn parse_pool_size(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_POOL_SIZE;
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::warn!(
                var = POOL_SIZE_ENV,
                value = raw,
                default = DEFAULT_POOL_SIZE,
                "invalid pool size, using default"
            );
            DEFAULT_POOL_SIZE
        },
    }
}

impl SqliteStore {
    /// Open (or create) the database at `db_path` with the default pool size.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        Self::with_pool_size(db_path, DEFAULT_POOL_SIZE)
    }

    /// Open (or create) the database at `db_path`, creating parent directories.
    pub fn with_pool_size(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::debug!(path = %db_path.display(), pool_size, "SqliteStore initialized");

        Ok(Self { pool })
    }

    pub(crate) fn conn(&self) -> Result<PooledConn, StorageError> {
        Ok(self.pool.get()?)
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let keys = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    /// RFC 3339 timestamp of the last write to `key`.
    pub fn updated_at(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn()?;
        let ts = conn
            .query_row("SELECT updated_at FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(ts)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
