//! Durable key/value backend with per-key expiry, backed by SQLite.

use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::error::CacheError;

/// Storage seam for the memory store. Implementations hold string payloads
/// under opaque keys and drop them once the TTL elapses.
pub trait CacheBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn set(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError>;
}

/// SQLite-backed cache. rusqlite connections are not `Sync`, so all access
/// funnels through one mutex; memory traffic is light enough that this is
/// not a contention point.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    pub fn open(path: &str) -> Result<Self, CacheError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                 key        TEXT PRIMARY KEY,
                 value      TEXT NOT NULL,
                 expires_at INTEGER NOT NULL
             )",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, CacheError> {
        self.conn
            .lock()
            .map_err(|_| CacheError::Unavailable("cache connection lock poisoned".to_string()))
    }
}

impl CacheBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let conn = self.lock()?;
        let now = Utc::now().timestamp();
        // Lazy expiry: reads sweep anything past its deadline.
        conn.execute("DELETE FROM kv WHERE expires_at <= ?1", params![now])
            .map_err(|e| CacheError::Read(e.to_string()))?;

        match conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        ) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(CacheError::Read(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError> {
        let conn = self.lock()?;
        let expires_at = Utc::now().timestamp() + ttl_secs;
        conn.execute(
            "INSERT INTO kv (key, value, expires_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, expires_at = ?3",
            params![key, value, expires_at],
        )
        .map_err(|e| CacheError::Write(e.to_string()))?;
        Ok(())
    }
}
