//! SQLite-backed durable cache tier

use super::traits::{CacheEntry, CacheError, CacheResult, DurableCache, OpenCache, QuerySignature};
use chrono::DateTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite-backed durable cache
///
/// One row per signature holding the last resolved payload as JSON. No
/// version or TTL column: entries live until overwritten.
pub struct SqliteCache {
    conn: Mutex<Connection>,
}

impl SqliteCache {
    fn init_schema(conn: &Connection) -> CacheResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS cache_entries (
                signature TEXT PRIMARY KEY,
                payload_json TEXT NOT NULL,
                stored_at TEXT NOT NULL
            );

            -- Readers in other sessions should not block on our writes
            PRAGMA journal_mode = WAL;
            "#,
        )?;
        Ok(())
    }

    fn lock(&self) -> CacheResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| CacheError::LockPoisoned)
    }

    fn row_to_entry(
        signature: String,
        payload_json: String,
        stored_at: String,
    ) -> CacheResult<CacheEntry> {
        Ok(CacheEntry {
            signature: QuerySignature::from_string(signature),
            payload: serde_json::from_str(&payload_json)?,
            stored_at: DateTime::parse_from_rfc3339(&stored_at)
                .map_err(|e| CacheError::DateParse(e.to_string()))?
                .with_timezone(&chrono::Utc),
        })
    }
}

impl DurableCache for SqliteCache {
    fn get(&self, signature: &QuerySignature) -> CacheResult<Option<CacheEntry>> {
        let conn = self.lock()?;

        let row: Option<(String, String, String)> = conn
            .query_row(
                "SELECT signature, payload_json, stored_at
                 FROM cache_entries WHERE signature = ?1",
                params![signature.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        match row {
            Some((signature, payload, stored_at)) => {
                Ok(Some(Self::row_to_entry(signature, payload, stored_at)?))
            }
            None => Ok(None),
        }
    }

    fn put(&self, entry: &CacheEntry) -> CacheResult<()> {
        let payload_json = serde_json::to_string(&entry.payload)?;
        let conn = self.lock()?;

        conn.execute(
            "INSERT INTO cache_entries (signature, payload_json, stored_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(signature) DO UPDATE SET
                payload_json = excluded.payload_json,
                stored_at = excluded.stored_at",
            params![
                entry.signature.as_str(),
                payload_json,
                entry.stored_at.to_rfc3339()
            ],
        )?;
        Ok(())
    }

    fn len(&self) -> CacheResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM cache_entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl OpenCache for SqliteCache {
    fn open(path: impl AsRef<Path>) -> CacheResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn open_in_memory() -> CacheResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}
