//! The persisted-blob collaborator: a key-value store holding the serialized
//! invoice collection under a single key. The repository reads it once at
//! startup and writes through on every mutation.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

/// Key the invoice collection is persisted under.
pub const INVOICES_KEY: &str = "invoices";

pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// SQLite-backed store, one `blobs` table keyed by name.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened blob store");
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS blobs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )?;
        Ok(SqliteStore { conn })
    }
}

impl BlobStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM blobs WHERE key = ?1")?;
        let value = stmt.query_row(params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO blobs (key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral skins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_store_round_trips_a_blob() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.read(INVOICES_KEY).unwrap(), None);

        store.write(INVOICES_KEY, "[]").unwrap();
        assert_eq!(store.read(INVOICES_KEY).unwrap().as_deref(), Some("[]"));

        store.write(INVOICES_KEY, "[{\"id\":\"1\"}]").unwrap();
        assert_eq!(
            store.read(INVOICES_KEY).unwrap().as_deref(),
            Some("[{\"id\":\"1\"}]")
        );
    }

    #[test]
    fn memory_store_round_trips_a_blob() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("anything").unwrap(), None);
        store.write("anything", "value").unwrap();
        assert_eq!(store.read("anything").unwrap().as_deref(), Some("value"));
    }
}
