//! SQLite-backed key-value store.
//!
//! One `kv` table holds every stored document, keyed by storage key. The
//! profile lives under [`USER_DATA_KEY`](super::USER_DATA_KEY) as a JSON
//! string.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use super::kv::KeyValueStore;
use super::data_dir;
use crate::error::PersistenceError;

const DB_FILE: &str = "unbudget.db";

/// SQLite database holding the key-value table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data dir>/unbudget.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    pub fn open() -> Result<Self, PersistenceError> {
        Self::open_at(&data_dir()?.join(DB_FILE))
    }

    /// Open (or create) the database file at `path`.
    pub fn open_at(path: &Path) -> Result<Self, PersistenceError> {
        let open_failed = |source| PersistenceError::OpenFailed {
            path: path.to_path_buf(),
            source,
        };
        let conn = Connection::open(path).map_err(open_failed)?;
        let db = Self { conn };
        db.migrate().map_err(open_failed)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_memory() -> Result<Self, PersistenceError> {
        let open_failed = |source| PersistenceError::OpenFailed {
            path: PathBuf::from(":memory:"),
            source,
        };
        let conn = Connection::open_in_memory().map_err(open_failed)?;
        let db = Self { conn };
        db.migrate().map_err(open_failed)?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }
}

impl KeyValueStore for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let read_failed = |source| PersistenceError::ReadFailed {
            key: key.to_string(),
            source,
        };
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1")
            .map_err(read_failed)?;
        match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(read_failed(e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(|source| PersistenceError::WriteFailed {
                key: key.to_string(),
                source,
            })?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|source| PersistenceError::WriteFailed {
                key: key.to_string(),
                source,
            })?;
        Ok(())
    }
}
