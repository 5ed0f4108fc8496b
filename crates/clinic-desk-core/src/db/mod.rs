//! Local persistence layer.
//!
//! A single-table key-value store over SQLite. The browser original kept its
//! doctor list under one localStorage key; this keeps the same shape, one row
//! per key with a JSON value.

mod doctors;

pub use doctors::*;

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DbResult<T> = Result<T, DbError>;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS local_store (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Read the raw value under a key. Any read problem reads as absent.
    pub(crate) fn read_value(&self, key: &str) -> Option<String> {
        self.conn
            .query_row(
                "SELECT value FROM local_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .ok()
            .flatten()
    }

    /// Overwrite the value under a key in a single statement.
    pub(crate) fn write_value(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO local_store (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }
}
