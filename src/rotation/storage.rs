//! Storage backends for the usage history.
//!
//! The history is persisted as one serialized collection under a single logical key.
//! Every save rewrites the whole value; there is no incremental format.

use rusqlite::{params, Connection, OptionalExtension};

use super::types::InjectionRecord;
use crate::db::migrations::{get_history_format, HISTORY_FORMAT};
use crate::error::StorageError;

/// Durable home of the full history collection.
pub trait HistoryBackend: Send {
    /// Read the entire stored history. A backend with nothing stored yields an empty list.
    fn load(&self) -> Result<Vec<InjectionRecord>, StorageError>;

    /// Replace the stored history with `history` in full.
    fn save(&mut self, history: &[InjectionRecord]) -> Result<(), StorageError>;
}

/// SQLite-backed storage: one JSON value in `kv_store` under `key`.
pub struct SqliteBackend {
    conn: Connection,
    key: String,
}

impl SqliteBackend {
    /// Wrap a connection opened by [`crate::db::open_database`].
    pub fn new(conn: Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    fn check_format(&self) -> Result<(), StorageError> {
        match get_history_format(&self.conn)? {
            Some(found) if found != HISTORY_FORMAT => Err(StorageError::UnsupportedFormat {
                found,
                expected: HISTORY_FORMAT,
            }),
            _ => Ok(()),
        }
    }
}

impl HistoryBackend for SqliteBackend {
    fn load(&self) -> Result<Vec<InjectionRecord>, StorageError> {
        self.check_format()?;

        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;

        let history = match value {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        tracing::debug!(key = %self.key, records = history.len(), "history loaded");
        Ok(history)
    }

    fn save(&mut self, history: &[InjectionRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string(history)?;
        let now = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![self.key, json, now],
        )?;
        Ok(())
    }
}

/// In-process backend. Holds the serialized value exactly as a durable store would,
/// and can be told to refuse writes.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    stored: Option<String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-populated history.
    pub fn with_history(history: &[InjectionRecord]) -> Result<Self, StorageError> {
        Ok(Self {
            stored: Some(serde_json::to_string(history)?),
            fail_writes: false,
        })
    }

    /// Make every subsequent `save` fail with [`StorageError::Unavailable`].
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl HistoryBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<InjectionRecord>, StorageError> {
        match &self.stored {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, history: &[InjectionRecord]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("memory backend is read-only".into()));
        }
        self.stored = Some(serde_json::to_string(history)?);
        Ok(())
    }
}
