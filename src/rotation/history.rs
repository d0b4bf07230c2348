//! Append-only usage history.
//!
//! [`HistoryStore`] owns the in-memory record list and its [`HistoryBackend`]. The list
//! only grows, is kept in insertion order, and is written through in full on every
//! append. The history is unbounded: every append rewrites a collection that never
//! shrinks.

use chrono::{DateTime, Utc};

use super::storage::HistoryBackend;
use super::types::{InjectionRecord, SiteId};
use crate::error::StorageError;

pub struct HistoryStore {
    records: Vec<InjectionRecord>,
    backend: Box<dyn HistoryBackend>,
}

impl HistoryStore {
    /// Read the full history from `backend`.
    pub fn open(backend: Box<dyn HistoryBackend>) -> Result<Self, StorageError> {
        let records = backend.load()?;
        tracing::debug!(records = records.len(), "history store opened");
        Ok(Self { records, backend })
    }

    /// Append one record and persist the whole updated history.
    ///
    /// The record becomes visible only once the backend accepts the write, so a failed
    /// save leaves the history exactly as it was.
    pub fn append(&mut self, record: InjectionRecord) -> Result<(), StorageError> {
        self.records.push(record);
        if let Err(e) = self.backend.save(&self.records) {
            self.records.pop();
            tracing::error!(error = %e, "failed to persist history");
            return Err(e);
        }
        Ok(())
    }

    /// Timestamp of the most recent use of `site_id`, scanning from the newest entry.
    pub fn last_used(&self, site_id: &SiteId) -> Option<DateTime<Utc>> {
        self.records
            .iter()
            .rev()
            .find(|r| &r.site_id == site_id)
            .map(|r| r.timestamp)
    }

    /// The most recent `size` records (or all of them), oldest first.
    pub fn window(&self, size: usize) -> &[InjectionRecord] {
        let start = self.records.len().saturating_sub(size);
        &self.records[start..]
    }

    pub fn records(&self) -> &[InjectionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
