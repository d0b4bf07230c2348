//! Error taxonomy for the rotation engine.
//!
//! Opening a tracker fails with [`RotationError::LoadFailed`] when the stored history
//! cannot be read back. After that only writes can fail: [`RotationError::ValidationFailed`]
//! when an injection is logged at a site the catalog does not know, and
//! [`RotationError::PersistenceFailed`] when the storage backend rejects the write.
//! Derivations never return errors.

use crate::rotation::types::SiteId;

/// Failure inside a [`HistoryBackend`](crate::rotation::storage::HistoryBackend).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to (de)serialize history: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("stored history uses unsupported format `{found}` (expected `{expected}`)")]
    UnsupportedFormat { found: String, expected: &'static str },

    /// The backend refused the operation without an underlying library error.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by [`RotationTracker`](crate::rotation::tracker::RotationTracker).
#[derive(Debug, thiserror::Error)]
pub enum RotationError {
    #[error("validation failed: unknown injection site `{site_id}`")]
    ValidationFailed { site_id: SiteId },

    #[error("persistence failed: {0}")]
    PersistenceFailed(#[from] StorageError),

    #[error("failed to load history: {0}")]
    LoadFailed(#[source] StorageError),
}
