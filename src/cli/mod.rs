pub mod doctor;
pub mod export;
pub mod history;
pub mod last_used;
pub mod log;
pub mod recency;
pub mod recommend;
pub mod score;

use anyhow::{Context, Result};
use std::sync::Arc;

use rota::config::RotaConfig;
use rota::db;
use rota::rotation::catalog::SiteCatalog;
use rota::rotation::clock::SystemClock;
use rota::rotation::storage::SqliteBackend;
use rota::rotation::tracker::RotationTracker;

/// Shared setup: load the catalog, open the database, and build a tracker on the
/// system clock.
pub fn open_tracker(config: &RotaConfig) -> Result<RotationTracker> {
    let catalog_path = config.resolved_catalog_path();
    let catalog = SiteCatalog::load_from(&catalog_path).with_context(|| {
        format!(
            "no usable site catalog (set catalog.path or ROTA_CATALOG; tried {})",
            catalog_path.display()
        )
    })?;

    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path)?;
    let backend = SqliteBackend::new(conn, config.storage.history_key.clone());

    RotationTracker::open(
        catalog,
        Box::new(backend),
        Arc::new(SystemClock),
        config.policy.unknown_sites,
    )
    .context("failed to load injection history")
}
