//! CLI `doctor` command — run database diagnostics and print a health report.

use anyhow::{Context, Result};

use rota::config::RotaConfig;
use rota::db;
use rota::rotation::storage::{HistoryBackend, SqliteBackend};

/// Run database diagnostics and print a health report.
pub fn doctor(config: &RotaConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    if !db_path.exists() {
        println!("Database: not found at {}", db_path.display());
        println!("Run `rota log` to record the first injection.");
        return Ok(());
    }

    let file_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

    let conn = db::open_database(&db_path).context("failed to open database (may be corrupt)")?;
    let report = db::check_database_health(&conn).context("failed to run health check")?;

    println!("Rota Health Report");
    println!("==================");
    println!();
    println!("Database:          {}", db_path.display());
    println!("File size:         {}", format_bytes(file_size));
    println!("Schema version:    {}", report.schema_version);
    println!(
        "History format:    {}",
        report.history_format.as_deref().unwrap_or("(not set)")
    );
    println!("Stored keys:       {}", report.stored_keys);

    let backend = SqliteBackend::new(conn, config.storage.history_key.clone());
    match backend.load() {
        Ok(history) => println!("History records:   {} (key `{}`)", history.len(), backend.key()),
        Err(e) => println!("History records:   UNREADABLE ({e})"),
    }

    let catalog_path = config.resolved_catalog_path();
    println!(
        "Site catalog:      {}{}",
        catalog_path.display(),
        if catalog_path.exists() { "" } else { " (missing)" }
    );
    println!();
    if report.integrity_ok {
        println!("Integrity check:   PASSED");
    } else {
        println!("Integrity check:   FAILED ({})", report.integrity_details);
        println!();
        println!("Recovery steps:");
        println!("  1. Restore from a backup: cp backup.db {}", db_path.display());
        println!("  2. Or export from a good copy: rota export > history.json");
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
