mod helpers;

use helpers::{catalog, start_time, test_tracker_with};
use rota::db;
use rota::error::{RotationError, StorageError};
use rota::rotation::clock::ManualClock;
use rota::rotation::tracker::{RotationTracker, UnknownSitePolicy};
use rota::rotation::storage::SqliteBackend;
use rota::rotation::types::SiteId;
use tempfile::TempDir;

fn backend(path: &std::path::Path) -> Box<SqliteBackend> {
    Box::new(SqliteBackend::new(db::open_database(path).unwrap(), "injection-history"))
}

#[test]
fn history_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("nested").join("history.db");

    {
        let (mut tracker, clock) = test_tracker_with(catalog(), backend(&db_path));
        tracker.log_injection(SiteId::new("A"), "BPC-157", Some("morning")).unwrap();
        clock.advance_days(1);
        tracker.log_injection(SiteId::new("B"), "BPC-157", None).unwrap();
    }

    assert!(db_path.exists());

    let (tracker, _) = test_tracker_with(catalog(), backend(&db_path));
    let history = tracker.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].site_id.as_str(), "A");
    assert_eq!(history[0].notes.as_deref(), Some("morning"));
    assert_eq!(history[1].notes, None);
    assert_eq!(
        tracker.last_used(&SiteId::new("B")),
        Some(helpers::start_time() + chrono::Duration::days(1))
    );
}

#[test]
fn stored_value_is_one_json_collection() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("history.db");

    {
        let (mut tracker, _) = test_tracker_with(catalog(), backend(&db_path));
        tracker.log_injection(SiteId::new("C"), "TB-500", None).unwrap();
        tracker.log_injection(SiteId::new("D"), "TB-500", Some("ok")).unwrap();
    }

    let conn = db::open_database(&db_path).unwrap();
    let (rows, value): (i64, String) = conn
        .query_row(
            "SELECT COUNT(*), MAX(value) FROM kv_store WHERE key = 'injection-history'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(rows, 1);

    let json: serde_json::Value = serde_json::from_str(&value).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["siteId"], "C");
    assert!(records[0].get("notes").is_none());
    assert_eq!(records[1]["notes"], "ok");
}

#[test]
fn corrupt_stored_history_is_a_load_error() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("history.db");

    let conn = db::open_database(&db_path).unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
        ["injection-history", r#"[{"siteId":"#, "2024-09-01T08:00:00Z"],
    )
    .unwrap();
    drop(conn);

    let clock = std::sync::Arc::new(ManualClock::new(start_time()));
    let result = RotationTracker::open(
        catalog(),
        backend(&db_path),
        clock,
        UnknownSitePolicy::Reject,
    );
    assert!(matches!(
        result,
        Err(RotationError::LoadFailed(StorageError::Serialization(_)))
    ));
}

#[test]
fn health_check_on_fresh_database() {
    let tmp = TempDir::new().unwrap();
    let conn = db::open_database(tmp.path().join("h.db")).unwrap();

    let report = db::check_database_health(&conn).unwrap();
    assert!(report.integrity_ok);
    assert_eq!(report.schema_version, db::migrations::CURRENT_SCHEMA_VERSION);
    assert_eq!(report.stored_keys, 0);
}

#[test]
fn busy_timeout_is_set() {
    let tmp = TempDir::new().unwrap();
    let conn = db::open_database(tmp.path().join("t.db")).unwrap();

    let timeout: i64 = conn
        .pragma_query_value(None, "busy_timeout", |row| row.get(0))
        .unwrap();
    assert_eq!(timeout, 5000);
}
