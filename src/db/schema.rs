//! SQL DDL for Rota's tables.
//!
//! `kv_store` is the durable key-value store the history is written into (one row per
//! logical key, whole value rewritten on every save). `schema_meta` tracks the schema
//! version and the history serialization format. All DDL is idempotent.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
-- Durable key-value storage
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
