//! Injection-site rotation tracking: record where injections were given, recommend
//! the next site, and score how well sites are being rotated.
//!
//! Rota keeps an append-only history of injection events and derives everything else
//! from it on demand. Nothing derived is cached; each read recomputes from the current
//! history and the current time.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `log_injection` | history grows by one record, persisted in full |
//! | `last_used` | newest timestamp for a site, or none |
//! | `next_recommended` | longest-unused sites of a type, never-used first |
//! | `rotation_score` | 0–100 rotation quality over the last 30 records |
//! | `recency` | `fresh` / `caution` / `recent` / `unused` |
//!
//! The engine produces a heuristic ranking and a descriptive score. It does not
//! validate medical safety or enforce rest periods.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite key-value storage: schema, migrations, and health checks
//! - [`error`] — Validation and persistence errors
//! - [`rotation`] — Core engine: catalog, history, recency, ranking, and scoring

pub mod config;
pub mod db;
pub mod error;
pub mod rotation;
