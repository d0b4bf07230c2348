use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::rotation::tracker::UnknownSitePolicy;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RotaConfig {
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub policy: PolicyConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    /// Logical key the whole history is stored under.
    pub history_key: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PolicyConfig {
    pub unknown_sites: UnknownSitePolicy,
    pub recommendation_count: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_rota_dir()
            .join("history.db")
            .to_string_lossy()
            .into_owned();
        Self {
            db_path,
            history_key: "injection-history".into(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let path = default_rota_dir()
            .join("sites.toml")
            .to_string_lossy()
            .into_owned();
        Self { path }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            unknown_sites: UnknownSitePolicy::Reject,
            recommendation_count: 3,
        }
    }
}

/// Returns `~/.rota/` (or `./.rota/` when no home directory is known).
pub fn default_rota_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rota")
}

/// Returns the default config file path: `~/.rota/config.toml`
pub fn default_config_path() -> PathBuf {
    default_rota_dir().join("config.toml")
}

impl RotaConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            RotaConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (ROTA_DB, ROTA_CATALOG, ROTA_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ROTA_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("ROTA_CATALOG") {
            self.catalog.path = val;
        }
        if let Ok(val) = std::env::var("ROTA_LOG_LEVEL") {
            self.logging.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    pub fn resolved_catalog_path(&self) -> PathBuf {
        expand_tilde(&self.catalog.path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
