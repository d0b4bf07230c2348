//! Read-only view over the externally supplied site catalog.
//!
//! The engine never creates or edits sites. Enumeration order is significant:
//! the recommendation ranker uses it as the final tie-break.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::types::{InjectionType, Site, SiteId};

/// On-disk catalog file shape: a list of `[[sites]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sites: Vec<Site>,
}

/// The list of valid injection sites, in catalog enumeration order.
#[derive(Debug, Clone, Default)]
pub struct SiteCatalog {
    sites: Vec<Site>,
}

impl SiteCatalog {
    /// Build a catalog from an ordered list of sites. Rejects duplicate ids.
    pub fn new(sites: Vec<Site>) -> Result<Self> {
        let mut seen = HashSet::new();
        for site in &sites {
            if !seen.insert(&site.id) {
                bail!("duplicate site id in catalog: {}", site.id);
            }
        }
        Ok(Self { sites })
    }

    /// Parse a TOML catalog document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents).context("failed to parse catalog TOML")?;
        Self::new(file.sites)
    }

    /// Load a TOML catalog from disk.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read site catalog at {}", path.display()))?;
        let catalog = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), sites = catalog.len(), "site catalog loaded");
        Ok(catalog)
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn get(&self, id: &SiteId) -> Option<&Site> {
        self.sites.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &SiteId) -> bool {
        self.get(id).is_some()
    }

    /// Total number of sites across both injection types.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Sites of one injection type, in enumeration order.
    pub fn of_type(&self, injection_type: InjectionType) -> impl Iterator<Item = &Site> {
        self.sites
            .iter()
            .filter(move |s| s.injection_type == injection_type)
    }
}
