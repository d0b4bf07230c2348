//! The rotation tracker service.
//!
//! [`RotationTracker`] ties together the site catalog, the history store, a clock, and
//! the unknown-site policy. Writes go through [`RotationTracker::log_injection`]; every
//! other operation is a pure derivation over the current history and "now".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::catalog::SiteCatalog;
use super::clock::Clock;
use super::history::HistoryStore;
use super::recency::{self, Recency};
use super::recommend::{self, Recommendation};
use super::score::{self, ScoreBreakdown};
use super::storage::HistoryBackend;
use super::types::{InjectionRecord, InjectionType, Site, SiteId};
use crate::error::RotationError;

/// What to do when an injection is logged at a site the catalog does not list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSitePolicy {
    /// Refuse the write with [`RotationError::ValidationFailed`].
    #[default]
    Reject,
    /// Record it anyway and log a warning.
    Warn,
}

impl UnknownSitePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Warn => "warn",
        }
    }
}

impl std::fmt::Display for UnknownSitePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Recency bucket for one catalog site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteStatus<'a> {
    pub site: &'a Site,
    pub last_used: Option<DateTime<Utc>>,
    pub recency: Recency,
}

pub struct RotationTracker {
    catalog: SiteCatalog,
    history: HistoryStore,
    clock: Arc<dyn Clock>,
    policy: UnknownSitePolicy,
}

impl RotationTracker {
    /// Load the history from `backend` and build a tracker over it.
    pub fn open(
        catalog: SiteCatalog,
        backend: Box<dyn HistoryBackend>,
        clock: Arc<dyn Clock>,
        policy: UnknownSitePolicy,
    ) -> Result<Self, RotationError> {
        let history = HistoryStore::open(backend).map_err(RotationError::LoadFailed)?;
        tracing::info!(
            sites = catalog.len(),
            records = history.len(),
            policy = %policy,
            "rotation tracker ready"
        );
        Ok(Self {
            catalog,
            history,
            clock,
            policy,
        })
    }

    /// Append an injection at the current time and persist the full history.
    ///
    /// `notes` is left out of the record entirely when `None`.
    pub fn log_injection(
        &mut self,
        site_id: SiteId,
        compound_name: &str,
        notes: Option<&str>,
    ) -> Result<InjectionRecord, RotationError> {
        if !self.catalog.contains(&site_id) {
            match self.policy {
                UnknownSitePolicy::Reject => {
                    tracing::warn!(site = %site_id, "rejected injection at unknown site");
                    return Err(RotationError::ValidationFailed { site_id });
                }
                UnknownSitePolicy::Warn => {
                    tracing::warn!(site = %site_id, "recording injection at site not in catalog");
                }
            }
        }

        let record = InjectionRecord {
            site_id,
            timestamp: self.clock.now(),
            compound_name: compound_name.to_string(),
            notes: notes.map(str::to_string),
        };
        self.history.append(record.clone())?;

        tracing::info!(
            site = %record.site_id,
            compound = %record.compound_name,
            records = self.history.len(),
            "injection logged"
        );
        Ok(record)
    }

    /// When `site_id` was last used, or `None` if never.
    pub fn last_used(&self, site_id: &SiteId) -> Option<DateTime<Utc>> {
        self.history.last_used(site_id)
    }

    /// Up to `count` sites of `injection_type`, longest-unused first.
    pub fn next_recommended(
        &self,
        injection_type: InjectionType,
        count: usize,
    ) -> Vec<Recommendation> {
        recommend::next_recommended(
            &self.catalog,
            &self.history,
            injection_type,
            count,
            self.clock.now(),
        )
    }

    /// Rotation quality over the most recent records, 0–100.
    pub fn rotation_score(&self) -> u8 {
        score::rotation_score(self.history.records(), self.catalog.len())
    }

    pub fn score_breakdown(&self) -> ScoreBreakdown {
        score::score_breakdown(self.history.records(), self.catalog.len())
    }

    /// Freshness bucket for `site_id`.
    pub fn recency(&self, site_id: &SiteId) -> Recency {
        recency::classify(self.history.last_used(site_id), self.clock.now())
    }

    /// Recency of every catalog site, in catalog order.
    pub fn recency_map(&self) -> Vec<SiteStatus<'_>> {
        let now = self.clock.now();
        self.catalog
            .sites()
            .iter()
            .map(|site| {
                let last_used = self.history.last_used(&site.id);
                SiteStatus {
                    site,
                    last_used,
                    recency: recency::classify(last_used, now),
                }
            })
            .collect()
    }

    /// The full history, oldest first.
    pub fn history(&self) -> &[InjectionRecord] {
        self.history.records()
    }

    pub fn catalog(&self) -> &SiteCatalog {
        &self.catalog
    }
}
