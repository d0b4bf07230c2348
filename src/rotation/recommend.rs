//! Least-recently-used site ranking.
//!
//! Candidates of the requested type are ordered by an explicit composite key:
//!
//! 1. never-used sites before any used site,
//! 2. among used sites, more days since last use first,
//! 3. catalog enumeration order.
//!
//! The third key makes every tie deterministic regardless of the sort algorithm.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;

use super::catalog::SiteCatalog;
use super::history::HistoryStore;
use super::recency::days_since;
use super::types::{InjectionType, SiteId};

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub site_id: SiteId,
    /// Floored days since last use; `None` if the site has never been used.
    pub days_since_last_use: Option<i64>,
}

/// Return up to `count` sites of `injection_type`, best candidates first.
///
/// Fewer than `count` candidates returns all of them; a type with no catalog sites
/// returns an empty list.
pub fn next_recommended(
    catalog: &SiteCatalog,
    history: &HistoryStore,
    injection_type: InjectionType,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<Recommendation> {
    let mut ranked: Vec<(usize, Recommendation)> = catalog
        .of_type(injection_type)
        .enumerate()
        .map(|(index, site)| {
            let days = history.last_used(&site.id).map(|ts| days_since(ts, now));
            (
                index,
                Recommendation {
                    site_id: site.id.clone(),
                    days_since_last_use: days,
                },
            )
        })
        .collect();

    ranked.sort_by_key(|(index, rec)| {
        (
            rec.days_since_last_use.is_some(),
            Reverse(rec.days_since_last_use),
            *index,
        )
    });

    ranked.into_iter().take(count).map(|(_, rec)| rec).collect()
}
