//! Four-level freshness classification of a site's last use.

use chrono::{DateTime, Utc};
use serde::Serialize;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// At or above this many days a site is safe to reuse.
pub const FRESH_AFTER_DAYS: i64 = 7;
/// At or above this many days (and below [`FRESH_AFTER_DAYS`]) a site needs caution.
pub const CAUTION_AFTER_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recency {
    /// Unused for a week or more.
    Fresh,
    /// Used 3 to 6 days ago.
    Caution,
    /// Used within the last 3 days. Avoid.
    Recent,
    /// No record of use.
    Unused,
}

impl Recency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Caution => "caution",
            Self::Recent => "recent",
            Self::Unused => "unused",
        }
    }
}

impl std::fmt::Display for Recency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Whole days between `last_used` and `now`, floored.
///
/// 23 hours is 0 days. A `last_used` in the future gives a negative count.
pub fn days_since(last_used: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_used).num_milliseconds().div_euclid(MS_PER_DAY)
}

/// Classify a site given its last-used timestamp (`None` if never used).
pub fn classify(last_used: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Recency {
    let Some(last_used) = last_used else {
        return Recency::Unused;
    };

    let days = days_since(last_used, now);
    if days >= FRESH_AFTER_DAYS {
        Recency::Fresh
    } else if days >= CAUTION_AFTER_DAYS {
        Recency::Caution
    } else {
        Recency::Recent
    }
}
