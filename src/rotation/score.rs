//! Rotation quality score.
//!
//! Reduces the most recent [`WINDOW_SIZE`] records to a single 0–100 number built from
//! three independent factors:
//!
//! | Factor | Weight | Measures |
//! |--------|--------|----------|
//! | Diversity | 40 | distinct sites in the window ÷ sites in the catalog |
//! | Repeat penalty | 30 | share of back-to-back uses of the same site |
//! | Evenness | 30 | spread between the most- and least-used sites in the window |
//!
//! Diversity alone cannot tell "two sites ping-ponged with a third used once" from a
//! balanced rotation; evenness and the repeat penalty catch those cases.

use serde::Serialize;
use std::collections::HashMap;

use super::types::InjectionRecord;

/// Number of most recent records considered.
pub const WINDOW_SIZE: usize = 30;

const DIVERSITY_WEIGHT: f64 = 40.0;
const REPEAT_WEIGHT: f64 = 30.0;
const EVENNESS_WEIGHT: f64 = 30.0;

/// Score returned for an empty history.
pub const PERFECT_SCORE: u8 = 100;

/// The factors behind a rotation score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Records considered (at most [`WINDOW_SIZE`]).
    pub window_len: usize,
    pub distinct_sites: usize,
    /// Distinct sites in the window ÷ catalog size.
    pub diversity: f64,
    /// Adjacent same-site pairs ÷ (window length − 1).
    pub repeat_penalty: f64,
    /// `1 - (max - min) / max` over per-site counts in the window.
    pub evenness: f64,
    pub score: u8,
}

/// Compute the score and its factors from a history in insertion order.
///
/// Only the newest [`WINDOW_SIZE`] records are considered. `catalog_size` counts every
/// site of both types. An empty history scores [`PERFECT_SCORE`].
pub fn score_breakdown(history: &[InjectionRecord], catalog_size: usize) -> ScoreBreakdown {
    let window = &history[history.len().saturating_sub(WINDOW_SIZE)..];
    if window.is_empty() {
        return ScoreBreakdown {
            window_len: 0,
            distinct_sites: 0,
            diversity: 0.0,
            repeat_penalty: 0.0,
            evenness: 1.0,
            score: PERFECT_SCORE,
        };
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in window {
        *counts.entry(record.site_id.as_str()).or_insert(0) += 1;
    }

    let distinct_sites = counts.len();
    let diversity = if catalog_size == 0 {
        0.0
    } else {
        distinct_sites as f64 / catalog_size as f64
    };

    let repeat_penalty = repeat_penalty(window);
    let evenness = evenness(counts.values().copied());

    let total = diversity * DIVERSITY_WEIGHT
        + (1.0 - repeat_penalty) * REPEAT_WEIGHT
        + evenness * EVENNESS_WEIGHT;
    let score = total.clamp(0.0, 100.0).round() as u8;

    ScoreBreakdown {
        window_len: window.len(),
        distinct_sites,
        diversity,
        repeat_penalty,
        evenness,
        score,
    }
}

/// Shorthand for `score_breakdown(..).score`.
pub fn rotation_score(history: &[InjectionRecord], catalog_size: usize) -> u8 {
    score_breakdown(history, catalog_size).score
}

fn repeat_penalty(window: &[InjectionRecord]) -> f64 {
    if window.len() < 2 {
        return 0.0;
    }
    let repeats = window
        .windows(2)
        .filter(|pair| pair[0].site_id == pair[1].site_id)
        .count();
    repeats as f64 / (window.len() - 1) as f64
}

fn evenness(counts: impl Iterator<Item = usize>) -> f64 {
    let (min, max) = counts.fold((usize::MAX, 0), |(min, max), c| (min.min(c), max.max(c)));
    if max == 0 {
        return 1.0;
    }
    1.0 - (max - min) as f64 / max as f64
}
