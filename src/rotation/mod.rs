//! Injection-site rotation engine: history, recency, recommendations, and scoring.

pub mod catalog;
pub mod clock;
pub mod history;
pub mod recency;
pub mod recommend;
pub mod score;
pub mod storage;
pub mod tracker;
pub mod types;
