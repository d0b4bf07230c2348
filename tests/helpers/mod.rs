#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rota::rotation::catalog::SiteCatalog;
use rota::rotation::clock::ManualClock;
use rota::rotation::storage::{HistoryBackend, MemoryBackend};
use rota::rotation::tracker::{RotationTracker, UnknownSitePolicy};
use std::sync::Arc;

/// Four subcutaneous sites and two intramuscular ones.
pub const CATALOG_TOML: &str = r#"
[[sites]]
id = "A"
type = "subq"
view = "anterior"
anatomical_label = "Left abdomen"

[[sites]]
id = "B"
type = "subq"
view = "anterior"
anatomical_label = "Right abdomen"

[[sites]]
id = "C"
type = "subq"
view = "anterior"
anatomical_label = "Left thigh"

[[sites]]
id = "D"
type = "subq"
view = "anterior"
anatomical_label = "Right thigh"

[[sites]]
id = "glute-left"
type = "im"
view = "posterior"
anatomical_label = "Left gluteus"

[[sites]]
id = "glute-right"
type = "im"
view = "posterior"
anatomical_label = "Right gluteus"
"#;

/// Catalog with only the four subcutaneous sites A–D.
pub const SUBQ_ONLY_TOML: &str = r#"
[[sites]]
id = "A"
type = "subq"
view = "anterior"
anatomical_label = "Left abdomen"

[[sites]]
id = "B"
type = "subq"
view = "anterior"
anatomical_label = "Right abdomen"

[[sites]]
id = "C"
type = "subq"
view = "anterior"
anatomical_label = "Left thigh"

[[sites]]
id = "D"
type = "subq"
view = "anterior"
anatomical_label = "Right thigh"
"#;

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap()
}

pub fn catalog() -> SiteCatalog {
    SiteCatalog::from_toml_str(CATALOG_TOML).unwrap()
}

pub fn subq_only_catalog() -> SiteCatalog {
    SiteCatalog::from_toml_str(SUBQ_ONLY_TOML).unwrap()
}

/// Tracker over an empty in-memory backend with a manual clock at [`start_time`].
pub fn test_tracker(catalog: SiteCatalog) -> (RotationTracker, Arc<ManualClock>) {
    test_tracker_with(catalog, Box::new(MemoryBackend::new()))
}

pub fn test_tracker_with(
    catalog: SiteCatalog,
    backend: Box<dyn HistoryBackend>,
) -> (RotationTracker, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_time()));
    let tracker =
        RotationTracker::open(catalog, backend, clock.clone(), UnknownSitePolicy::Reject).unwrap();
    (tracker, clock)
}
