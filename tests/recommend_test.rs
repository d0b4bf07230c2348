mod helpers;

use helpers::{catalog, subq_only_catalog, test_tracker};
use rota::rotation::types::{InjectionType, SiteId};

fn ids(recs: &[rota::rotation::recommend::Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.site_id.as_str()).collect()
}

#[test]
fn never_used_sites_always_lead() {
    let (mut tracker, clock) = test_tracker(catalog());
    tracker.log_injection(SiteId::new("A"), "X", None).unwrap();
    clock.advance_days(20);
    tracker.log_injection(SiteId::new("C"), "X", None).unwrap();
    clock.advance_days(1);

    for count in 1..=4 {
        let recs = tracker.next_recommended(InjectionType::Subq, count);
        let first_used = recs
            .iter()
            .position(|r| r.days_since_last_use.is_some())
            .unwrap_or(recs.len());
        assert!(
            recs[first_used..].iter().all(|r| r.days_since_last_use.is_some()),
            "unused site ranked after a used one for count {count}"
        );
    }

    let recs = tracker.next_recommended(InjectionType::Subq, 4);
    assert_eq!(ids(&recs), vec!["B", "D", "A", "C"]);
    assert_eq!(recs[2].days_since_last_use, Some(21));
    assert_eq!(recs[3].days_since_last_use, Some(1));
}

#[test]
fn recommendation_moves_after_logging() {
    let (mut tracker, clock) = test_tracker(subq_only_catalog());

    for _ in 0..8 {
        let next = tracker.next_recommended(InjectionType::Subq, 1);
        tracker.log_injection(next[0].site_id.clone(), "X", None).unwrap();
        clock.advance_days(1);
    }

    // Following the recommendation every time cycles A, B, C, D twice.
    let order: Vec<&str> = tracker.history().iter().map(|r| r.site_id.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C", "D", "A", "B", "C", "D"]);
    assert_eq!(tracker.rotation_score(), 100);
}

#[test]
fn im_request_only_returns_im_sites() {
    let (tracker, _) = test_tracker(catalog());
    let recs = tracker.next_recommended(InjectionType::Im, 10);
    assert_eq!(ids(&recs), vec!["glute-left", "glute-right"]);
}

#[test]
fn missing_type_yields_empty_list() {
    let (tracker, _) = test_tracker(subq_only_catalog());
    assert!(tracker.next_recommended(InjectionType::Im, 3).is_empty());
}
