//! Tally tests: per-slot counts, best slot, tie-break, empty report.

mod common;

use slotpoll::models::{Event, TallyReport, tally};
use common::*;

const A: &str = "2026-03-01 09:00";
const B: &str = "2026-03-01 10:00";
const C: &str = "2026-03-02 14:00";

#[test]
fn test_tally_counts_and_best_slot() {
    let mut event = published(&[A, B, C]);
    event.submit("X", vec![true, false, true]).unwrap();
    event.submit("Y", vec![true, true, false]).unwrap();

    let report = tally(&event);
    assert_eq!(report.per_slot_count(), vec![2, 1, 1]);
    assert_eq!(report.voter_count, 2);
    let best = report.best.expect("best slot");
    assert_eq!(best.slot, slot(A));
    assert_eq!(best.count, 2);
}

#[test]
fn test_tie_goes_to_first_slot() {
    let mut event = published(&[A, B]);
    event.submit("X", vec![true, true]).unwrap();

    let best = tally(&event).best.unwrap();
    assert_eq!(best.slot, slot(A));
    assert_eq!(best.count, 1);
}

#[test]
fn test_tie_after_a_lower_slot_goes_to_first_maximum() {
    let mut event = published(&[A, B, C]);
    event.submit("X", vec![false, true, true]).unwrap();
    event.submit("Y", vec![false, true, true]).unwrap();

    let best = tally(&event).best.unwrap();
    assert_eq!(best.slot, slot(B));
    assert_eq!(best.count, 2);
}

#[test]
fn test_all_false_votes_still_recommend_first_slot() {
    let mut event = published(&[A, B]);
    event.submit("X", vec![false, false]).unwrap();

    let report = tally(&event);
    assert_eq!(report.per_slot_count(), vec![0, 0]);
    assert_eq!(report.best.unwrap().slot, slot(A));
}

#[test]
fn test_no_votes_yields_empty_report() {
    let event = published(&[A, B]);
    let report = tally(&event);
    assert!(report.is_empty());
    assert_eq!(report, TallyReport::default());
    assert!(report.best.is_none());

    assert!(tally(&Event::default()).is_empty());
}

#[test]
fn test_counts_are_aligned_with_slots() {
    let mut event = published(&[C, A]);
    event.submit("X", vec![false, true]).unwrap();

    let report = tally(&event);
    assert_eq!(report.counts[0].slot, slot(C));
    assert_eq!(report.counts[0].count, 0);
    assert_eq!(report.counts[1].slot, slot(A));
    assert_eq!(report.counts[1].count, 1);
}

#[test]
fn test_tally_is_repeatable() {
    let mut event = published(&[A, B, C]);
    event.submit("X", vec![true, false, true]).unwrap();
    assert_eq!(tally(&event), tally(&event));
}

#[test]
fn test_report_serializes_slots_canonically() {
    let mut event = published(&[A]);
    event.submit("X", vec![true]).unwrap();
    let json = serde_json::to_value(tally(&event)).unwrap();
    assert_eq!(json["best"]["slot"], A);
    assert_eq!(json["counts"][0]["count"], 1);
    assert_eq!(json["voter_count"], 1);
}
