//! Draft slot set tests: idempotent add, ordering, clear, snapshot isolation.

mod common;

use slotpoll::models::{AddOutcome, DraftSlotSet, ValidationError};
use common::*;

fn keys(draft: &DraftSlotSet) -> Vec<String> {
    draft.iter().map(|s| s.to_key()).collect()
}

#[test]
fn test_add_reports_requested_and_added() {
    let mut draft = DraftSlotSet::new();
    let outcome = draft.add(date(2026, 3, 1), &[time(9), time(14)]).unwrap();
    assert_eq!(outcome, AddOutcome { requested: 2, added: 2 });
    assert_eq!(draft.len(), 2);
}

#[test]
fn test_add_same_slot_twice_is_idempotent() {
    let mut draft = DraftSlotSet::new();
    draft.add(date(2026, 3, 1), &[time(10)]).unwrap();
    let once = draft.len();

    let outcome = draft.add(date(2026, 3, 1), &[time(10)]).unwrap();
    assert_eq!(outcome, AddOutcome { requested: 1, added: 0 });
    assert_eq!(outcome.duplicates(), 1);
    assert_eq!(draft.len(), once);
}

#[test]
fn test_partial_duplicates_count_only_new_slots() {
    let mut draft = DraftSlotSet::new();
    draft.add(date(2026, 3, 1), &[time(10)]).unwrap();
    let outcome = draft.add(date(2026, 3, 1), &[time(9), time(10), time(11)]).unwrap();
    assert_eq!(outcome, AddOutcome { requested: 3, added: 2 });
    assert_eq!(draft.len(), 3);
}

#[test]
fn test_snapshot_is_sorted_after_any_adds() {
    let mut draft = DraftSlotSet::new();
    draft.add(date(2026, 3, 5), &[time(16), time(9)]).unwrap();
    draft.add(date(2026, 3, 1), &[time(18)]).unwrap();
    draft.add(date(2026, 3, 5), &[time(12)]).unwrap();

    let snapshot = draft.snapshot();
    let mut sorted = snapshot.clone();
    sorted.sort();
    assert_eq!(snapshot, sorted);
    assert_eq!(
        keys(&draft),
        vec!["2026-03-01 18:00", "2026-03-05 09:00", "2026-03-05 12:00", "2026-03-05 16:00"]
    );
}

#[test]
fn test_add_without_times_fails() {
    let mut draft = DraftSlotSet::new();
    assert_eq!(
        draft.add(date(2026, 3, 1), &[]).unwrap_err(),
        ValidationError::NoTimeSelected
    );
    assert!(draft.is_empty());
}

#[test]
fn test_clear_empties_draft() {
    let mut draft = DraftSlotSet::new();
    draft.add(date(2026, 3, 1), &[time(9), time(10)]).unwrap();
    draft.clear();
    assert!(draft.is_empty());
    assert!(draft.snapshot().is_empty());
}

#[test]
fn test_snapshot_does_not_alias_draft() {
    let mut draft = DraftSlotSet::new();
    draft.add(date(2026, 3, 1), &[time(9)]).unwrap();

    let mut snapshot = draft.snapshot();
    snapshot.push(slot("2026-04-01 10:00"));
    snapshot.clear();

    assert_eq!(keys(&draft), vec!["2026-03-01 09:00"]);
}
