//! Vote ledger tests: validation, overwrite semantics, ordering.

mod common;

use slotpoll::models::{Submission, ValidationError, VoteLedger};

#[test]
fn test_submit_records_vector() {
    let mut ledger = VoteLedger::new();
    let result = ledger.submit(3, "Ann", vec![true, false, true]).unwrap();
    assert_eq!(result, Submission::Recorded);
    assert_eq!(ledger.get("Ann"), Some(&[true, false, true][..]));
}

#[test]
fn test_resubmission_overwrites_single_entry() {
    let mut ledger = VoteLedger::new();
    ledger.submit(2, "X", vec![true, true]).unwrap();
    let result = ledger.submit(2, "X", vec![false, true]).unwrap();

    assert_eq!(result, Submission::Replaced);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.get("X"), Some(&[false, true][..]));
}

#[test]
fn test_overwrite_keeps_first_submission_position() {
    let mut ledger = VoteLedger::new();
    ledger.submit(1, "Ann", vec![true]).unwrap();
    ledger.submit(1, "Bob", vec![true]).unwrap();
    ledger.submit(1, "Ann", vec![false]).unwrap();

    let voters: Vec<&str> = ledger.iter().map(|b| b.voter.as_str()).collect();
    assert_eq!(voters, vec!["Ann", "Bob"]);
}

#[test]
fn test_all_false_vector_is_accepted() {
    let mut ledger = VoteLedger::new();
    ledger.submit(3, "Ann", vec![false, false, false]).unwrap();
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_empty_voter_name_fails() {
    let mut ledger = VoteLedger::new();
    assert_eq!(
        ledger.submit(1, "", vec![true]).unwrap_err(),
        ValidationError::EmptyVoterName
    );
    assert_eq!(
        ledger.submit(1, "  \t", vec![true]).unwrap_err(),
        ValidationError::EmptyVoterName
    );
    assert!(ledger.is_empty());
}

#[test]
fn test_voter_name_is_trimmed() {
    let mut ledger = VoteLedger::new();
    ledger.submit(1, "  Ann ", vec![true]).unwrap();
    assert_eq!(ledger.submit(1, "Ann", vec![false]).unwrap(), Submission::Replaced);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_long_voter_name_is_accepted() {
    let mut ledger = VoteLedger::new();
    let name = "n".repeat(300);
    assert_eq!(ledger.submit(1, &name, vec![true]).unwrap(), Submission::Recorded);
    assert_eq!(ledger.get(&name), Some(&[true][..]));
}

#[test]
fn test_length_mismatch_fails_and_leaves_ledger_unchanged() {
    let mut ledger = VoteLedger::new();
    ledger.submit(2, "Ann", vec![true, false]).unwrap();

    let err = ledger.submit(2, "Ann", vec![true, false, true]).unwrap_err();
    assert_eq!(err, ValidationError::SelectionLength { expected: 2, actual: 3 });
    assert_eq!(err.field(), "selections");
    assert_eq!(ledger.get("Ann"), Some(&[true, false][..]));
}
