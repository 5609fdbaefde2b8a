use std::io;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;

fn messages(codes: &[&str]) -> Vec<DiagnosticMessage> {
    codes
        .iter()
        .map(|code| DiagnosticMessage::information((*code).to_owned()).unwrap())
        .collect()
}

fn faults(labels: &[&str]) -> Vec<Fault> {
    labels
        .iter()
        .map(|label| Arc::new(io::Error::other((*label).to_owned())) as Fault)
        .collect()
}

fn outcome_with_messages(kind: OutcomeKind, codes: Option<&[&str]>) -> Outcome<u32> {
    Outcome::new(kind, None, codes.map(messages), None).unwrap()
}

#[test]
fn test_merge_infers_partial_from_mixed_success_and_failure() {
    let outcomes = [
        Outcome::<u32>::success(),
        Outcome::failure(),
        Outcome::success(),
    ];
    let merged = Outcome::merge(None, &outcomes).unwrap();

    assert!(merged.is_partial());
    assert!(merged.is_valid());
}

#[test]
fn test_merge_infers_success_from_all_success() {
    let outcomes = [Outcome::<u32>::success(), Outcome::success()];
    assert!(Outcome::merge(None, &outcomes).unwrap().is_success());
}

#[test]
fn test_merge_infers_failure_from_all_failure() {
    let outcomes = [Outcome::<u32>::failure(), Outcome::failure()];
    assert!(Outcome::merge(None, &outcomes).unwrap().is_failure());
}

#[test]
fn test_merge_partial_dominates() {
    let with_success = [Outcome::<u32>::success(), Outcome::partial()];
    let with_failure = [Outcome::<u32>::partial(), Outcome::failure()];
    let alone = [Outcome::<u32>::partial()];

    for outcomes in [&with_success[..], &with_failure[..], &alone[..]] {
        assert!(Outcome::merge(None, outcomes).unwrap().is_partial());
    }
}

#[test]
fn test_merge_of_empty_input_defaults_to_success() {
    let merged = Outcome::<u32>::merge(None, &[]).unwrap();

    assert!(merged.is_success());
    assert!(!merged.has_value());
    assert!(!merged.has_messages());
    assert!(!merged.has_faults());
}

#[test]
fn test_merge_concatenates_messages_in_order() {
    let outcomes = [
        outcome_with_messages(OutcomeKind::Success, Some(&["A1", "A2"])),
        outcome_with_messages(OutcomeKind::Success, None),
        outcome_with_messages(OutcomeKind::Failure, Some(&["B1", "B2", "B3"])),
    ];
    let merged = Outcome::merge(None, &outcomes).unwrap();

    let codes: Vec<&str> = merged
        .messages()
        .unwrap()
        .iter()
        .map(DiagnosticMessage::code)
        .collect();
    assert_eq!(codes, ["A1", "A2", "B1", "B2", "B3"]);
}

#[test]
fn test_merge_of_all_absent_messages_yields_absent() {
    let outcomes = [
        outcome_with_messages(OutcomeKind::Success, None),
        outcome_with_messages(OutcomeKind::Success, None),
        outcome_with_messages(OutcomeKind::Success, None),
    ];
    let merged = Outcome::merge(None, &outcomes).unwrap();

    assert!(!merged.has_messages());
    assert_eq!(merged.messages(), None);
}

#[test]
fn test_merge_of_empty_present_messages_yields_absent() {
    // Present-but-empty inputs survive single construction, but a
    // zero-length concatenation collapses to absent.
    let outcomes = [
        outcome_with_messages(OutcomeKind::Success, Some(&[])),
        outcome_with_messages(OutcomeKind::Success, Some(&[])),
    ];
    assert!(outcomes.iter().all(Outcome::has_messages));

    let merged = Outcome::merge(None, &outcomes).unwrap();
    assert!(!merged.has_messages());
}

#[test]
fn test_merge_concatenates_faults_independently() {
    let with_faults =
        Outcome::<u32>::new(OutcomeKind::Failure, None, None, Some(faults(&["f1", "f2"]))).unwrap();
    let with_messages = outcome_with_messages(OutcomeKind::Success, Some(&["A1"]));

    let merged = Outcome::merge(None, &[with_faults, with_messages]).unwrap();

    assert!(merged.is_partial());
    let labels: Vec<String> = merged
        .faults()
        .unwrap()
        .iter()
        .map(|fault| fault.to_string())
        .collect();
    assert_eq!(labels, ["f1", "f2"]);
    assert_eq!(merged.messages().map(<[_]>::len), Some(1));
}

#[test]
fn test_merge_with_kind_forces_kind() {
    let outcomes = [Outcome::<u32>::success(), Outcome::success()];
    let merged = Outcome::merge_with_kind(OutcomeKind::Failure, None, &outcomes).unwrap();

    assert!(merged.is_failure());
}

#[test]
fn test_merge_value_comes_from_argument() {
    let outcomes = [
        Outcome::new(OutcomeKind::Success, Some(1), None, None).unwrap(),
        Outcome::new(OutcomeKind::Success, Some(2), None, None).unwrap(),
    ];

    let merged = Outcome::merge(Some(9), &outcomes).unwrap();
    assert_eq!(merged.value(), Some(&9));

    let merged_without = Outcome::merge(None, &outcomes).unwrap();
    assert!(!merged_without.has_value());
}

#[test]
fn test_merge_rejects_first_invalid_input() {
    let outcomes = [
        Outcome::<u32>::success(),
        Outcome::default(),
        Outcome::default(),
    ];

    assert_eq!(
        Outcome::merge(None, &outcomes).unwrap_err(),
        EnvelopeError::InvalidOutcome { index: 1 }
    );
    assert_eq!(
        Outcome::merge_with_kind(OutcomeKind::Success, None, &outcomes).unwrap_err(),
        EnvelopeError::InvalidOutcome { index: 1 }
    );
}

#[test]
fn test_merge_fails_even_when_classification_skipped_the_invalid_input() {
    // Classification stops at the leading Partial, but the delegated
    // validation re-scans the unfiltered input and still rejects the
    // placeholder.
    let outcomes = [Outcome::<u32>::partial(), Outcome::default()];

    assert_eq!(
        Outcome::merge(None, &outcomes).unwrap_err(),
        EnvelopeError::InvalidOutcome { index: 1 }
    );
}

#[test]
fn test_merge_of_all_invalid_inputs_fails() {
    let outcomes = [Outcome::<u32>::default(), Outcome::default()];

    assert_eq!(
        Outcome::merge(None, &outcomes).unwrap_err(),
        EnvelopeError::InvalidOutcome { index: 0 }
    );
}
