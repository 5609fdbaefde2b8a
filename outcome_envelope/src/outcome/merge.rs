//! Merging an ordered sequence of envelopes into one.
//!
//! Merging concatenates the inputs' message and fault collections in
//! input order and either takes an explicit kind or infers one from
//! the kinds seen. The merged envelope's payload always comes from
//! the merge call, never from the inputs.

use crate::{DiagnosticMessage, EnvelopeError, Fault, Outcome, OutcomeKind};

impl<T> Outcome<T> {
    /// Merge the given envelopes into one of the given kind.
    ///
    /// Every input must be valid; the scan stops at the first invalid
    /// element, in input order. Messages and faults are concatenated
    /// independently, preserving input order; a concatenation with no
    /// elements yields an absent collection, never an empty one.
    /// Delegates to [`Outcome::new`], so element validity is
    /// re-checked on the concatenated collections.
    pub fn merge_with_kind(
        kind: OutcomeKind,
        value: Option<T>,
        outcomes: &[Outcome<T>],
    ) -> Result<Self, EnvelopeError> {
        for (index, outcome) in outcomes.iter().enumerate() {
            if !outcome.is_valid() {
                return Err(EnvelopeError::InvalidOutcome { index });
            }
        }

        Self::new(
            kind,
            value,
            concat_messages(outcomes),
            concat_faults(outcomes),
        )
    }

    /// Merge the given envelopes into one, inferring the kind.
    ///
    /// Classification scans in input order and skips invalid
    /// elements: any Partial input yields Partial, a mix of Success
    /// and Failure yields Partial, only Failure yields Failure, and
    /// everything else (including an empty or all-invalid input)
    /// yields Success. The scan stops as soon as the kind is
    /// determined.
    ///
    /// Concatenation and validation then run over the full unfiltered
    /// input via [`Outcome::merge_with_kind`], so an invalid element
    /// still fails the merge even though classification skipped it.
    pub fn merge(value: Option<T>, outcomes: &[Outcome<T>]) -> Result<Self, EnvelopeError> {
        let mut saw_success = false;
        let mut saw_failure = false;
        let mut saw_partial = false;

        for outcome in outcomes {
            if !outcome.is_valid() {
                continue;
            }
            match outcome.kind() {
                OutcomeKind::Success => saw_success = true,
                OutcomeKind::Failure => saw_failure = true,
                OutcomeKind::Partial => saw_partial = true,
            }
            // Partial dominates, and Success + Failure resolves to
            // Partial; either way the kind is settled.
            if saw_partial || (saw_success && saw_failure) {
                break;
            }
        }

        let kind = if saw_partial || (saw_success && saw_failure) {
            OutcomeKind::Partial
        } else if saw_failure {
            OutcomeKind::Failure
        } else {
            OutcomeKind::Success
        };

        Self::merge_with_kind(kind, value, outcomes)
    }
}

/// Concatenate all present message collections, in input order.
fn concat_messages<T>(outcomes: &[Outcome<T>]) -> Option<Vec<DiagnosticMessage>> {
    let mut merged = Vec::new();
    for outcome in outcomes {
        if let Some(messages) = outcome.messages() {
            merged.extend_from_slice(messages);
        }
    }
    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}

/// Concatenate all present fault collections, in input order.
fn concat_faults<T>(outcomes: &[Outcome<T>]) -> Option<Vec<Fault>> {
    let mut merged = Vec::new();
    for outcome in outcomes {
        if let Some(faults) = outcome.faults() {
            merged.extend_from_slice(faults);
        }
    }
    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
