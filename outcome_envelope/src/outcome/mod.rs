//! The outcome envelope: kind, optional payload, diagnostics, faults.
//!
//! An [`Outcome`] is immutable after construction. Its two
//! collections distinguish "absent" (`None`) from "present but empty"
//! (`Some` of an empty vec), and that distinction is preserved
//! through construction; merging collapses an empty concatenation to
//! absent.

use std::fmt;
use std::sync::Arc;

use crate::{DiagnosticMessage, EnvelopeError, MessageKind};

mod merge;

/// Terminal disposition of an operation.
///
/// Ordinals run from 1 (`Success`) to 3 (`Partial`); 0 and anything
/// above 3 are rejected by [`OutcomeKind::from_ordinal`]. The valid
/// range is disjoint from, and stricter than, [`MessageKind`]'s.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeKind {
    /// The operation completed fully.
    Success = 1,
    /// The operation did not complete.
    Failure = 2,
    /// Parts of the operation succeeded and parts failed.
    Partial = 3,
}

impl OutcomeKind {
    /// All kinds, in ordinal order.
    pub const ALL: [OutcomeKind; 3] = [
        OutcomeKind::Success,
        OutcomeKind::Failure,
        OutcomeKind::Partial,
    ];

    /// Lowercase keyword used in rendered output.
    pub const fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::Success => "success",
            OutcomeKind::Failure => "failure",
            OutcomeKind::Partial => "partial",
        }
    }

    /// Numeric ordinal of this kind.
    pub const fn ordinal(self) -> i16 {
        self as i16
    }

    /// Convert a raw ordinal back into a kind.
    ///
    /// Fails with [`EnvelopeError::KindOutOfRange`] for anything
    /// outside `1..=3`.
    pub fn from_ordinal(ordinal: i16) -> Result<Self, EnvelopeError> {
        match ordinal {
            1 => Ok(OutcomeKind::Success),
            2 => Ok(OutcomeKind::Failure),
            3 => Ok(OutcomeKind::Partial),
            _ => Err(EnvelopeError::KindOutOfRange {
                target: "OutcomeKind",
                ordinal,
            }),
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque captured fault.
///
/// The envelope never inspects a fault beyond storing it; any error
/// type can be captured. The shared pointer keeps envelopes cheaply
/// cloneable, and non-nullity is guaranteed by the type itself.
pub type Fault = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Immutable envelope describing the outcome of one operation.
///
/// Combines an [`OutcomeKind`], an optional payload, an optional
/// collection of [`DiagnosticMessage`], and an optional collection of
/// captured [`Fault`]s. Payload presence is an explicit slot: a
/// payload of `0`, `false`, or an empty string still counts as
/// present.
///
/// Every constructor-produced envelope is valid; a `Default` instance
/// is a deliberately invalid placeholder (the analog of a zero-valued
/// record) that every construction and merge path rejects.
#[must_use = "outcomes should be inspected or merged, not silently dropped"]
#[derive(Clone, Debug)]
pub struct Outcome<T> {
    kind: OutcomeKind,
    value: Option<T>,
    messages: Option<Vec<DiagnosticMessage>>,
    faults: Option<Vec<Fault>>,
    valid: bool,
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Outcome {
            kind: OutcomeKind::Success,
            value: None,
            messages: None,
            faults: None,
            valid: false,
        }
    }
}

impl<T> Outcome<T> {
    /// Create an envelope with the given kind, payload, and
    /// collections.
    ///
    /// Every supplied message must be valid; the scan stops at the
    /// first invalid element. Faults need no element check, since a
    /// [`Fault`] cannot be null. Empty collections are kept as
    /// present, distinct from absent ones.
    pub fn new(
        kind: OutcomeKind,
        value: Option<T>,
        messages: Option<Vec<DiagnosticMessage>>,
        faults: Option<Vec<Fault>>,
    ) -> Result<Self, EnvelopeError> {
        if let Some(messages) = &messages {
            for (index, message) in messages.iter().enumerate() {
                if !message.is_valid() {
                    return Err(EnvelopeError::InvalidMessage { index });
                }
            }
        }

        Ok(Outcome {
            kind,
            value,
            messages,
            faults,
            valid: true,
        })
    }

    const fn bare(kind: OutcomeKind) -> Self {
        Outcome {
            kind,
            value: None,
            messages: None,
            faults: None,
            valid: true,
        }
    }

    /// Success envelope with no payload, messages, or faults.
    pub const fn success() -> Self {
        Self::bare(OutcomeKind::Success)
    }

    /// Failure envelope with no payload, messages, or faults.
    pub const fn failure() -> Self {
        Self::bare(OutcomeKind::Failure)
    }

    /// Partial envelope with no payload, messages, or faults.
    pub const fn partial() -> Self {
        Self::bare(OutcomeKind::Partial)
    }

    /// Success envelope with the given payload and collections.
    ///
    /// Same validation as [`Outcome::new`] with the kind fixed.
    pub fn success_with(
        value: Option<T>,
        messages: Option<Vec<DiagnosticMessage>>,
        faults: Option<Vec<Fault>>,
    ) -> Result<Self, EnvelopeError> {
        Self::new(OutcomeKind::Success, value, messages, faults)
    }

    /// Failure envelope with the given payload and collections.
    ///
    /// Same validation as [`Outcome::new`] with the kind fixed.
    pub fn failure_with(
        value: Option<T>,
        messages: Option<Vec<DiagnosticMessage>>,
        faults: Option<Vec<Fault>>,
    ) -> Result<Self, EnvelopeError> {
        Self::new(OutcomeKind::Failure, value, messages, faults)
    }

    /// Partial envelope with the given payload and collections.
    ///
    /// Same validation as [`Outcome::new`] with the kind fixed.
    pub fn partial_with(
        value: Option<T>,
        messages: Option<Vec<DiagnosticMessage>>,
        faults: Option<Vec<Fault>>,
    ) -> Result<Self, EnvelopeError> {
        Self::new(OutcomeKind::Partial, value, messages, faults)
    }

    /// Success envelope carrying exactly one inline message.
    ///
    /// The message kind defaults to [`MessageKind::Information`] when
    /// not given.
    pub fn success_with_message(
        value: Option<T>,
        kind: Option<MessageKind>,
        code: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, EnvelopeError> {
        let message =
            DiagnosticMessage::new(kind.unwrap_or(MessageKind::Information), code, description)?;
        Self::new(OutcomeKind::Success, value, Some(vec![message]), None)
    }

    /// Failure envelope carrying exactly one inline message.
    ///
    /// The message kind defaults to [`MessageKind::Error`] when not
    /// given.
    pub fn failure_with_message(
        value: Option<T>,
        kind: Option<MessageKind>,
        code: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, EnvelopeError> {
        let message =
            DiagnosticMessage::new(kind.unwrap_or(MessageKind::Error), code, description)?;
        Self::new(OutcomeKind::Failure, value, Some(vec![message]), None)
    }

    /// Envelope of the given kind and payload, with messages and
    /// faults copied from an existing envelope.
    ///
    /// Fails with [`EnvelopeError::InvalidSource`] when the source is
    /// not valid. Delegates to [`Outcome::new`], so element validity
    /// is re-checked.
    pub fn from_outcome<U>(
        kind: OutcomeKind,
        value: Option<T>,
        source: &Outcome<U>,
    ) -> Result<Self, EnvelopeError> {
        if !source.is_valid() {
            return Err(EnvelopeError::InvalidSource);
        }
        Self::new(kind, value, source.messages.clone(), source.faults.clone())
    }

    /// Kind of this outcome.
    pub const fn kind(&self) -> OutcomeKind {
        self.kind
    }

    /// Whether this envelope was produced through a constructor.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the operation completed fully.
    pub const fn is_success(&self) -> bool {
        matches!(self.kind, OutcomeKind::Success)
    }

    /// Whether the operation did not complete.
    pub const fn is_failure(&self) -> bool {
        matches!(self.kind, OutcomeKind::Failure)
    }

    /// Whether the operation partially completed.
    pub const fn is_partial(&self) -> bool {
        matches!(self.kind, OutcomeKind::Partial)
    }

    /// Borrow the payload, if present.
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the envelope and take the payload.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Whether a payload is present.
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the operation succeeded and carries a payload.
    pub const fn is_success_and_has_value(&self) -> bool {
        self.is_success() && self.has_value()
    }

    /// Borrow the message collection, distinguishing absent from
    /// empty.
    pub fn messages(&self) -> Option<&[DiagnosticMessage]> {
        self.messages.as_deref()
    }

    /// Whether a message collection is present, regardless of
    /// emptiness.
    pub const fn has_messages(&self) -> bool {
        self.messages.is_some()
    }

    /// Borrow the fault collection, distinguishing absent from empty.
    pub fn faults(&self) -> Option<&[Fault]> {
        self.faults.as_deref()
    }

    /// Whether a fault collection is present, regardless of
    /// emptiness.
    pub const fn has_faults(&self) -> bool {
        self.faults.is_some()
    }
}
