//! Validation errors raised while building messages and envelopes.

use thiserror::Error;

/// Error raised when constructing a diagnostic message or an outcome
/// envelope.
///
/// Every variant aborts the whole construction: no partially built
/// value is ever returned or observable. These are deterministic
/// validations of caller-assembled input, so callers should treat
/// them as programming errors rather than recoverable runtime
/// conditions.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum EnvelopeError {
    /// A raw kind ordinal fell outside the valid range for its
    /// enumeration.
    #[error("ordinal {ordinal} is out of range for {target}")]
    KindOutOfRange {
        /// Name of the enumeration that rejected the ordinal.
        target: &'static str,
        /// The rejected ordinal.
        ordinal: i16,
    },

    /// A message code was empty or composed entirely of whitespace.
    #[error("message code must not be empty or whitespace")]
    BlankCode,

    /// An element of a supplied message collection was not valid.
    #[error("diagnostic message at index {index} should be valid")]
    InvalidMessage {
        /// Position of the offending element in the supplied collection.
        index: usize,
    },

    /// An element of a supplied outcome sequence was not valid.
    #[error("outcome at index {index} should be valid")]
    InvalidOutcome {
        /// Position of the offending outcome in the supplied sequence.
        index: usize,
    },

    /// The source outcome for a copying construction was not valid.
    #[error("source outcome should be valid")]
    InvalidSource,
}
