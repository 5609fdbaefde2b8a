//! Diagnostic messages carried by outcome envelopes.
//!
//! A [`DiagnosticMessage`] is a validated, immutable record: a
//! severity kind, a required non-blank code, and an optional
//! free-form description. Messages are only ever replaced, never
//! mutated: "changing" the description produces a new value.

use std::fmt;

use crate::EnvelopeError;

/// Severity of a single diagnostic message.
///
/// Ordinals run from 1 (`Information`) to 4 (`Critical`); 0 and
/// anything above 4 are rejected by [`MessageKind::from_ordinal`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    /// Informational note.
    Information = 1,
    /// Something suspicious that did not stop the operation.
    Warning = 2,
    /// A failure of part of the operation.
    Error = 3,
    /// A failure severe enough to need immediate attention.
    Critical = 4,
}

impl MessageKind {
    /// All kinds, in ordinal order.
    pub const ALL: [MessageKind; 4] = [
        MessageKind::Information,
        MessageKind::Warning,
        MessageKind::Error,
        MessageKind::Critical,
    ];

    /// Lowercase keyword used in rendered output.
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKind::Information => "information",
            MessageKind::Warning => "warning",
            MessageKind::Error => "error",
            MessageKind::Critical => "critical",
        }
    }

    /// Numeric ordinal of this kind.
    pub const fn ordinal(self) -> i16 {
        self as i16
    }

    /// Convert a raw ordinal back into a kind.
    ///
    /// Fails with [`EnvelopeError::KindOutOfRange`] for anything
    /// outside `1..=4`.
    pub fn from_ordinal(ordinal: i16) -> Result<Self, EnvelopeError> {
        match ordinal {
            1 => Ok(MessageKind::Information),
            2 => Ok(MessageKind::Warning),
            3 => Ok(MessageKind::Error),
            4 => Ok(MessageKind::Critical),
            _ => Err(EnvelopeError::KindOutOfRange {
                target: "MessageKind",
                ordinal,
            }),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, immutable diagnostic message.
///
/// Produced only through [`DiagnosticMessage::new`] or the per-kind
/// convenience constructors, which guarantee a non-blank code. A
/// `Default` instance is a deliberately invalid placeholder (blank
/// code), the analog of a zero-valued record; [`is_valid`] reports
/// the difference.
///
/// [`is_valid`]: DiagnosticMessage::is_valid
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticMessage {
    kind: MessageKind,
    code: String,
    description: Option<String>,
}

impl Default for DiagnosticMessage {
    fn default() -> Self {
        DiagnosticMessage {
            kind: MessageKind::Information,
            code: String::new(),
            description: None,
        }
    }
}

impl DiagnosticMessage {
    /// Create a message with the given kind, code, and description.
    ///
    /// The code must contain at least one non-whitespace character;
    /// the description is unchecked, so absent, empty, and
    /// whitespace-only descriptions are all accepted and preserved
    /// exactly.
    pub fn new(
        kind: MessageKind,
        code: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, EnvelopeError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(EnvelopeError::BlankCode);
        }
        Ok(DiagnosticMessage {
            kind,
            code,
            description,
        })
    }

    /// Create an information message with no description.
    pub fn information(code: impl Into<String>) -> Result<Self, EnvelopeError> {
        Self::new(MessageKind::Information, code, None)
    }

    /// Create a warning message with no description.
    pub fn warning(code: impl Into<String>) -> Result<Self, EnvelopeError> {
        Self::new(MessageKind::Warning, code, None)
    }

    /// Create an error message with no description.
    pub fn error(code: impl Into<String>) -> Result<Self, EnvelopeError> {
        Self::new(MessageKind::Error, code, None)
    }

    /// Create a critical message with no description.
    pub fn critical(code: impl Into<String>) -> Result<Self, EnvelopeError> {
        Self::new(MessageKind::Critical, code, None)
    }

    /// Kind of this message.
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Message code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Optional free-form description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this message was produced through a constructor.
    ///
    /// A `Default` placeholder has a blank code and is never valid.
    pub fn is_valid(&self) -> bool {
        !self.code.trim().is_empty()
    }

    /// Copy of this message with the description replaced.
    ///
    /// The original is untouched. Kind and code are carried over from
    /// an already-valid message, so the result is always valid.
    #[must_use]
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        DiagnosticMessage {
            kind: self.kind,
            code: self.code.clone(),
            description: Some(description.into()),
        }
    }

    /// Copy of this message with the description removed.
    #[must_use]
    pub fn without_description(&self) -> Self {
        DiagnosticMessage {
            kind: self.kind,
            code: self.code.clone(),
            description: None,
        }
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, self.code)?;
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}
