//! Immutable outcome envelopes and diagnostic messages.
//!
//! Two cooperating value types, both immutable after construction:
//!
//! - [`DiagnosticMessage`]: a validated record describing one
//!   informational, warning, error, or critical note.
//! - [`Outcome`]: an envelope combining an [`OutcomeKind`], an
//!   optional payload, and optional collections of messages and
//!   captured [`Fault`]s, with single-envelope construction and
//!   multi-envelope merging.
//!
//! Every operation is a pure function over its inputs: constructors
//! validate eagerly and return either a new immutable value or an
//! [`EnvelopeError`]; nothing is mutated after construction, so a
//! fully constructed value can be shared freely across threads.
//!
//! Merging combines an ordered sequence of envelopes into one,
//! concatenating their diagnostics and deriving a combined kind (any
//! Partial input, or a mix of Success and Failure, yields Partial):
//!
//! ```
//! use outcome_envelope::{DiagnosticMessage, Outcome, OutcomeKind};
//!
//! # fn main() -> Result<(), outcome_envelope::EnvelopeError> {
//! let fetched = Outcome::new(
//!     OutcomeKind::Success,
//!     Some(42),
//!     Some(vec![DiagnosticMessage::information("CACHE_MISS")?]),
//!     None,
//! )?;
//! let stored = Outcome::<i32>::failure_with_message(None, None, "DISK_FULL", None)?;
//!
//! let combined = Outcome::merge(None, &[fetched, stored])?;
//! assert!(combined.is_partial());
//! assert_eq!(combined.messages().map(|m| m.len()), Some(2));
//! # Ok(())
//! # }
//! ```

mod error;
mod message;
mod outcome;

pub use error::EnvelopeError;
pub use message::{DiagnosticMessage, MessageKind};
pub use outcome::{Fault, Outcome, OutcomeKind};
