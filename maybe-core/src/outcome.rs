//! # Outcome
//!
//! Success or failure of an operation, with optional diagnostics.

use crate::channel::{Channel, Note};
use crate::inspect::Inspect;
use maybe_error::Error;
use serde::Serialize;

/// Boolean result wrapper.
///
/// Unlike [`Maybe`](crate::Maybe), a `false` value is still a value:
/// [`Outcome::failure`] has `has_value() == true`.
///
/// # Example
///
/// ```rust
/// use maybe_core::{Inspect, Outcome};
///
/// let outcome = Outcome::with_error_code("quota exceeded", 429, false);
/// assert!(!outcome.has_value());
/// assert!(outcome.has_message());
/// assert_eq!(outcome.error_code(), Some(429));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Outcome {
    channel: Channel<bool>,
}

impl Outcome {
    /// Nothing meaningful; `value()` reads `false`
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a boolean; `false` is still a value
    pub fn from_bool(value: bool) -> Self {
        Self::from_channel(Channel::Value(value))
    }

    /// Capture a single failure
    pub fn from_exception(exception: Error) -> Self {
        Self::from_channel(Channel::Exception {
            exception,
            note: None,
        })
    }

    /// Always enters exception state, also for an empty sequence.
    pub fn from_exceptions(exceptions: impl IntoIterator<Item = Error>) -> Self {
        Self::from_channel(Channel::Exceptions {
            exceptions: exceptions.into_iter().collect(),
            note: None,
        })
    }

    /// A diagnostic message, or a friendly one when `is_friendly` is set.
    pub fn from_message(message: impl Into<String>, is_friendly: bool) -> Self {
        Self::from_channel(Channel::Message(Note::new(message, is_friendly)))
    }

    /// A message paired with a single failure
    pub fn with_exception(message: impl Into<String>, exception: Error, is_friendly: bool) -> Self {
        Self::from_channel(Channel::Exception {
            exception,
            note: Some(Note::new(message, is_friendly)),
        })
    }

    /// A message paired with a list of failures
    pub fn with_exceptions(
        message: impl Into<String>,
        exceptions: impl IntoIterator<Item = Error>,
        is_friendly: bool,
    ) -> Self {
        Self::from_channel(Channel::Exceptions {
            exceptions: exceptions.into_iter().collect(),
            note: Some(Note::new(message, is_friendly)),
        })
    }

    /// Carry an application error code
    pub fn from_error_code(code: i32) -> Self {
        Self::from_channel(Channel::ErrorCode { code, note: None })
    }

    /// A message paired with an error code
    pub fn with_error_code(message: impl Into<String>, code: i32, is_friendly: bool) -> Self {
        Self::from_channel(Channel::ErrorCode {
            code,
            note: Some(Note::new(message, is_friendly)),
        })
    }

    /// Both a diagnostic and a friendly message; both flags read true.
    pub fn with_messages(message: impl Into<String>, friendly: impl Into<String>) -> Self {
        Self::from_channel(Channel::Messages {
            message: message.into(),
            friendly: friendly.into(),
        })
    }

    pub(crate) fn from_channel(channel: Channel<bool>) -> Self {
        Self { channel }
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Create an empty outcome
    pub fn empty() -> Self {
        Self::new()
    }

    /// Create a successful outcome
    pub fn success() -> Self {
        Self::from_bool(true)
    }

    /// An explicit `false`; `has_value()` is true.
    pub fn failure() -> Self {
        Self::from_bool(false)
    }

    /// A failure explained by a diagnostic message; no value
    pub fn failure_with_message(message: impl Into<String>) -> Self {
        Self::from_message(message, false)
    }

    /// A failure explained by a captured exception; no value
    pub fn failure_with_exception(exception: Error) -> Self {
        Self::from_exception(exception)
    }

    /// Create a diagnostic message
    pub fn create_message(message: impl Into<String>) -> Self {
        Self::from_message(message, false)
    }

    /// Create an end-user message
    pub fn create_friendly_message(message: impl Into<String>) -> Self {
        Self::from_message(message, true)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// The wrapped boolean, `false` when there is no value
    pub fn value(&self) -> bool {
        self.channel.value().copied().unwrap_or_default()
    }

    /// Same as [`Outcome::value`]
    pub fn to_bool(&self) -> bool {
        self.value()
    }

    /// The note a composite constructor attached, if any
    pub fn note(&self) -> Option<&Note> {
        self.channel.note()
    }

    /// Take the underlying channel
    pub fn into_channel(self) -> Channel<bool> {
        self.channel
    }
}

impl Inspect for Outcome {
    type Value = bool;

    fn channel(&self) -> &Channel<bool> {
        &self.channel
    }
}

// =============================================================================
// Conversions standing in for implicit coercions
// =============================================================================

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<&Outcome> for bool {
    fn from(outcome: &Outcome) -> Self {
        outcome.value()
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> Self {
        outcome.value()
    }
}

impl From<&str> for Outcome {
    fn from(message: &str) -> Self {
        Self::create_message(message)
    }
}

impl From<String> for Outcome {
    fn from(message: String) -> Self {
        Self::create_message(message)
    }
}

impl From<Error> for Outcome {
    fn from(exception: Error) -> Self {
        Self::from_exception(exception)
    }
}
