//! # Maybe
//!
//! The generic wrapper. Constructors that take text or an integer resolve
//! their meaning from `T`; see [`Maybe::from_text`] and [`Maybe::from_code`].

use crate::channel::{Channel, Note};
use crate::coerce;
use crate::inspect::Inspect;
use maybe_error::{Error, Result};
use serde::Serialize;
use std::any::type_name;
use std::str::FromStr;

/// How [`Maybe::with_policy`] treats a value equal to `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValuePolicy {
    /// `0`, `""`, `false`, `None` and friends mean "no value".
    ///
    /// A default value supplied on purpose cannot be told apart from a
    /// missing one under this policy.
    #[default]
    DefaultIsAbsent,
    /// Every supplied value is kept, defaults included.
    Always,
}

impl ValuePolicy {
    /// Whether `value` becomes a value under this policy
    pub fn admits<T: Default + PartialEq>(self, value: &T) -> bool {
        match self {
            ValuePolicy::Always => true,
            ValuePolicy::DefaultIsAbsent => *value != T::default(),
        }
    }
}

/// Generic result wrapper.
///
/// # Example
///
/// ```rust
/// use maybe_core::{Inspect, Maybe};
///
/// let port: Maybe<u16> = Maybe::parse_or_default("8080");
/// assert_eq!(port.value(), Some(&8080));
///
/// // Zero is indistinguishable from "no value" by default.
/// assert!(!Maybe::new(0u16).has_value());
/// assert!(Maybe::present(0u16).has_value());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Maybe<T> {
    channel: Channel<T>,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Maybe<T> {
    /// Create an empty wrapper
    pub fn empty() -> Self {
        Self::from_channel(Channel::Empty)
    }

    /// Wrap `value` as a value, whatever it is.
    pub fn present(value: T) -> Self {
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

    /// Always a message, even when `T` is `String`.
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

    /// Always the error-code channel, even when `T` is an integer.
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

    /// Both a diagnostic and a friendly message
    pub fn with_messages(message: impl Into<String>, friendly: impl Into<String>) -> Self {
        Self::from_channel(Channel::Messages {
            message: message.into(),
            friendly: friendly.into(),
        })
    }

    /// Create a diagnostic message
    pub fn create_message(message: impl Into<String>) -> Self {
        Self::from_message(message, false)
    }

    /// Create an end-user message
    pub fn create_friendly_message(message: impl Into<String>) -> Self {
        Self::from_message(message, true)
    }

    pub(crate) fn from_channel(channel: Channel<T>) -> Self {
        Self { channel }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Borrow the value, if any
    pub fn value(&self) -> Option<&T> {
        self.channel.value()
    }

    /// Take the value, if any
    pub fn into_value(self) -> Option<T> {
        self.channel.into_value()
    }

    /// Take the underlying channel
    pub fn into_channel(self) -> Channel<T> {
        self.channel
    }
}

impl<T: Default + Clone> Maybe<T> {
    /// The value, or `T::default()` when there is none
    pub fn value_or_default(&self) -> T {
        self.value().cloned().unwrap_or_default()
    }
}

impl<T: Default + PartialEq> Maybe<T> {
    /// Wrap `value`, treating `T::default()` as no value.
    pub fn new(value: T) -> Self {
        Self::with_policy(value, ValuePolicy::DefaultIsAbsent)
    }

    /// Wrap `value`, keeping or dropping a default per `policy`
    pub fn with_policy(value: T, policy: ValuePolicy) -> Self {
        if policy.admits(&value) {
            Self::present(value)
        } else {
            Self::empty()
        }
    }
}

impl<T: Default + PartialEq + 'static> Maybe<T> {
    /// An integer that is either the value or an error code.
    ///
    /// Unless `is_error_code` is set, an integer `T` takes `code` as its value;
    /// a code that does not fit in `T` yields an empty wrapper. For any other
    /// `T` the code is an error code.
    pub fn from_code(code: i32, is_error_code: bool) -> Self {
        if is_error_code || !coerce::is_integer::<T>() {
            return Self::from_error_code(code);
        }

        match coerce::integer_from_code::<T>(code) {
            Some(value) => Self::new(value),
            None => {
                tracing::debug!(
                    event = "code_conversion_swallowed",
                    code,
                    target_type = type_name::<T>()
                );
                Self::empty()
            }
        }
    }
}

impl<T> Maybe<T>
where
    T: FromStr + Default + PartialEq,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    /// Parse `text` into a value, surfacing the failure.
    pub fn try_parse(text: &str) -> Result<Self> {
        text.parse::<T>().map(Self::new).map_err(|err| {
            Error::conversion_failed(text, type_name::<T>())
                .with_operation("maybe::try_parse")
                .set_source(err)
        })
    }

    /// Parse `text` into a value; a failure yields an empty wrapper.
    ///
    /// The failure is only visible as a `tracing` debug event. Use
    /// [`Maybe::try_parse`] to get it as an error instead.
    pub fn parse_or_default(text: &str) -> Self {
        match Self::try_parse(text) {
            Ok(maybe) => maybe,
            Err(err) => {
                tracing::debug!(
                    event = "parse_swallowed",
                    target_type = type_name::<T>(),
                    error = %err
                );
                Self::empty()
            }
        }
    }
}

impl<T> Maybe<T>
where
    T: FromStr + Default + PartialEq + 'static,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    /// Text that is either the value or a diagnostic message.
    ///
    /// It is a message when `is_message` is set or `T` is not `String`, and
    /// `has_message()` holds even for an empty text. Otherwise the converted
    /// text is kept as a value, `""` included.
    pub fn from_text(text: impl Into<String>, is_message: bool) -> Self {
        let text = text.into();
        if is_message || !coerce::is_text::<T>() {
            return Self::from_channel(Channel::Message(Note::Explicit(text)));
        }

        match text.parse::<T>() {
            Ok(value) => Self::present(value),
            Err(err) => {
                tracing::debug!(
                    event = "text_conversion_swallowed",
                    target_type = type_name::<T>(),
                    error = %err
                );
                Self::empty()
            }
        }
    }
}

impl<T: 'static> Maybe<T> {
    /// The inner value when `T` is `bool`, otherwise `has_value()`
    pub fn to_bool(&self) -> bool {
        match self.value() {
            Some(value) => coerce::as_bool(value).unwrap_or(true),
            None => false,
        }
    }
}

impl<T> Inspect for Maybe<T> {
    type Value = T;

    fn channel(&self) -> &Channel<T> {
        &self.channel
    }
}

impl<T> From<Error> for Maybe<T> {
    fn from(exception: Error) -> Self {
        Self::from_exception(exception)
    }
}
