//! Lifting bare values, errors and text into wrappers.

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use maybe_error::Error;
use std::str::FromStr;

/// Wrap any value, with `T::default()` (including `None`) lifting to an
/// empty wrapper.
pub trait ToMaybe: Sized {
    /// Wrap `self`, treating the default as no value
    fn to_maybe(self) -> Maybe<Self>;
}

impl<T: Default + PartialEq> ToMaybe for T {
    fn to_maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

/// Lift a captured failure into either wrapper.
pub trait ErrorExt {
    /// Capture the failure in an [`Outcome`]
    fn into_outcome(self) -> Outcome;

    /// Capture the failure in a [`Maybe`]
    fn into_maybe<T>(self) -> Maybe<T>;
}

impl ErrorExt for Error {
    fn into_outcome(self) -> Outcome {
        Outcome::from_exception(self)
    }

    fn into_maybe<T>(self) -> Maybe<T> {
        Maybe::from_exception(self)
    }
}

/// Lift text into either wrapper.
pub trait TextExt {
    /// The text as a diagnostic message
    fn to_outcome(&self) -> Outcome;

    /// See [`Maybe::from_text`]
    fn to_maybe_from_text<T>(&self, is_message: bool) -> Maybe<T>
    where
        T: FromStr + Default + PartialEq + 'static,
        T::Err: std::error::Error + Send + Sync + 'static;
}

impl TextExt for str {
    fn to_outcome(&self) -> Outcome {
        Outcome::create_message(self)
    }

    fn to_maybe_from_text<T>(&self, is_message: bool) -> Maybe<T>
    where
        T: FromStr + Default + PartialEq + 'static,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        Maybe::from_text(self, is_message)
    }
}
