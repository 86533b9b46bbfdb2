//! Read access shared by [`Outcome`](crate::Outcome) and [`Maybe`](crate::Maybe).

use crate::channel::Channel;
use maybe_error::Error;

/// Flag and field accessors over a wrapper's [`Channel`].
///
/// The value itself is read through the wrapper's own `value()`, since the
/// two wrappers expose it differently.
pub trait Inspect {
    /// Type of the wrapped value
    type Value;

    /// Get the underlying channel
    fn channel(&self) -> &Channel<Self::Value>;

    /// Whether a value is carried
    fn has_value(&self) -> bool {
        self.channel().value().is_some()
    }

    /// Get the diagnostic message, if any
    fn message(&self) -> Option<&str> {
        self.channel().message()
    }

    /// Whether a diagnostic message counts as set
    fn has_message(&self) -> bool {
        self.channel().has_message()
    }

    /// Get the end-user message, if any
    fn friendly_message(&self) -> Option<&str> {
        self.channel().friendly_message()
    }

    /// Whether an end-user message is set
    fn has_friendly_message(&self) -> bool {
        self.channel().has_friendly_message()
    }

    /// Get the error code, if any
    fn error_code(&self) -> Option<i32> {
        self.channel().error_code()
    }

    /// Whether an error code is set
    fn has_error_code(&self) -> bool {
        self.channel().error_code().is_some()
    }

    /// Get the single captured failure
    fn exception(&self) -> Option<&Error> {
        self.channel().exception()
    }

    /// Get every captured failure, in order
    fn exceptions(&self) -> &[Error] {
        self.channel().exceptions()
    }

    /// Whether any failure was captured
    fn is_exception_state(&self) -> bool {
        self.channel().is_exception_state()
    }
}
