//! # Safe navigation
//!
//! Reads that accept a wrapper that may not be there. A missing wrapper reads
//! exactly like an empty one, so none of these can fail.
//!
//! ```rust
//! use maybe_core::{nav, Maybe, Outcome};
//!
//! let missing: Option<&Outcome> = None;
//! assert!(!nav::value(missing));
//! assert_eq!(nav::message(missing), None);
//!
//! let found = Maybe::new(3u8);
//! assert_eq!(nav::value(Some(&found)), 3);
//! ```

use crate::inspect::Inspect;
use maybe_error::Error;

/// The value, or the value type's default
pub fn value<M>(maybe: Option<&M>) -> M::Value
where
    M: Inspect,
    M::Value: Default + Clone,
{
    maybe
        .and_then(|m| m.channel().value())
        .cloned()
        .unwrap_or_default()
}

/// Whether a value is there
pub fn has_value<M: Inspect>(maybe: Option<&M>) -> bool {
    maybe.is_some_and(M::has_value)
}

/// The diagnostic message
pub fn message<M: Inspect>(maybe: Option<&M>) -> Option<&str> {
    maybe.and_then(M::message)
}

/// Whether a diagnostic message is there
pub fn has_message<M: Inspect>(maybe: Option<&M>) -> bool {
    maybe.is_some_and(M::has_message)
}

/// The end-user message
pub fn friendly_message<M: Inspect>(maybe: Option<&M>) -> Option<&str> {
    maybe.and_then(M::friendly_message)
}

/// Whether an end-user message is there
pub fn has_friendly_message<M: Inspect>(maybe: Option<&M>) -> bool {
    maybe.is_some_and(M::has_friendly_message)
}

/// The error code
pub fn error_code<M: Inspect>(maybe: Option<&M>) -> Option<i32> {
    maybe.and_then(M::error_code)
}

/// Whether an error code is there
pub fn has_error_code<M: Inspect>(maybe: Option<&M>) -> bool {
    maybe.is_some_and(M::has_error_code)
}

/// The single captured failure
pub fn exception<M: Inspect>(maybe: Option<&M>) -> Option<&Error> {
    maybe.and_then(M::exception)
}

/// Every captured failure; empty when missing
pub fn exceptions<M: Inspect>(maybe: Option<&M>) -> &[Error] {
    maybe.map(M::exceptions).unwrap_or_default()
}

/// Whether a failure was captured
pub fn is_exception_state<M: Inspect>(maybe: Option<&M>) -> bool {
    maybe.is_some_and(M::is_exception_state)
}
