//! # maybe-core
//!
//! Wrappers for the outcome of an operation that may produce a value, a
//! diagnostic message, an error code, or captured failures, without
//! returning `Err`.
//!
//! ## Core Concepts
//! - **Outcome**: success/failure of a boolean operation plus diagnostics
//! - **Maybe<T>**: the same for an arbitrary value type
//! - **Channel**: which payload a wrapper carries, as one tagged union
//! - **Inspect**: the shared flag and field accessors
//! - **nav**: reads through an `Option<&wrapper>` that never fail
//!
//! ## Usage
//!
//! ```rust
//! use maybe_core::prelude::*;
//!
//! fn load_limit(raw: &str) -> Maybe<u32> {
//!     match Maybe::<u32>::try_parse(raw) {
//!         Ok(limit) => limit,
//!         Err(err) => Maybe::with_exception("limit is not a number", err, false),
//!     }
//! }
//!
//! let limit = load_limit("25");
//! assert_eq!(limit.value(), Some(&25));
//!
//! let broken = load_limit("lots");
//! assert!(broken.has_message());
//! assert!(broken.is_exception_state());
//!
//! let outcome = broken.to_outcome();
//! assert!(!outcome.has_value());
//! assert_eq!(outcome.message(), Some("limit is not a number"));
//! ```
//!
//! ## Known limitations
//!
//! - [`Maybe::new`] treats `T::default()` as no value. Use
//!   [`Maybe::present`] or [`ValuePolicy::Always`] to keep it.
//! - [`Maybe::from_text`] and [`Maybe::parse_or_default`] swallow conversion
//!   failures. [`Maybe::try_parse`] reports them.
//! - Conversions between [`Maybe<T>`] and [`Outcome`] are lossy.

pub mod channel;
mod coerce;
mod convert;
pub mod inspect;
pub mod lift;
mod maybe;
pub mod nav;
mod outcome;

pub use channel::{Channel, ChannelKind, Note};
pub use inspect::Inspect;
pub use lift::{ErrorExt, TextExt, ToMaybe};
pub use maybe::{Maybe, ValuePolicy};
pub use outcome::Outcome;

pub use maybe_error::{Error, ErrorKind, Result};

/// Everything a call site usually needs.
pub mod prelude {
    pub use crate::{
        Channel, Error, ErrorExt, ErrorKind, Inspect, Maybe, Note, Outcome, TextExt, ToMaybe,
        ValuePolicy,
    };
}
