//! # maybe-error
//!
//! The captured failure carried by the exception channel of the `maybe-core`
//! wrappers.
//!
//! ## Design
//!
//! - **ErrorKind**: Know what failed (e.g., ParseFailed, ConversionFailed)
//! - **Error Context**: Where it failed, as an operation plus key-value pairs
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! An [`Error`] is a value: it can be cloned into both the single-exception and
//! the exception-list slot of a wrapper, and compared in tests.
//!
//! ## Usage
//!
//! ```rust
//! use maybe_error::{Error, ErrorKind};
//!
//! let err = Error::new(ErrorKind::ParseFailed, "expected an integer")
//!     .with_operation("orders::import")
//!     .with_context("line", "17");
//!
//! assert_eq!(err.kind(), ErrorKind::ParseFailed);
//! assert_eq!(err.clone(), err);
//! ```
//!
//! ## Principles
//!
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the captured [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
