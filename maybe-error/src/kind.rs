//! Kinds of captured failures

use serde::Serialize;
use std::fmt;

/// The kind of failure that was captured.
///
/// Callers match on this to decide what to do with an exception pulled out of
/// a wrapper without inspecting its message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // Conversion errors
    // =========================================================================
    /// Failed to parse text input
    ParseFailed,

    /// A value could not be converted into the requested type
    ConversionFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::InvalidArgument => "InvalidArgument",

            ErrorKind::ParseFailed => "ParseFailed",
            ErrorKind::ConversionFailed => "ConversionFailed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
