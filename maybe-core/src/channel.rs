//! # Channels
//!
//! The state of a wrapper as a single tagged union. Every `has_*` flag is
//! derived from the variant, so two flags can only be true together where a
//! composite variant says so.

use maybe_error::Error;
use serde::Serialize;
use std::fmt;

/// Text attached to a wrapper, tagged with its audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "audience", content = "text", rename_all = "snake_case")]
pub enum Note {
    /// Developer/log-oriented diagnostic text
    Diagnostic(String),
    /// Diagnostic text that counts as a message even when empty
    Explicit(String),
    /// End-user-facing text
    Friendly(String),
}

impl Note {
    /// Create a note, friendly when `is_friendly` is set
    pub fn new(text: impl Into<String>, is_friendly: bool) -> Self {
        if is_friendly {
            Note::Friendly(text.into())
        } else {
            Note::Diagnostic(text.into())
        }
    }

    /// The text regardless of audience
    pub fn text(&self) -> &str {
        match self {
            Note::Diagnostic(text) | Note::Explicit(text) | Note::Friendly(text) => text,
        }
    }

    /// Whether the note is meant for end users
    pub fn is_friendly(&self) -> bool {
        matches!(self, Note::Friendly(_))
    }
}

/// Discriminant of a [`Channel`], for logging and coarse matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// No payload
    Empty,
    /// A value
    Value,
    /// One message
    Message,
    /// A diagnostic and a friendly message
    Messages,
    /// An error code, maybe with a message
    ErrorCode,
    /// One captured failure
    Exception,
    /// A list of captured failures
    Exceptions,
}

impl ChannelKind {
    /// Returns the kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Empty => "empty",
            ChannelKind::Value => "value",
            ChannelKind::Message => "message",
            ChannelKind::Messages => "messages",
            ChannelKind::ErrorCode => "error_code",
            ChannelKind::Exception => "exception",
            ChannelKind::Exceptions => "exceptions",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a wrapper carries.
///
/// The error variants take an optional [`Note`] for the constructors that pair
/// a message with an error code or exception. `Messages` is the one place a
/// diagnostic and a friendly text coexist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "channel", content = "data", rename_all = "snake_case")]
pub enum Channel<V> {
    /// Nothing meaningful was produced
    Empty,
    /// The payload on success
    Value(V),
    /// A single diagnostic or friendly message
    Message(Note),
    /// A diagnostic message and a friendly message together
    Messages { message: String, friendly: String },
    /// An application-defined error code
    ErrorCode { code: i32, note: Option<Note> },
    /// A single captured failure
    Exception { exception: Error, note: Option<Note> },
    /// Zero or more captured failures, in order
    Exceptions { exceptions: Vec<Error>, note: Option<Note> },
}

impl<V> Default for Channel<V> {
    fn default() -> Self {
        Channel::Empty
    }
}

impl<V> Channel<V> {
    /// Get the discriminant
    pub fn kind(&self) -> ChannelKind {
        match self {
            Channel::Empty => ChannelKind::Empty,
            Channel::Value(_) => ChannelKind::Value,
            Channel::Message(_) => ChannelKind::Message,
            Channel::Messages { .. } => ChannelKind::Messages,
            Channel::ErrorCode { .. } => ChannelKind::ErrorCode,
            Channel::Exception { .. } => ChannelKind::Exception,
            Channel::Exceptions { .. } => ChannelKind::Exceptions,
        }
    }

    /// Whether nothing is carried
    pub fn is_empty(&self) -> bool {
        matches!(self, Channel::Empty)
    }

    /// Borrow the value, if any
    pub fn value(&self) -> Option<&V> {
        match self {
            Channel::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Take the value, if any
    pub fn into_value(self) -> Option<V> {
        match self {
            Channel::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The note of a single-message or composite variant
    pub fn note(&self) -> Option<&Note> {
        match self {
            Channel::Message(note) => Some(note),
            Channel::ErrorCode { note, .. }
            | Channel::Exception { note, .. }
            | Channel::Exceptions { note, .. } => note.as_ref(),
            _ => None,
        }
    }

    /// Diagnostic text, present even when empty
    pub fn message(&self) -> Option<&str> {
        match self {
            Channel::Messages { message, .. } => Some(message.as_str()),
            _ => match self.note() {
                Some(Note::Diagnostic(text) | Note::Explicit(text)) => Some(text.as_str()),
                _ => None,
            },
        }
    }

    /// A plain diagnostic note only counts when it is non-empty. An explicit
    /// note and the dual `Messages` variant always count.
    pub fn has_message(&self) -> bool {
        match self {
            Channel::Messages { .. } => true,
            _ => match self.note() {
                Some(Note::Explicit(_)) => true,
                Some(Note::Diagnostic(text)) => !text.is_empty(),
                _ => false,
            },
        }
    }

    /// Friendly text, present even when empty
    pub fn friendly_message(&self) -> Option<&str> {
        match self {
            Channel::Messages { friendly, .. } => Some(friendly.as_str()),
            _ => match self.note() {
                Some(Note::Friendly(text)) => Some(text.as_str()),
                _ => None,
            },
        }
    }

    /// Whether a friendly text is carried
    pub fn has_friendly_message(&self) -> bool {
        self.friendly_message().is_some()
    }

    /// Get the error code, if any
    pub fn error_code(&self) -> Option<i32> {
        match self {
            Channel::ErrorCode { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The single captured failure; `None` for the list variant
    pub fn exception(&self) -> Option<&Error> {
        match self {
            Channel::Exception { exception, .. } => Some(exception),
            _ => None,
        }
    }

    /// All captured failures; a single exception is a list of one
    pub fn exceptions(&self) -> &[Error] {
        match self {
            Channel::Exception { exception, .. } => std::slice::from_ref(exception),
            Channel::Exceptions { exceptions, .. } => exceptions.as_slice(),
            _ => &[],
        }
    }

    /// Whether one or more failures were captured
    pub fn is_exception_state(&self) -> bool {
        matches!(self, Channel::Exception { .. } | Channel::Exceptions { .. })
    }
}
