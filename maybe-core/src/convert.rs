//! Conversions between [`Maybe<T>`] and [`Outcome`].
//!
//! Both directions are lossy. Going to `Outcome` keeps only the fact that a
//! value existed; going to `Maybe<T>` keeps the value only as far as a bool
//! can be turned into a `T`.

use crate::channel::{Channel, Note};
use crate::coerce;
use crate::inspect::Inspect;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

impl<T> Maybe<T> {
    /// Collapse into an [`Outcome`], first match wins:
    ///
    /// 1. a value becomes [`Outcome::success`] and the value itself is dropped
    /// 2. a message with an exception or exception list keeps both
    /// 3. a message with an error code keeps both
    /// 4. a message alone
    /// 5. a friendly message, keeping its error code
    /// 6. an exception, then an exception list
    /// 7. an error code
    /// 8. otherwise [`Outcome::empty`]
    ///
    /// Only the diagnostic message survives when a wrapper carries both texts.
    pub fn to_outcome(&self) -> Outcome {
        if self.has_value() {
            return Outcome::success();
        }

        if self.has_message() {
            let message = self.message().unwrap_or_default();
            if let Some(exception) = self.exception() {
                return Outcome::with_exception(message, exception.clone(), false);
            }
            if self.is_exception_state() {
                return Outcome::with_exceptions(message, self.exceptions().to_vec(), false);
            }
            if let Some(code) = self.error_code() {
                return Outcome::with_error_code(message, code, false);
            }
            return match self.channel().note() {
                Some(note @ Note::Explicit(_)) => {
                    Outcome::from_channel(Channel::Message(note.clone()))
                }
                _ => Outcome::create_message(message),
            };
        }

        if let Some(friendly) = self.friendly_message() {
            if let Some(code) = self.error_code() {
                return Outcome::with_error_code(friendly, code, true);
            }
            return Outcome::create_friendly_message(friendly);
        }

        if let Some(exception) = self.exception() {
            return Outcome::from_exception(exception.clone());
        }
        if self.is_exception_state() {
            return Outcome::from_exceptions(self.exceptions().to_vec());
        }

        match self.error_code() {
            Some(code) => Outcome::from_error_code(code),
            None => Outcome::empty(),
        }
    }
}

impl<T: Default + 'static> Maybe<T> {
    /// Lift an [`Outcome`] into a `Maybe<T>`.
    ///
    /// A value is coerced into `T` (see below) and kept as a present value,
    /// so `Outcome::failure()` stays a value. A message paired with
    /// exceptions carries over. Anything else, a bare message included,
    /// becomes [`Maybe::empty`].
    ///
    /// The coercion maps `bool` to itself, integers to 1/0 and `String` to
    /// "true"/"false". Any other `T` gets `T::default()`, which says nothing
    /// about the original bool.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        if outcome.has_value() {
            return Self::present(coerce::bool_into::<T>(outcome.value()));
        }

        if outcome.has_message() && outcome.is_exception_state() {
            let message = outcome.message().unwrap_or_default();
            if let Some(exception) = outcome.exception() {
                return Self::with_exception(message, exception.clone(), false);
            }
            return Self::with_exceptions(message, outcome.exceptions().to_vec(), false);
        }

        tracing::trace!(
            event = "outcome_dropped",
            channel = %outcome.channel().kind()
        );
        Self::empty()
    }
}

impl<T> From<&Maybe<T>> for Outcome {
    fn from(maybe: &Maybe<T>) -> Self {
        maybe.to_outcome()
    }
}

impl<T> From<Maybe<T>> for Outcome {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_outcome()
    }
}

impl<T: Default + 'static> From<&Outcome> for Maybe<T> {
    fn from(outcome: &Outcome) -> Self {
        Self::from_outcome(outcome)
    }
}

impl Outcome {
    /// Same as [`Maybe::from_outcome`]
    pub fn lift<T: Default + 'static>(&self) -> Maybe<T> {
        Maybe::from_outcome(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{ChannelKind, Note};
    use maybe_error::Error;

    #[test]
    fn test_value_becomes_success() {
        let outcome = Maybe::new(42).to_outcome();
        assert_eq!(outcome, Outcome::success());

        // A present false is still a value.
        assert_eq!(Maybe::present(false).to_outcome(), Outcome::success());
    }

    #[test]
    fn test_message_with_exception_is_kept() {
        let err = Error::unexpected("boom");
        let maybe: Maybe<i32> = Maybe::with_exception("load failed", err.clone(), false);
        let outcome = Outcome::from(&maybe);

        assert_eq!(outcome.message(), Some("load failed"));
        assert_eq!(outcome.exception(), Some(&err));
    }

    #[test]
    fn test_message_with_exception_list_is_kept() {
        let maybe: Maybe<i32> = Maybe::with_exceptions(
            "batch failed",
            [Error::unexpected("a"), Error::unexpected("b")],
            false,
        );
        let outcome = maybe.to_outcome();

        assert_eq!(outcome.channel().kind(), ChannelKind::Exceptions);
        assert_eq!(outcome.exceptions().len(), 2);
        assert!(outcome.has_message());
    }

    #[test]
    fn test_message_with_error_code_is_kept() {
        let maybe: Maybe<String> = Maybe::with_error_code("throttled", 429, false);
        let outcome = maybe.to_outcome();
        assert_eq!(outcome, Outcome::with_error_code("throttled", 429, false));
    }

    #[test]
    fn test_bare_error_code_is_kept() {
        let maybe: Maybe<String> = Maybe::from_error_code(13);
        assert_eq!(maybe.to_outcome().error_code(), Some(13));
    }

    #[test]
    fn test_dual_messages_keep_only_diagnostic() {
        let maybe: Maybe<i32> = Maybe::with_messages("internal", "friendly");
        let outcome = maybe.to_outcome();
        assert_eq!(outcome, Outcome::create_message("internal"));
        assert!(!outcome.has_friendly_message());
    }

    #[test]
    fn test_friendly_message() {
        let maybe: Maybe<i32> = Maybe::create_friendly_message("Try later");
        assert_eq!(maybe.to_outcome(), Outcome::create_friendly_message("Try later"));
    }

    #[test]
    fn test_empty_text_message_stays_a_message() {
        let maybe: Maybe<i32> = Maybe::from_text("", true);
        let outcome = maybe.to_outcome();
        assert!(outcome.has_message());
        assert_eq!(outcome.message(), Some(""));
    }

    #[test]
    fn test_friendly_message_with_error_code_is_kept() {
        let maybe: Maybe<i32> = Maybe::with_error_code("Try later", 7, true);
        let outcome = maybe.to_outcome();
        assert_eq!(outcome, Outcome::with_error_code("Try later", 7, true));
        assert_eq!(outcome.error_code(), Some(7));
        assert_eq!(outcome.friendly_message(), Some("Try later"));
    }

    #[test]
    fn test_friendly_message_with_exception_drops_exception() {
        let maybe: Maybe<i32> = Maybe::with_exception("Try later", Error::unexpected("x"), true);
        let outcome = maybe.to_outcome();
        assert!(outcome.has_friendly_message());
        assert!(!outcome.is_exception_state());
    }

    #[test]
    fn test_exceptions() {
        let err = Error::unexpected("boom");
        let maybe: Maybe<i32> = Maybe::from_exception(err.clone());
        assert_eq!(maybe.to_outcome(), Outcome::from_exception(err.clone()));

        let maybe: Maybe<i32> = Maybe::from_exceptions(vec![err.clone()]);
        assert_eq!(maybe.to_outcome(), Outcome::from_exceptions(vec![err]));
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(Maybe::<i32>::empty().to_outcome(), Outcome::empty());
        assert_eq!(Maybe::<i32>::from_message("", false).to_outcome(), Outcome::empty());
    }

    #[test]
    fn test_success_round_trip_loses_value() {
        let lifted: Maybe<bool> = Maybe::from_outcome(&Outcome::success());
        assert_eq!(lifted.value(), Some(&true));
        assert_eq!(lifted.to_outcome(), Outcome::success());

        let lifted: Maybe<String> = Outcome::success().lift();
        assert_eq!(lifted.value().map(String::as_str), Some("true"));
        assert!(lifted.to_outcome().has_value());
    }

    #[test]
    fn test_failure_lifts_to_present_false() {
        let lifted: Maybe<bool> = Maybe::from_outcome(&Outcome::failure());
        assert!(lifted.has_value());
        assert_eq!(lifted.value(), Some(&false));

        let lifted: Maybe<i64> = (&Outcome::failure()).into();
        assert_eq!(lifted.value(), Some(&0));
    }

    // Types a bool cannot become get their default, still as a value.
    #[test]
    fn test_lift_into_unrelated_type_yields_default_value() {
        let lifted: Maybe<Vec<u8>> = Maybe::from_outcome(&Outcome::success());
        assert!(lifted.has_value());
        assert_eq!(lifted.value(), Some(&Vec::new()));
    }

    #[test]
    fn test_lift_message_with_exception() {
        let err = Error::parse_failed("bad row");
        let outcome = Outcome::with_exception("import failed", err.clone(), false);
        let lifted: Maybe<u32> = outcome.lift();

        assert_eq!(lifted.message(), Some("import failed"));
        assert_eq!(lifted.exception(), Some(&err));
        assert_eq!(outcome.note(), Some(&Note::Diagnostic("import failed".into())));
    }

    #[test]
    fn test_lift_drops_everything_else() {
        assert_eq!(Outcome::failure_with_message("nope").lift::<u32>(), Maybe::empty());
        assert_eq!(Outcome::from_error_code(9).lift::<u32>(), Maybe::empty());
        assert_eq!(
            Outcome::failure_with_exception(Error::unexpected("x")).lift::<u32>(),
            Maybe::empty()
        );
    }
}
