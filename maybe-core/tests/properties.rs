//! Behaviour of the public surface as a caller sees it.

use maybe_core::{nav, prelude::*};

fn assert_empty<M: Inspect>(maybe: &M) {
    assert!(!maybe.has_value());
    assert!(!maybe.has_message());
    assert!(!maybe.has_friendly_message());
    assert!(!maybe.has_error_code());
    assert!(!maybe.is_exception_state());
    assert_eq!(maybe.message(), None);
    assert_eq!(maybe.friendly_message(), None);
    assert_eq!(maybe.error_code(), None);
    assert_eq!(maybe.exception(), None);
    assert!(maybe.exceptions().is_empty());
}

#[test]
fn wrapped_values_are_kept() {
    assert_eq!(17i32.to_maybe().value(), Some(&17));
    assert_eq!('x'.to_maybe().value(), Some(&'x'));
    assert_eq!(
        "report.csv".to_string().to_maybe().value().map(String::as_str),
        Some("report.csv")
    );
    assert_eq!(vec![0u8].to_maybe().value(), Some(&vec![0u8]));
}

#[test]
fn wrapped_defaults_have_no_value() {
    assert!(!0i32.to_maybe().has_value());
    assert!(!String::new().to_maybe().has_value());
    assert!(!false.to_maybe().has_value());
    assert!(!None::<u8>.to_maybe().has_value());
}

#[test]
fn empty_wrappers_carry_nothing() {
    let outcome = Outcome::empty();
    assert_empty(&outcome);
    assert!(!outcome.value());

    let maybe: Maybe<String> = Maybe::empty();
    assert_empty(&maybe);
    assert_eq!(maybe.value_or_default(), "");
}

#[test]
fn success_and_failure_are_values() {
    let success = Outcome::success();
    assert!(success.has_value());
    assert!(success.value());

    let failure = Outcome::failure();
    assert!(failure.has_value());
    assert!(!failure.value());
}

#[test]
fn failure_with_message() {
    let outcome = Outcome::failure_with_message("msg");
    assert!(outcome.has_message());
    assert_eq!(outcome.message(), Some("msg"));
    assert!(!outcome.has_value());
    assert!(!outcome.is_exception_state());
}

#[test]
fn failure_with_exception() {
    let err = Error::new(ErrorKind::InvalidArgument, "account id is blank");
    let outcome = Outcome::failure_with_exception(err.clone());
    assert!(outcome.is_exception_state());
    assert_eq!(outcome.exception(), Some(&err));
    assert!(!outcome.has_message());
}

#[test]
fn missing_wrappers_read_like_empty_ones() {
    let missing: Option<&Outcome> = None;
    let empty = Outcome::empty();
    assert_eq!(nav::value(missing), empty.value());
    assert_eq!(nav::message(missing), empty.message());
    assert_eq!(nav::exception(missing), empty.exception());
    assert_eq!(nav::has_value(missing), empty.has_value());
    assert_eq!(nav::has_message(missing), empty.has_message());
    assert_eq!(nav::is_exception_state(missing), empty.is_exception_state());

    let missing: Option<&Maybe<u16>> = None;
    assert_eq!(nav::value(missing), 0);
    assert!(!nav::has_value(missing));
    assert_eq!(nav::message(missing), None);
}

#[test]
fn success_survives_a_round_trip_but_the_value_does_not() {
    let lifted: Maybe<i32> = Outcome::success().lift();
    assert_eq!(lifted.value(), Some(&1));
    assert_eq!(lifted.to_outcome(), Outcome::success());

    let maybe = Maybe::new(99i32);
    let back: Maybe<i32> = maybe.to_outcome().lift();
    assert_eq!(back.value(), Some(&1));
}

#[test]
fn text_is_a_value_only_for_string_targets() {
    let maybe: Maybe<String> = Maybe::from_text("hello", false);
    assert_eq!(maybe.value().map(String::as_str), Some("hello"));

    let maybe: Maybe<i32> = Maybe::from_text("hello", false);
    assert!(!maybe.has_value());

    let maybe: Maybe<i32> = Maybe::parse_or_default("hello");
    assert!(!maybe.has_value());
}

#[test]
fn dual_messages_set_both_flags() {
    let outcome = Outcome::with_messages("index 4 out of range", "Something went wrong");
    assert!(outcome.has_message());
    assert!(outcome.has_friendly_message());

    let maybe: Maybe<u8> = Maybe::with_messages("index 4 out of range", "Something went wrong");
    assert!(maybe.has_message());
    assert!(maybe.has_friendly_message());
}

#[test]
fn cascading_failures_are_kept_in_order() {
    let errs = vec![
        Error::conversion_failed("12,50", "f64"),
        Error::unexpected("rollback failed"),
    ];
    let outcome = Outcome::with_exceptions("checkout aborted", errs.clone(), false);
    assert_eq!(outcome.exceptions(), errs.as_slice());
    assert_eq!(outcome.exception(), None);

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["channel"], "exceptions");
    assert_eq!(json["data"]["exceptions"][1]["message"], "rollback failed");
    assert_eq!(json["data"]["note"]["text"], "checkout aborted");
}

#[test]
fn captured_failures_keep_their_kind() {
    let err = Maybe::<u32>::try_parse("-1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConversionFailed);

    let maybe: Maybe<u32> = Maybe::with_exceptions(
        "order rejected",
        vec![
            err,
            Error::invalid_argument("quantity must be positive"),
            Error::parse_failed("bad sku"),
            Error::unexpected("ledger offline"),
        ],
        false,
    );
    let kinds: Vec<ErrorKind> = maybe.exceptions().iter().map(Error::kind).collect();
    assert_eq!(
        kinds,
        [
            ErrorKind::ConversionFailed,
            ErrorKind::InvalidArgument,
            ErrorKind::ParseFailed,
            ErrorKind::Unexpected,
        ]
    );
}

#[test]
fn empty_text_survives_from_text() {
    let maybe: Maybe<String> = Maybe::from_text("", false);
    assert_eq!(maybe.value().map(String::as_str), Some(""));

    let maybe: Maybe<i32> = Maybe::from_text("", true);
    assert!(maybe.has_message());
    assert!(nav::has_message(Some(&maybe)));
}
