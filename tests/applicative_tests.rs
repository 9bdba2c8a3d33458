//! Integration tests for the fixed-arity applicative builders.

use carrier::applicative::{EitherApplicative1, MaybeApplicative1};
use carrier::control::{Either, Maybe};
use rstest::rstest;
use std::cell::Cell;

fn concat(a: &str, b: &str, c: &str) -> String {
    format!("{a}{b}{c}")
}

// =============================================================================
// Either Builders
// =============================================================================

#[rstest]
fn first_error_wins_in_argument_order() {
    let result = EitherApplicative1::new(Either::<&str, &str>::Success("A"))
        .and(Either::<&str, &str>::Error("B-fail"))
        .and(Either::<&str, &str>::Error("C-fail"))
        .then(concat);
    assert_eq!(result, Either::Error("B-fail"));
}

#[rstest]
fn all_successes_are_combined() {
    let result = EitherApplicative1::new(Either::<&str, &str>::Success("A"))
        .and(Either::Success("B"))
        .and(Either::Success("C"))
        .then(concat);
    assert_eq!(result, Either::Success("ABC".to_string()));
}

#[rstest]
#[case(0, "e0")]
#[case(3, "e3")]
#[case(6, "e6")]
fn error_position_determines_result(#[case] failing_from: usize, #[case] expected: &'static str) {
    let slot = |index: usize| -> Either<usize, String> {
        if index >= failing_from { Either::Error(format!("e{index}")) } else { Either::Success(index) }
    };
    let result = slot(0)
        .and(slot(1))
        .and(slot(2))
        .and(slot(3))
        .and(slot(4))
        .and(slot(5))
        .and(slot(6))
        .then(|a, b, c, d, e, f, g| a + b + c + d + e + f + g);
    assert_eq!(result, Either::Error(expected.to_string()));
}

#[rstest]
fn combine_is_not_called_on_error() {
    let calls = Cell::new(0);
    let result = Either::<i32, &str>::Success(1)
        .and(Either::Error("nope"))
        .then(|a, b: i32| {
            calls.set(calls.get() + 1);
            a + b
        });
    assert_eq!(result, Either::Error("nope"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn builders_are_values() {
    let builder = Either::<i32, ()>::Success(1).and(Either::Success(2));
    let copy = builder;
    assert_eq!(builder, copy);
    assert_eq!(copy.then(|a, b| a * 10 + b), Either::Success(12));
}

// =============================================================================
// Maybe Builders
// =============================================================================

#[rstest]
fn maybe_all_present_combines() {
    let result = MaybeApplicative1::new(Maybe::pure(2))
        .and(Maybe::pure(3))
        .and(Maybe::pure(4))
        .and(Maybe::pure(5))
        .then(|a, b, c, d| a * b * c * d);
    assert_eq!(result, Maybe::Some(120));
}

#[rstest]
fn maybe_absent_anywhere_yields_none() {
    for missing in 0..5 {
        let slot = |index: i32| Maybe::when(index != missing, || index);
        let result = slot(0)
            .and(slot(1))
            .and(slot(2))
            .and(slot(3))
            .and(slot(4))
            .then(|a, b, c, d, e| a + b + c + d + e);
        assert_eq!(result, Maybe::None, "slot {missing} absent");
    }
}

#[rstest]
fn maybe_mixed_payload_types() {
    let result = Maybe::pure("id")
        .and(Maybe::pure(7_u64))
        .and(Maybe::pure(true))
        .then(|name, number, flag| format!("{name}-{number}-{flag}"));
    assert_eq!(result, Maybe::Some("id-7-true".to_string()));
}
