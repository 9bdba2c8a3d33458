//! Unit tests for `Maybe<A>`.
//!
//! Maybe represents a value that may be absent:
//! - `Some(A)`: a present value
//! - `None`: nothing

use carrier::control::{Either, Exception, Maybe};
use rstest::rstest;
use std::cell::Cell;
use std::panic::AssertUnwindSafe;

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn pure_then_map_increments() {
    assert_eq!(Maybe::pure(42).map(|x| x + 1), Maybe::Some(43));
}

#[rstest]
fn none_then_map_stays_absent() {
    let none: Maybe<i32> = Maybe::none();
    assert_eq!(none.map(|x| x + 1), Maybe::None);
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(Some(3), Maybe::Some(3))]
#[case(None, Maybe::None)]
fn from_nullable_normalizes_absence(#[case] input: Option<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::from_nullable(input), expected);
    assert_eq!(Maybe::from(input), expected);
}

#[rstest]
fn pure_of_absent_option_keeps_it() {
    let nested: Maybe<Option<i32>> = Maybe::pure(None);
    assert!(nested.is_some());
    assert_eq!(nested.flatten_option(), Maybe::None);
}

#[rstest]
fn when_does_not_evaluate_thunk_on_false() {
    let calls = Cell::new(0);
    let result = Maybe::when(false, || {
        calls.set(calls.get() + 1);
        1
    });
    assert_eq!(result, Maybe::None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(true, Maybe::Some(()))]
#[case(false, Maybe::None)]
fn when_true_reflects_condition(#[case] condition: bool, #[case] expected: Maybe<()>) {
    assert_eq!(Maybe::when_true(condition), expected);
}

#[rstest]
fn default_is_none() {
    assert_eq!(Maybe::<String>::default(), Maybe::None);
}

// =============================================================================
// Mapping and Binding
// =============================================================================

#[rstest]
fn map_is_not_invoked_for_none() {
    let calls = Cell::new(0);
    let none: Maybe<i32> = Maybe::None;
    let result = none.map(|x| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(result, Maybe::None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(4, Maybe::Some(2))]
#[case(5, Maybe::None)]
fn bind_flattens_one_level(#[case] input: i32, #[case] expected: Maybe<i32>) {
    let half = |x: i32| Maybe::when(x % 2 == 0, || x / 2);
    assert_eq!(Maybe::pure(input).bind(half), expected);
}

#[rstest]
fn bind_with_projects_both_values() {
    let result = Maybe::pure(3).bind_with(|x| Maybe::pure(x * 10), |x, y| x + y);
    assert_eq!(result, Maybe::Some(33));
}

#[rstest]
fn flatten_nested() {
    assert_eq!(Maybe::pure(Maybe::pure(1)).flatten(), Maybe::Some(1));
    assert_eq!(Maybe::pure(Maybe::<i32>::None).flatten(), Maybe::None);
}

// =============================================================================
// Filtering and Zipping
// =============================================================================

#[rstest]
#[case(10, Maybe::Some(10))]
#[case(3, Maybe::None)]
fn filter_keeps_matching(#[case] input: i32, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::pure(input).filter(|x| *x > 5), expected);
}

#[rstest]
fn filter_not_inverts_predicate() {
    assert_eq!(Maybe::pure(3).filter_not(|x| *x > 5), Maybe::Some(3));
    assert_eq!(Maybe::pure(10).filter_not(|x| *x > 5), Maybe::None);
}

#[rstest]
fn zip_requires_both() {
    assert_eq!(Maybe::pure(1).zip(Maybe::pure("a")), Maybe::Some((1, "a")));
    assert_eq!(Maybe::pure(1).zip(Maybe::<&str>::None), Maybe::None);
    assert_eq!(Maybe::<i32>::None.zip(Maybe::pure("a")), Maybe::None);
}

// =============================================================================
// Fallbacks
// =============================================================================

#[rstest]
fn get_or_else_is_lazy_for_present_value() {
    let value = Maybe::pure(5).get_or_else(|| panic!("fallback evaluated"));
    assert_eq!(value, 5);
}

#[rstest]
fn get_or_else_uses_fallback_for_none() {
    assert_eq!(Maybe::<i32>::None.get_or_else(|| 9), 9);
    assert_eq!(Maybe::<i32>::None.get_or(7), 7);
}

#[rstest]
fn or_else_does_not_evaluate_right_when_left_present() {
    let result = Maybe::pure(1).or_else(|| panic!("right side evaluated"));
    assert_eq!(result, Maybe::Some(1));
}

#[rstest]
#[should_panic(expected = "right side evaluated")]
fn or_else_evaluates_right_when_left_absent() {
    let _ = Maybe::<i32>::None.or_else(|| panic!("right side evaluated"));
}

#[rstest]
fn or_picks_first_present() {
    assert_eq!(Maybe::pure(1).or(Maybe::pure(2)), Maybe::Some(1));
    assert_eq!(Maybe::None.or(Maybe::pure(2)), Maybe::Some(2));
    assert_eq!(Maybe::<i32>::None.or(Maybe::None), Maybe::None);
}

#[rstest]
fn get_or_default_for_none() {
    assert_eq!(Maybe::<String>::None.get_or_default(), String::new());
}

// =============================================================================
// Raising
// =============================================================================

#[rstest]
fn get_or_raise_returns_value_when_present() {
    assert_eq!(Maybe::pure(1).get_or_raise(|| Exception::msg("missing")), 1);
}

#[rstest]
fn get_or_raise_unwinds_with_supplied_exception() {
    let raised = Exception::msg("missing user");
    let expected = raised.clone();
    let payload = std::panic::catch_unwind(AssertUnwindSafe(move || {
        Maybe::<i32>::None.get_or_raise(|| raised)
    }))
    .expect_err("should raise");
    let caught = Exception::from_panic(payload);
    assert!(caught.same_as(&expected));
}

#[rstest]
#[should_panic(expected = "called `Maybe::unwrap()` on a `None` value")]
fn unwrap_none_is_a_contract_violation() {
    let _ = Maybe::<i32>::None.unwrap();
}

#[rstest]
#[should_panic(expected = "config key missing")]
fn expect_none_panics_with_message() {
    let _ = Maybe::<i32>::None.expect("config key missing");
}

#[rstest]
fn ok_or_else_converts_to_result() {
    assert_eq!(Maybe::pure(1).ok_or_else(|| "absent"), Ok(1));
    assert_eq!(Maybe::<i32>::None.ok_or_else(|| "absent"), Err("absent"));
}

// =============================================================================
// Callbacks and Elimination
// =============================================================================

#[rstest]
fn when_some_and_when_none_run_matching_branch() {
    let seen = Cell::new(0);
    let missed = Cell::new(false);
    let value = Maybe::pure(4)
        .when_some(|x| seen.set(*x))
        .when_none(|| missed.set(true));
    assert_eq!(value, Maybe::Some(4));
    assert_eq!(seen.get(), 4);
    assert!(!missed.get());
}

#[rstest]
fn match_with_runs_none_branch() {
    let branch = Cell::new("");
    Maybe::<i32>::None.match_with(|_| branch.set("some"), || branch.set("none"));
    assert_eq!(branch.get(), "none");
}

#[rstest]
#[case(Maybe::Some(3), "3")]
#[case(Maybe::None, "-")]
fn fold_eliminates_both_variants(#[case] input: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(input.fold(|| "-".to_string(), |x| x.to_string()), expected);
}

#[rstest]
fn contains_compares_payload() {
    assert!(Maybe::pure(5).contains(&5));
    assert!(!Maybe::pure(5).contains(&6));
    assert!(!Maybe::<i32>::None.contains(&5));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn into_either_uses_supplied_error() {
    assert_eq!(Maybe::pure(1).into_either("none"), Either::Success(1));
    assert_eq!(Maybe::<i32>::None.into_either("none"), Either::Error("none"));
}

#[rstest]
fn into_either_with_is_lazy() {
    let result: Either<i32, String> = Maybe::pure(1).into_either_with(|| panic!("not needed"));
    assert_eq!(result, Either::Success(1));
}

#[rstest]
fn iterates_zero_or_one_items() {
    let collected: Vec<i32> = Maybe::pure(8).into_iter().collect();
    assert_eq!(collected, vec![8]);
    assert_eq!(Maybe::<i32>::None.iter().count(), 0);
}

#[rstest]
fn option_round_trip() {
    let option: Option<i32> = Maybe::pure(2).into();
    assert_eq!(option, Some(2));
}

#[rstest]
fn as_mut_updates_in_place() {
    let mut value = Maybe::pure(1);
    if let Maybe::Some(inner) = value.as_mut() {
        *inner += 1;
    }
    assert_eq!(value, Maybe::Some(2));
}

trait FlattenOption<A> {
    fn flatten_option(self) -> Maybe<A>;
}

impl<A> FlattenOption<A> for Maybe<Option<A>> {
    fn flatten_option(self) -> Maybe<A> {
        self.bind(Maybe::from_nullable)
    }
}
