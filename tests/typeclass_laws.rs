#![cfg(feature = "typeclass")]
//! Property-based tests for the Functor, Applicative and Alternative laws.
//!
//! - **Functor Identity**: `fa.fmap(|x| x) == fa`
//! - **Functor Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//! - **Applicative Identity**: `pure(id).apply(v) == v`
//! - **Applicative Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`
//! - **Alternative Identity**: `empty.alt(x) == x` and `x.alt(empty) == x`
//!
//! `Try` has no `Alternative` instance; its fallback contract is checked
//! against `Try::alternatively` instead.

use carrier::control::{Either, Exception, Maybe, Try};
use carrier::typeclass::{Alternative, Applicative, Functor, Monad};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Success),
        "[a-z]{1,6}".prop_map(Either::Error),
    ]
}

// =============================================================================
// Functor
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_functor_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.fmap(|x| x), maybe);
    }

    #[test]
    fn prop_maybe_functor_composition(maybe in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(maybe.fmap(function1).fmap(function2), maybe.fmap(|x| function2(function1(x))));
    }

    #[test]
    fn prop_either_functor_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().fmap(|x| x), either);
    }

    #[test]
    fn prop_either_functor_composition(either in either_strategy()) {
        let function1 = |n: i32| i64::from(n) + 1;
        let function2 = |n: i64| n.to_string();
        prop_assert_eq!(
            either.clone().fmap(function1).fmap(function2),
            either.fmap(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_either_fmap_ref_matches_fmap(either in either_strategy()) {
        prop_assert_eq!(either.fmap_ref(|x| x.wrapping_neg()), either.fmap(i32::wrapping_neg));
    }

    #[test]
    fn prop_try_functor_identity(value in any::<Option<i32>>()) {
        let exception = Exception::msg("absent");
        let attempt = value.map_or_else(|| Try::failure(exception.clone()), Try::success);
        prop_assert_eq!(attempt.clone().fmap(|x| x), attempt);
    }
}

// =============================================================================
// Applicative
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_applicative_identity(maybe in maybe_strategy()) {
        let identity: Maybe<fn(i32) -> i32> = Maybe::pure(|x| x);
        prop_assert_eq!(identity.apply(maybe), maybe);
    }

    #[test]
    fn prop_maybe_applicative_homomorphism(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |x| x.wrapping_mul(5);
        let lifted: Maybe<fn(i32) -> i32> = Maybe::pure(function);
        prop_assert_eq!(lifted.apply(Maybe::pure(value)), Maybe::pure(function(value)));
    }

    #[test]
    fn prop_either_product_is_first_error(left in either_strategy(), right in either_strategy()) {
        let expected = match (&left, &right) {
            (Either::Success(a), Either::Success(b)) => Either::Success((*a, *b)),
            (Either::Error(error), _) | (Either::Success(_), Either::Error(error)) => Either::Error(error.clone()),
        };
        prop_assert_eq!(left.product(right), expected);
    }

    #[test]
    fn prop_maybe_monad_then_discards_value(maybe in maybe_strategy(), next in maybe_strategy()) {
        let expected = if maybe.is_some() { next } else { Maybe::None };
        prop_assert_eq!(maybe.then(next), expected);
    }
}

// =============================================================================
// Alternative
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_alternative_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(Maybe::<i32>::empty::<i32>().alt(maybe), maybe);
        prop_assert_eq!(maybe.alt(Maybe::<i32>::empty()), maybe);
    }

    #[test]
    fn prop_maybe_alternative_associativity(
        first in maybe_strategy(),
        second in maybe_strategy(),
        third in maybe_strategy()
    ) {
        prop_assert_eq!(first.alt(second).alt(third), first.alt(second.alt(third)));
    }

    #[test]
    fn prop_maybe_choice_is_first_present(items in prop::collection::vec(maybe_strategy(), 0..8)) {
        let expected = items.iter().copied().find(Maybe::is_some).unwrap_or(Maybe::None);
        prop_assert_eq!(Maybe::choice(items), expected);
    }

    #[test]
    fn prop_try_alternatively_keeps_success(value in any::<i32>()) {
        let fallback: Try<i32> = Try::failure(Exception::msg("unused"));
        prop_assert_eq!(Try::success(value).alternatively(fallback), Try::success(value));
    }

    #[test]
    fn prop_try_alternatively_after_failure_is_fallback(left in any::<Option<i32>>(), right in any::<Option<i32>>()) {
        let to_try = |value: Option<i32>, message: &'static str| {
            value.map_or_else(|| Try::failure(Exception::msg(message)), Try::success)
        };
        let left = to_try(left, "left");
        let right = to_try(right, "right");
        let expected = if left.is_success() { left.clone() } else { right.clone() };
        prop_assert_eq!(left.alternatively(right), expected);
    }

    #[test]
    fn prop_try_alternatively_is_associative(
        first in any::<Option<i32>>(),
        second in any::<Option<i32>>(),
        third in any::<Option<i32>>()
    ) {
        let exception = Exception::msg("shared");
        let to_try = |value: Option<i32>| value.map_or_else(|| Try::failure(exception.clone()), Try::success);
        let (first, second, third) = (to_try(first), to_try(second), to_try(third));
        prop_assert_eq!(
            first.clone().alternatively(second.clone()).alternatively(third.clone()),
            first.alternatively(second.alternatively(third))
        );
    }
}
