//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value, and
//! `map2`/`map3`, which combine several containers with one function. For
//! arities beyond three see the builders in [`crate::applicative`].
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Maybe;
//! use carrier::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()> as Applicative>::pure(42);
//! assert_eq!(lifted, Maybe::Some(42));
//!
//! let sum = Maybe::pure(1).map2(Maybe::pure(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Some(3));
//! ```

use super::functor::Functor;
use crate::control::{Either, Maybe, Try};

/// A type class for functors that can lift values and combine containers.
///
/// Combination short-circuits in argument order: the combining function runs
/// only when every container holds a value, and for `Either` and `Try` the
/// first failure is returned.
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    /// use carrier::typeclass::Applicative;
    ///
    /// let first: Either<i32, &str> = Either::Error("first");
    /// let second: Either<i32, &str> = Either::Error("second");
    /// assert_eq!(first.map2(second, |a, b| a + b), Either::Error("first"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value, requiring both to be present.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value, requiring both to be present.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in the container to a value held in `other`.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::Some(function(a, b, c)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Either<S, E> Implementation
// =============================================================================

impl<S, E: Clone> Applicative for Either<S, E> {
    #[inline]
    fn pure<B>(value: B) -> Either<B, E> {
        Either::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<B, E>, function: F) -> Either<C, E>
    where
        F: FnOnce(S, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Either::Success(b)) => Either::Success(function(a, b)),
            (Self::Error(error), _) | (Self::Success(_), Either::Error(error)) => {
                Either::Error(error)
            }
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<B, E>,
        third: Either<C, E>,
        function: F,
    ) -> Either<D, E>
    where
        F: FnOnce(S, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<B, E>) -> Either<Output, E>
    where
        S: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Try<S> Implementation
// =============================================================================

impl<S> Applicative for Try<S> {
    #[inline]
    fn pure<B>(value: B) -> Try<B> {
        Try::Success(value)
    }

    fn map2<B, C, F>(self, other: Try<B>, function: F) -> Try<C>
    where
        F: FnOnce(S, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Try::Success(b)) => Try::catching(|| function(a, b)),
            (Self::Failure(exception), _) | (Self::Success(_), Try::Failure(exception)) => {
                Try::Failure(exception)
            }
        }
    }

    fn map3<B, C, D, F>(self, second: Try<B>, third: Try<C>, function: F) -> Try<D>
    where
        F: FnOnce(S, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    fn apply<B, Output>(self, other: Try<B>) -> Try<Output>
    where
        S: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Exception;
    use rstest::rstest;

    #[rstest]
    fn maybe_map3_with_none() {
        let result = Maybe::pure(1).map3(Maybe::<i32>::None, Maybe::pure(3), |a, b, c| a + b + c);
        assert_eq!(result, Maybe::None);
    }

    #[rstest]
    fn maybe_apply_with_function() {
        let function: Maybe<fn(i32) -> i32> = Maybe::pure(|x| x * 2);
        assert_eq!(function.apply(Maybe::pure(21)), Maybe::Some(42));
    }

    #[rstest]
    fn either_map3_returns_first_error() {
        let first: Either<i32, &str> = Either::Success(1);
        let second: Either<i32, &str> = Either::Error("second");
        let third: Either<i32, &str> = Either::Error("third");
        assert_eq!(first.map3(second, third, |a, b, c| a + b + c), Either::Error("second"));
    }

    #[rstest]
    fn either_product_success() {
        let left: Either<i32, String> = Either::Success(1);
        assert_eq!(left.product(Either::Success("a")), Either::Success((1, "a")));
    }

    #[rstest]
    fn try_map2_returns_first_failure() {
        let first = Exception::msg("first");
        let second = Exception::msg("second");
        let result = Try::<i32>::failure(first.clone()).map2(Try::<i32>::failure(second), |a, b| a + b);
        assert_eq!(result, Try::failure(first));
    }

    #[rstest]
    fn try_map2_captures_panic_in_function() {
        let result = Try::success(1).map2(Try::success(2), |_, _| -> i32 { panic!("combine") });
        assert!(result.is_failure());
    }
}
