//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! The laws are exercised by the property tests in `tests/*_laws.rs`.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Maybe;
//! use carrier::typeclass::Monad;
//!
//! let safe_divide = |x: i32| Maybe::when(x != 0, || 100 / x);
//! assert_eq!(Maybe::pure(5).flat_map(safe_divide), Maybe::Some(20));
//! assert_eq!(Maybe::pure(0).flat_map(safe_divide), Maybe::None);
//! ```

use super::applicative::Applicative;
use crate::control::{Either, Maybe, Try};

/// A type class for applicatives whose next computation may depend on the
/// previous result.
pub trait Monad: Applicative {
    /// Chains a computation that depends on the current value.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    /// use carrier::typeclass::Monad;
    ///
    /// let first: Either<i32, &str> = Either::Error("stop");
    /// assert_eq!(first.then(Either::Success("next")), Either::Error("stop"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

impl<S, E: Clone> Monad for Either<S, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(S) -> Either<B, E>,
    {
        self.bind(function)
    }
}

impl<S> Monad for Try<S> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(S) -> Try<B>,
    {
        self.bind(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Exception;
    use rstest::rstest;

    #[rstest]
    fn maybe_then_none() {
        let none: Maybe<i32> = Maybe::None;
        assert_eq!(none.then(Maybe::pure("next")), Maybe::None);
    }

    #[rstest]
    fn either_and_then_alias() {
        let value: Either<i32, String> = Either::Success(4);
        assert_eq!(value.and_then(|x| Either::Success(x * 2)), Either::Success(8));
    }

    #[rstest]
    fn try_flat_map_keeps_first_failure() {
        let exception = Exception::msg("first");
        let value: Try<i32> = Try::failure(exception.clone());
        assert_eq!(value.flat_map(|x| Try::success(x + 1)), Try::failure(exception));
    }
}
