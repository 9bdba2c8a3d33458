//! Alternative type class - choice between computations.
//!
//! `Alternative` extends `Applicative` with an empty element and a choice
//! operation: `alt` keeps the first container that holds a value.
//!
//! # Laws
//!
//! ```text
//! empty.alt(x) == x
//! x.alt(empty) == x
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! `Either` has no instance: there is no error value to build `empty` from.
//! Use [`Either::alternatively`](crate::control::Either::alternatively) instead.
//!
//! `Try` has no instance either. Failures compare by exception identity, so no
//! single `empty` failure is a right identity for every failure. Use
//! [`Try::alternatively`](crate::control::Try::alternatively) instead.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Maybe;
//! use carrier::typeclass::Alternative;
//!
//! let first: Maybe<i32> = Maybe::None;
//! assert_eq!(first.alt(Maybe::pure(42)), Maybe::Some(42));
//! assert_eq!(Maybe::pure(1).alt(Maybe::pure(2)), Maybe::Some(1));
//! ```

use super::applicative::Applicative;
use crate::control::Maybe;

/// A type class for applicative functors with a choice operation.
pub trait Alternative: Applicative {
    /// The identity element for [`Alternative::alt`].
    fn empty<A>() -> Self::WithType<A>;

    /// Returns `self` if it holds a value, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Lifts a boolean: `pure(())` when `condition` holds, `empty` otherwise.
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Never fails: an empty container becomes a present `Maybe::None`.
    fn optional(self) -> Self::WithType<Maybe<Self::Inner>>
    where
        Self: Sized;

    /// Returns the first alternative that holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    /// use carrier::typeclass::Alternative;
    ///
    /// let candidates = vec![Maybe::None, Maybe::pure(2), Maybe::pure(3)];
    /// assert_eq!(Maybe::choice(candidates), Maybe::Some(2));
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Maybe<A> {
    #[inline]
    fn empty<B>() -> Maybe<B> {
        Maybe::None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn optional(self) -> Maybe<Self> {
        Maybe::Some(self)
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::is_some)
            .unwrap_or(Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, Maybe::Some(()))]
    #[case(false, Maybe::None)]
    fn maybe_guard(#[case] condition: bool, #[case] expected: Maybe<()>) {
        assert_eq!(<Maybe<()>>::guard(condition), expected);
    }

    #[rstest]
    fn maybe_optional_of_none_is_present() {
        let none: Maybe<i32> = Maybe::None;
        assert_eq!(none.optional(), Maybe::Some(Maybe::None));
    }
}
