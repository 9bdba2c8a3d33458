//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For `Try`, both laws hold for functions that do not panic. A panicking
//! function produces a failure holding the raised exception on both sides.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Maybe;
//! use carrier::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::pure(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::Some("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::None;
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::None);
//! ```

use super::higher::TypeConstructor;
use crate::control::{Either, Maybe, Try};

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use carrier::control::Either;
/// use carrier::typeclass::Functor;
///
/// let value: Either<i32, String> = Either::Success(5);
/// assert_eq!(value.fmap(|n| n * 2), Either::Success(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    /// use carrier::typeclass::Functor;
    ///
    /// let name = Maybe::pure("hello".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Maybe::Some(5));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Either<S, E> Implementation
// =============================================================================

impl<S, E: Clone> Functor for Either<S, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(S) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<B, E>
    where
        F: FnOnce(&S) -> B,
    {
        match self {
            Self::Success(value) => Either::Success(function(value)),
            Self::Error(error) => Either::Error(error.clone()),
        }
    }
}

// =============================================================================
// Try<S> Implementation
// =============================================================================

impl<S> Functor for Try<S> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(S) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Try<B>
    where
        F: FnOnce(&S) -> B,
    {
        match self {
            Self::Success(value) => Try::catching(|| function(value)),
            Self::Failure(exception) => Try::Failure(exception.clone()),
        }
    }
}
