//! Traversal and sequencing over finite iterables.
//!
//! [`Traverse`] applies a container-returning function to every element of an
//! iterable and collects the results inside a single container:
//!
//! - every element produced a value: the container holds all values, in order
//! - some element produced an absence or failure: the first one is returned
//!
//! Elements are processed strictly in order and the iteration stops at the
//! first absence or failure; the function is never invoked for later elements.
//!
//! [`MaybeIteratorExt`] adds search helpers that answer with a [`Maybe`]
//! instead of panicking or returning `Option`.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::{Either, Maybe};
//! use carrier::traverse::Traverse;
//!
//! let parsed = ["1", "2", "3"].traverse_maybe(|s| Maybe::from(s.parse::<i32>().ok()));
//! assert_eq!(parsed, Maybe::Some(vec![1, 2, 3]));
//!
//! let checked = vec![1, -2, 3].traverse_either(|x| {
//!     if x > 0 { Either::Success(x) } else { Either::Error(format!("{x} is negative")) }
//! });
//! assert_eq!(checked, Either::Error("-2 is negative".to_string()));
//! ```

mod search;

pub use search::MaybeIteratorExt;

use crate::control::{Either, Maybe, Try, capture};

/// Traversal of any finite iterable with a container-returning function.
///
/// Blanket-implemented for every [`IntoIterator`]; only forward iteration is
/// required.
pub trait Traverse: IntoIterator + Sized {
    /// Applies `function` to each element, collecting into `Maybe<Vec<B>>`.
    ///
    /// Returns `None` at the first element for which `function` returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    /// use carrier::traverse::Traverse;
    ///
    /// let halves = vec![2, 4, 6].traverse_maybe(|x| Maybe::when(x % 2 == 0, || x / 2));
    /// assert_eq!(halves, Maybe::Some(vec![1, 2, 3]));
    ///
    /// let odd = vec![2, 3, 6].traverse_maybe(|x| Maybe::when(x % 2 == 0, || x / 2));
    /// assert_eq!(odd, Maybe::None);
    /// ```
    fn traverse_maybe<B, F>(self, mut function: F) -> Maybe<Vec<B>>
    where
        F: FnMut(Self::Item) -> Maybe<B>,
    {
        let mut collected = Vec::new();
        for (index, item) in self.into_iter().enumerate() {
            match function(item) {
                Maybe::Some(value) => collected.push(value),
                Maybe::None => {
                    tracing::trace!(index, "traversal stopped at absent element");
                    return Maybe::None;
                }
            }
        }
        Maybe::Some(collected)
    }

    /// Applies `function` to each element, collecting into `Either<Vec<B>, E>`.
    ///
    /// Returns the first error; later elements are not visited.
    fn traverse_either<B, E, F>(self, mut function: F) -> Either<Vec<B>, E>
    where
        F: FnMut(Self::Item) -> Either<B, E>,
    {
        let mut collected = Vec::new();
        for (index, item) in self.into_iter().enumerate() {
            match function(item) {
                Either::Success(value) => collected.push(value),
                Either::Error(error) => {
                    tracing::trace!(index, "traversal stopped at error");
                    return Either::Error(error);
                }
            }
        }
        Either::Success(collected)
    }

    /// Applies `function` to each element, collecting into `Try<Vec<B>>`.
    ///
    /// `function` runs inside a capture boundary: a panic becomes the failure
    /// of that element. The first failure stops the traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Try;
    /// use carrier::traverse::Traverse;
    ///
    /// let quotients = vec![1, 2, 0, 4].traverse_try(|x: i32| Try::success(12 / x));
    /// assert!(quotients.is_failure());
    /// ```
    fn traverse_try<B, F>(self, mut function: F) -> Try<Vec<B>>
    where
        F: FnMut(Self::Item) -> Try<B>,
    {
        let mut collected = Vec::new();
        for (index, item) in self.into_iter().enumerate() {
            match capture(|| function(item)) {
                Ok(Try::Success(value)) => collected.push(value),
                Ok(Try::Failure(exception)) | Err(exception) => {
                    tracing::trace!(index, %exception, "traversal stopped at failure");
                    return Try::Failure(exception);
                }
            }
        }
        Try::Success(collected)
    }

    /// Turns an iterable of `Maybe`s inside out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    /// use carrier::traverse::Traverse;
    ///
    /// assert_eq!(vec![Maybe::pure(1), Maybe::pure(2)].sequence_maybe(), Maybe::Some(vec![1, 2]));
    /// assert_eq!(vec![Maybe::pure(1), Maybe::None].sequence_maybe(), Maybe::None);
    /// ```
    fn sequence_maybe<A>(self) -> Maybe<Vec<A>>
    where
        Self: IntoIterator<Item = Maybe<A>>,
    {
        self.traverse_maybe(|maybe| maybe)
    }

    /// Turns an iterable of `Either`s inside out, keeping the first error.
    fn sequence_either<A, E>(self) -> Either<Vec<A>, E>
    where
        Self: IntoIterator<Item = Either<A, E>>,
    {
        self.traverse_either(|either| either)
    }

    /// Turns an iterable of `Try`s inside out, keeping the first failure.
    fn sequence_try<A>(self) -> Try<Vec<A>>
    where
        Self: IntoIterator<Item = Try<A>>,
    {
        self.traverse_try(|attempt| attempt)
    }

    /// Runs `function` for its effect on each element, stopping at the first error.
    fn for_each_either<E, F>(self, function: F) -> Either<(), E>
    where
        F: FnMut(Self::Item) -> Either<(), E>,
    {
        self.traverse_either(function).map(|_| ())
    }
}

impl<I: IntoIterator> Traverse for I {}
