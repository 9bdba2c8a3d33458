//! Either type - a success or a declared failure.
//!
//! This module provides the `Either<S, E>` type, which represents a value
//! that is either a `Success(S)` or an `Error(E)`. Unlike `Result`, it comes
//! with the same combinator vocabulary as [`Maybe`] and [`Try`](super::Try):
//!
//! - `map` / `map_error` / `bimap` transform one or both sides
//! - `bind` chains fallible steps and stops at the first error
//! - `unify` collapses both sides into a single value
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Either;
//!
//! fn parse(input: &str) -> Either<i32, String> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::Success(42));
//!
//! let message = parse("x").unify(|n| n.to_string(), |error| format!("bad input: {error}"));
//! assert!(message.starts_with("bad input"));
//! ```

use super::exception::Exception;
use super::maybe::Maybe;

/// A value that is either a success or an error.
///
/// # Type Parameters
///
/// * `S` - The type of the success value
/// * `E` - The type of the error value
///
/// # Examples
///
/// ```rust
/// use carrier::control::Either;
///
/// let success: Either<i32, String> = Either::success(42);
/// let failure: Either<i32, String> = Either::error("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Success(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Error("error".to_string()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<S, E> {
    /// The success variant.
    Success(S),
    /// The error variant.
    Error(E),
}

impl<S, E> Either<S, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success value.
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates an error value.
    #[inline]
    pub const fn error(error: E) -> Self {
        Self::Error(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// let success: Either<i32, String> = Either::Success(42);
    /// assert!(success.is_success());
    ///
    /// let failure: Either<i32, String> = Either::Error("oops".to_string());
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is an `Error` value.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn success_ref(&self) -> Maybe<&S> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Error(_) => Maybe::None,
        }
    }

    /// Returns a reference to the error value, if any.
    #[inline]
    pub const fn error_ref(&self) -> Maybe<&E> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Error(error) => Maybe::Some(error),
        }
    }

    /// Converts into the success value, discarding any error.
    #[inline]
    pub fn into_success(self) -> Maybe<S> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Error(_) => Maybe::None,
        }
    }

    /// Converts into the error value, discarding any success.
    #[inline]
    pub fn into_error(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Error(error) => Maybe::Some(error),
        }
    }

    /// Converts from `&Either<S, E>` to `Either<&S, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&S, &E> {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Error(error) => Either::Error(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// let success: Either<i32, String> = Either::Success(21);
    /// assert_eq!(success.map(|x| x * 2), Either::Success(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(S) -> B,
    {
        match self {
            Self::Success(value) => Either::Success(function(value)),
            Self::Error(error) => Either::Error(error),
        }
    }

    /// Applies a function to the error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// let failure: Either<i32, &str> = Either::Error("oops");
    /// assert_eq!(failure.map_error(str::len), Either::Error(4));
    /// ```
    #[inline]
    pub fn map_error<G, F>(self, function: F) -> Either<S, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Error(error) => Either::Error(function(error)),
        }
    }

    /// Applies one function to the success value and another to the error.
    #[inline]
    pub fn bimap<B, G, F, H>(self, success_function: F, error_function: H) -> Either<B, G>
    where
        F: FnOnce(S) -> B,
        H: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Either::Success(success_function(value)),
            Self::Error(error) => Either::Error(error_function(error)),
        }
    }

    /// Chains a fallible computation; the first error short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// let checked_half = |x: i32| {
    ///     if x % 2 == 0 { Either::Success(x / 2) } else { Either::Error(format!("{x} is odd")) }
    /// };
    ///
    /// assert_eq!(Either::Success(8).bind(checked_half), Either::Success(4));
    /// assert_eq!(Either::Success(7).bind(checked_half), Either::Error("7 is odd".to_string()));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(S) -> Either<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Error(error) => Either::Error(error),
        }
    }

    /// Binds and then projects both success values into the result.
    #[inline]
    pub fn bind_with<B, C, F, P>(self, function: F, project: P) -> Either<C, E>
    where
        S: Clone,
        F: FnOnce(S) -> Either<B, E>,
        P: FnOnce(S, B) -> C,
    {
        self.bind(|a| function(a.clone()).map(|b| project(a, b)))
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<E, S> {
        match self {
            Self::Success(value) => Either::Error(value),
            Self::Error(error) => Either::Success(error),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Turns a success into an error when the predicate does not hold.
    ///
    /// `error_thunk` is only evaluated when the predicate fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// let positive = |value: Either<i32, &'static str>| value.filter_or(|x| *x > 0, || "not positive");
    /// assert_eq!(positive(Either::Success(3)), Either::Success(3));
    /// assert_eq!(positive(Either::Success(-3)), Either::Error("not positive"));
    /// ```
    #[inline]
    #[must_use]
    pub fn filter_or<P, F>(self, predicate: P, error_thunk: F) -> Self
    where
        P: FnOnce(&S) -> bool,
        F: FnOnce() -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Error(error_thunk())
                }
            }
            Self::Error(error) => Self::Error(error),
        }
    }

    /// Turns a success into an error when the predicate holds.
    #[inline]
    #[must_use]
    pub fn filter_not_or<P, F>(self, predicate: P, error_thunk: F) -> Self
    where
        P: FnOnce(&S) -> bool,
        F: FnOnce() -> E,
    {
        self.filter_or(|value| !predicate(value), error_thunk)
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns `self` if it is a success, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn alternatively(self, alternative: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Error(_) => alternative,
        }
    }

    /// Returns `self` if it is a success, otherwise evaluates `thunk`.
    ///
    /// The thunk is only evaluated for `Error`.
    #[inline]
    #[must_use]
    pub fn alternatively_with<F>(self, thunk: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Error(_) => thunk(),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Collapses both sides into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// let success: Either<i32, String> = Either::Success(42);
    /// assert_eq!(success.unify(|n| n.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn unify<T, F, G>(self, success_function: F, error_function: G) -> T
    where
        F: FnOnce(S) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Error(error) => error_function(error),
        }
    }

    /// Returns the success value or recovers one from the error.
    #[inline]
    pub fn get_or_else<F>(self, error_function: F) -> S
    where
        F: FnOnce(E) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Error(error) => error_function(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn get_or(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Error(_) => default,
        }
    }

    /// Converts into a `Maybe`, passing any error to `error_callback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::{Either, Maybe};
    ///
    /// let mut seen = Vec::new();
    /// let failure: Either<i32, &str> = Either::Error("lost");
    /// assert_eq!(failure.into_maybe(|error| seen.push(error)), Maybe::None);
    /// assert_eq!(seen, vec!["lost"]);
    /// ```
    #[inline]
    pub fn into_maybe<F>(self, error_callback: F) -> Maybe<S>
    where
        F: FnOnce(E),
    {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Error(error) => {
                error_callback(error);
                Maybe::None
            }
        }
    }

    // =========================================================================
    // Callbacks
    // =========================================================================

    /// Calls `callback` with the success value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn when_success<F>(self, callback: F) -> Self
    where
        F: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            callback(value);
        }
        self
    }

    /// Calls `callback` with the error value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn when_error<F>(self, callback: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Error(error) = &self {
            callback(error);
        }
        self
    }

    /// Runs exactly one of the two callbacks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// let mut log = Vec::new();
    /// Either::<i32, String>::Error("refused".to_string())
    ///     .match_with(|n| log.push(format!("got {n}")), |e| log.push(format!("failed: {e}")));
    /// assert_eq!(log, vec!["failed: refused".to_string()]);
    /// ```
    #[inline]
    pub fn match_with<OnSuccess, OnError>(self, on_success: OnSuccess, on_error: OnError)
    where
        OnSuccess: FnOnce(S),
        OnError: FnOnce(E),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Error(error) => on_error(error),
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the success value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Error` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// let success: Either<i32, String> = Either::Success(42);
    /// assert_eq!(success.unwrap_success(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Error(_) => panic!("called `Either::unwrap_success()` on an `Error` value"),
        }
    }

    /// Returns the error value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Either::unwrap_error()` on a `Success` value"),
            Self::Error(error) => error,
        }
    }
}

// =============================================================================
// Nested and Exception-based Operations
// =============================================================================

impl<S, E> Either<Either<S, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Either<S, E> {
        self.bind(|inner| inner)
    }
}

impl<S, E: Into<Exception>> Either<S, E> {
    /// Returns the success value or raises the error as an [`Exception`].
    ///
    /// # Panics
    ///
    /// Unwinds with the converted exception if this is an `Error` value; a
    /// surrounding `Try` boundary captures it.
    #[inline]
    pub fn get_or_raise(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Error(error) => error.into().raise(),
        }
    }
}

impl<S: Default, E> Either<S, E> {
    /// Returns the success value, or `S::default()` for an error.
    #[inline]
    pub fn get_or_default(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Error(_) => S::default(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<S, E> From<Result<S, E>> for Either<S, E> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(s)` becomes `Success(s)`, and `Err(e)` becomes `Error(e)`.
    #[inline]
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<S, E> From<Either<S, E>> for Result<S, E> {
    /// Converts an `Either` to a `Result`.
    #[inline]
    fn from(either: Either<S, E>) -> Self {
        match either {
            Either::Success(value) => Ok(value),
            Either::Error(error) => Err(error),
        }
    }
}
