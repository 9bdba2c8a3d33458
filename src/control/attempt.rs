//! Try type - a computation whose panics are captured as data.
//!
//! `Try<S>` is either a `Success(S)` or a `Failure(Exception)`. The functions
//! passed to [`Try::map`], [`Try::bind`] and [`Try::catching`] run inside a
//! capture boundary: if they panic, or raise an [`Exception`], the unwind is
//! stopped and turned into a `Failure`.
//!
//! A raised `Exception` is stored as-is, so it can be compared by identity with
//! the exception that was raised. Any other panic payload becomes a new message
//! exception.
//!
//! # Panic hook
//!
//! Capturing a panic does not silence it. A `panic!` (or an `unwrap` on a bad
//! value) inside the boundary still runs the process panic hook, which by
//! default prints `thread '…' panicked at …` to stderr before the `Failure` is
//! produced. For failures that are expected, return them through
//! [`Try::try_map`] or raise them with [`Exception::raise`]: neither runs the
//! hook.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::{Exception, Try};
//!
//! let parsed = Try::success("42").map(|s| s.parse::<i32>().unwrap());
//! assert_eq!(parsed, Try::success(42));
//!
//! let broken = Try::success("x").map(|s| s.parse::<i32>().unwrap());
//! assert!(broken.is_failure());
//!
//! let reason = Exception::msg("no quota left");
//! let raised = reason.clone();
//! let refused: Try<i32> = Try::success(1).bind(move |_| raised.raise());
//! assert_eq!(refused, Try::failure(reason));
//! ```

use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};

use super::either::Either;
use super::exception::Exception;
use super::maybe::Maybe;

/// Runs `thunk`, converting any unwind into an [`Exception`].
pub(crate) fn capture<A, F>(thunk: F) -> Result<A, Exception>
where
    F: FnOnce() -> A,
{
    panic::catch_unwind(AssertUnwindSafe(thunk)).map_err(|payload| {
        let exception = Exception::from_panic(payload);
        tracing::debug!(%exception, "captured panic as Try failure");
        exception
    })
}

/// A successful value or a captured exception.
///
/// Two `Success` values are equal when their payloads are equal. Two `Failure`
/// values are equal only when they hold the same exception.
///
/// # Examples
///
/// ```rust
/// use carrier::control::Try;
///
/// let result = Try::catching(|| 10 / 2).map(|x| x + 1);
/// assert_eq!(result, Try::success(6));
/// ```
#[derive(Clone, Debug)]
pub enum Try<S> {
    /// The computation produced a value.
    Success(S),
    /// The computation raised an exception.
    Failure(Exception),
}

impl<S> Try<S> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success value.
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failure value.
    #[inline]
    pub const fn failure(exception: Exception) -> Self {
        Self::Failure(exception)
    }

    /// Runs `thunk` inside a capture boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Try;
    ///
    /// let failed: Try<i32> = Try::catching(|| panic!("gave up"));
    /// assert_eq!(failed.into_failure().map(|e| e.to_string()).get_or_default(), "gave up");
    /// ```
    pub fn catching<F>(thunk: F) -> Self
    where
        F: FnOnce() -> S,
    {
        match capture(thunk) {
            Ok(value) => Self::Success(value),
            Err(exception) => Self::Failure(exception),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn success_ref(&self) -> Maybe<&S> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Returns a reference to the captured exception, if any.
    #[inline]
    pub const fn failure_ref(&self) -> Maybe<&Exception> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Failure(exception) => Maybe::Some(exception),
        }
    }

    /// Converts into the success value, discarding any exception.
    #[inline]
    pub fn into_success(self) -> Maybe<S> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into the captured exception, if any.
    #[inline]
    pub fn into_failure(self) -> Maybe<Exception> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Failure(exception) => Maybe::Some(exception),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value inside a capture boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Try;
    ///
    /// assert_eq!(Try::success(2).map(|x| x * 3), Try::success(6));
    ///
    /// let divided = Try::success(0).map(|x: i32| 10 / x);
    /// assert!(divided.is_failure());
    /// ```
    pub fn map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(S) -> B,
    {
        match self {
            Self::Success(value) => Try::catching(|| function(value)),
            Self::Failure(exception) => Try::Failure(exception),
        }
    }

    /// Chains a computation inside a capture boundary.
    ///
    /// A panic while producing the inner `Try` becomes its failure.
    pub fn bind<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(S) -> Try<B>,
    {
        match self {
            Self::Success(value) => capture(|| function(value)).unwrap_or_else(Try::Failure),
            Self::Failure(exception) => Try::Failure(exception),
        }
    }

    /// Binds and then projects both success values into the result.
    pub fn bind_with<B, C, F, P>(self, function: F, project: P) -> Try<C>
    where
        S: Clone,
        F: FnOnce(S) -> Try<B>,
        P: FnOnce(S, B) -> C,
    {
        self.bind(|a| function(a.clone()).map(|b| project(a, b)))
    }

    /// Applies a `Result`-returning function inside a capture boundary.
    ///
    /// An `Err` is converted into the failure's exception.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Try;
    ///
    /// let parsed = Try::success("17").try_map(str::parse::<u8>);
    /// assert_eq!(parsed, Try::success(17));
    ///
    /// let overflow = Try::success("300").try_map(str::parse::<u8>);
    /// assert!(overflow.is_failure());
    /// ```
    pub fn try_map<B, E, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(S) -> Result<B, E>,
        E: Into<Exception>,
    {
        match self {
            Self::Success(value) => match capture(|| function(value)) {
                Ok(Ok(mapped)) => Try::Success(mapped),
                Ok(Err(error)) => Try::Failure(error.into()),
                Err(exception) => Try::Failure(exception),
            },
            Self::Failure(exception) => Try::Failure(exception),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Turns a success into a failure when the predicate does not hold.
    ///
    /// The predicate runs inside a capture boundary. `exception_thunk` is only
    /// evaluated when the predicate fails.
    #[must_use]
    pub fn filter_or<P, F>(self, predicate: P, exception_thunk: F) -> Self
    where
        P: FnOnce(&S) -> bool,
        F: FnOnce() -> Exception,
    {
        match self {
            Self::Success(value) => match capture(|| predicate(&value)) {
                Ok(true) => Self::Success(value),
                Ok(false) => Self::Failure(exception_thunk()),
                Err(exception) => Self::Failure(exception),
            },
            Self::Failure(exception) => Self::Failure(exception),
        }
    }

    /// Turns a success into a failure when the predicate holds.
    #[must_use]
    pub fn filter_not_or<P, F>(self, predicate: P, exception_thunk: F) -> Self
    where
        P: FnOnce(&S) -> bool,
        F: FnOnce() -> Exception,
    {
        self.filter_or(|value| !predicate(value), exception_thunk)
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
            Self::Failure(_) => alternative,
        }
    }

    /// Returns `self` if it is a success, otherwise evaluates `thunk`.
    #[inline]
    #[must_use]
    pub fn alternatively_with<F>(self, thunk: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => thunk(),
        }
    }

    /// Recovers from a failure inside a capture boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::{Exception, Try};
    ///
    /// let recovered = Try::<usize>::failure(Exception::msg("lost")).recover(|e| e.to_string().len());
    /// assert_eq!(recovered, Try::success(4));
    /// ```
    #[must_use]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Exception) -> S,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(exception) => Self::catching(|| function(exception)),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Collapses both sides into a single value.
    #[inline]
    pub fn unify<T, F, G>(self, success_function: F, failure_function: G) -> T
    where
        F: FnOnce(S) -> T,
        G: FnOnce(Exception) -> T,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(exception) => failure_function(exception),
        }
    }

    /// Returns the success value or computes one from the exception.
    #[inline]
    pub fn get_or_else<F>(self, failure_function: F) -> S
    where
        F: FnOnce(Exception) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(exception) => failure_function(exception),
        }
    }

    /// Returns the success value or re-raises the captured exception.
    ///
    /// # Panics
    ///
    /// Unwinds with the very same exception for a `Failure`.
    #[inline]
    pub fn get_or_raise(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(exception) => exception.raise(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(exception) => {
                panic!("called `Try::unwrap()` on a `Failure` value: {exception}")
            }
        }
    }

    /// Returns the captured exception.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> Exception {
        match self {
            Self::Success(_) => panic!("called `Try::unwrap_failure()` on a `Success` value"),
            Self::Failure(exception) => exception,
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

    /// Calls `callback` with the exception and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn when_failure<F>(self, callback: F) -> Self
    where
        F: FnOnce(&Exception),
    {
        if let Self::Failure(exception) = &self {
            callback(exception);
        }
        self
    }

    /// Runs exactly one of the two callbacks.
    ///
    /// The callbacks run outside the capture boundary.
    #[inline]
    pub fn match_with<OnSuccess, OnFailure>(self, on_success: OnSuccess, on_failure: OnFailure)
    where
        OnSuccess: FnOnce(S),
        OnFailure: FnOnce(Exception),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(exception) => on_failure(exception),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `Maybe`, passing any exception to `callback`.
    #[inline]
    pub fn into_maybe<F>(self, callback: F) -> Maybe<S>
    where
        F: FnOnce(Exception),
    {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(exception) => {
                callback(exception);
                Maybe::None
            }
        }
    }

    /// Converts into an `Either` holding the exception on the error side.
    #[inline]
    pub fn into_either(self) -> Either<S, Exception> {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Failure(exception) => Either::Error(exception),
        }
    }

    /// Converts into an `Either`, mapping the exception to an error value.
    #[inline]
    pub fn into_either_with<E, F>(self, function: F) -> Either<S, E>
    where
        F: FnOnce(Exception) -> E,
    {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Failure(exception) => Either::Error(function(exception)),
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the captured exception for a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<S, Exception> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(exception) => Err(exception),
        }
    }

    /// Distributes the `Try` over an iterable result.
    ///
    /// A success yields every item of `function(value)` as a success. A
    /// failure, or a panic inside `function`, yields a single failure.
    pub fn traverse_iter<B, I, F>(self, function: F) -> Vec<Try<B>>
    where
        F: FnOnce(S) -> I,
        I: IntoIterator<Item = B>,
    {
        match self.map(function) {
            Try::Success(items) => items.into_iter().map(Try::Success).collect(),
            Try::Failure(exception) => vec![Try::Failure(exception)],
        }
    }
}

impl<S> Try<Try<S>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Try<S> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(exception) => Try::Failure(exception),
        }
    }
}

// =============================================================================
// Equality and Hashing
// =============================================================================

impl<S: PartialEq> PartialEq for Try<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => left == right,
            (Self::Failure(left), Self::Failure(right)) => left.same_as(right),
            _ => false,
        }
    }
}

impl<S: Eq> Eq for Try<S> {}

impl<S: Hash> Hash for Try<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Success(value) => value.hash(state),
            Self::Failure(exception) => exception.hash(state),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<S> From<Exception> for Try<S> {
    #[inline]
    fn from(exception: Exception) -> Self {
        Self::Failure(exception)
    }
}

impl<S, E: Into<Exception>> From<Result<S, E>> for Try<S> {
    #[inline]
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}
