//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<A>` type, which represents either a
//! present value (`Some(A)`) or nothing (`None`). Every operation returns a
//! new container; a `Maybe` is never mutated by a combinator.
//!
//! # Absent payloads
//!
//! `Maybe::pure` always produces `Some`. The only place where a host-level
//! absence is normalized into `Maybe::None` is [`Maybe::from_nullable`] (and the
//! equivalent `From<Option<A>>` impl). A `Maybe<Option<A>>` built with `pure`
//! keeps `Some(None)` literally, which is the permissive behaviour when a caller
//! really needs to carry an inner absence.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Maybe;
//!
//! let present = Maybe::pure(42).map(|x| x + 1);
//! assert_eq!(present, Maybe::Some(43));
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(absent.map(|x| x + 1), Maybe::None);
//!
//! // Lazy fallback is never evaluated when a value is present
//! let value = Maybe::pure(1).or_else(|| panic!("not evaluated"));
//! assert_eq!(value, Maybe::Some(1));
//! ```

use super::either::Either;
use super::exception::Exception;

/// A value that may be absent.
///
/// # Type Parameters
///
/// * `A` - The type of the payload
///
/// # Examples
///
/// ```rust
/// use carrier::control::Maybe;
///
/// let name: Maybe<&str> = Maybe::from_nullable(Some("ferris"));
/// assert_eq!(name.map(str::len).get_or(0), 6);
///
/// let missing: Maybe<&str> = Maybe::from_nullable(None);
/// assert_eq!(missing.map(str::len).get_or(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    #[default]
    None,
    /// A present value.
    Some(A),
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value. Always produces `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// assert_eq!(Maybe::pure(42), Maybe::Some(42));
    /// ```
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Some(value)
    }

    /// Alias for [`Maybe::pure`].
    #[inline]
    pub const fn some(value: A) -> Self {
        Self::Some(value)
    }

    /// The absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Normalizes a host-level optional value: `None` becomes `Maybe::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(1)), Maybe::Some(1));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::None);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Produces `Some(thunk())` when `condition` holds.
    ///
    /// The thunk is not evaluated when `condition` is false.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// assert_eq!(Maybe::when(true, || "yes"), Maybe::Some("yes"));
    /// assert_eq!(Maybe::when(false, || -> &str { panic!("never") }), Maybe::None);
    /// ```
    #[inline]
    pub fn when<F>(condition: bool, thunk: F) -> Self
    where
        F: FnOnce() -> A,
    {
        if condition { Self::Some(thunk()) } else { Self::None }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// This is the truthiness of a `Maybe`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if a value is present and equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// assert!(Maybe::pure(3).contains(&3));
    /// assert!(!Maybe::pure(3).contains(&4));
    /// assert!(!Maybe::<i32>::none().contains(&3));
    /// ```
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        A: PartialEq<U>,
    {
        match self {
            Self::Some(inner) => inner == value,
            Self::None => false,
        }
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<A>` to `Maybe<&mut A>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut A> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns an iterator over the possibly present value.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        Option::from(self.as_ref()).into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the payload if present.
    ///
    /// The function is never invoked for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// assert_eq!(Maybe::pure(2).map(|x| x * 10), Maybe::Some(20));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 10), Maybe::None);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself be absent, flattening one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// let half = |x: i32| Maybe::when(x % 2 == 0, || x / 2);
    /// assert_eq!(Maybe::pure(8).bind(half), Maybe::Some(4));
    /// assert_eq!(Maybe::pure(7).bind(half), Maybe::None);
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Binds and then projects both payloads into the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// let result = Maybe::pure(2).bind_with(|x| Maybe::pure(x * 3), |x, y| x + y);
    /// assert_eq!(result, Maybe::Some(8));
    /// ```
    #[inline]
    pub fn bind_with<B, C, F, P>(self, function: F, project: P) -> Maybe<C>
    where
        A: Clone,
        F: FnOnce(A) -> Maybe<B>,
        P: FnOnce(A, B) -> C,
    {
        self.bind(|a| function(a.clone()).map(|b| project(a, b)))
    }

    /// Keeps the value only if the predicate holds.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if let Self::Some(value) = self
            && predicate(&value)
        {
            return Self::Some(value);
        }
        Self::None
    }

    /// Keeps the value only if the predicate does not hold.
    #[inline]
    #[must_use]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Pairs two values; `Some` only if both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// assert_eq!(Maybe::pure(1).zip(Maybe::pure("a")), Maybe::Some((1, "a")));
    /// assert_eq!(Maybe::pure(1).zip(Maybe::<&str>::none()), Maybe::None);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Maybe<B>) -> Maybe<(A, B)> {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    /// Returns `self` if present, otherwise evaluates `thunk`.
    ///
    /// The thunk is not evaluated when a value is present.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, thunk: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => thunk(),
        }
    }

    // =========================================================================
    // Callbacks
    // =========================================================================

    /// Calls `callback` with a reference to the value if present.
    #[inline]
    #[must_use]
    pub fn when_some<F>(self, callback: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Some(value) = &self {
            callback(value);
        }
        self
    }

    /// Calls `callback` if no value is present.
    #[inline]
    #[must_use]
    pub fn when_none<F>(self, callback: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            callback();
        }
        self
    }

    /// Runs exactly one of the two callbacks.
    #[inline]
    pub fn match_with<S, N>(self, on_some: S, on_none: N)
    where
        S: FnOnce(A),
        N: FnOnce(),
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// assert_eq!(Maybe::pure(3).fold(|| "none".to_string(), |x| x.to_string()), "3");
    /// assert_eq!(Maybe::<i32>::none().fold(|| "none".to_string(), |x| x.to_string()), "none");
    /// ```
    #[inline]
    pub fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value or `default`.
    #[inline]
    pub fn get_or(self, default: A) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value or computes one.
    ///
    /// The thunk is not evaluated when a value is present.
    #[inline]
    pub fn get_or_else<F>(self, thunk: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Some(value) => value,
            Self::None => thunk(),
        }
    }

    /// Returns the value or raises the exception produced by `factory`.
    ///
    /// The raised exception unwinds to the nearest `Try` capture boundary,
    /// which stores it unchanged.
    ///
    /// # Panics
    ///
    /// Unwinds with the produced [`Exception`] if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::{Exception, Maybe, Try};
    ///
    /// let captured = Try::catching(|| Maybe::<i32>::none().get_or_raise(|| Exception::msg("missing")));
    /// assert_eq!(captured.into_failure().map(|e| e.to_string()), Maybe::Some("missing".to_string()));
    /// ```
    #[inline]
    pub fn get_or_raise<F>(self, factory: F) -> A
    where
        F: FnOnce() -> Exception,
    {
        match self {
            Self::Some(value) => value,
            Self::None => factory().raise(),
        }
    }

    /// Converts into a `Result`, computing the error lazily.
    ///
    /// # Errors
    ///
    /// Returns the produced error if no value is present.
    #[inline]
    pub fn ok_or_else<E, F>(self, factory: F) -> Result<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(factory()),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics if no value is present. Check with [`Maybe::is_some`] first.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if no value is present.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Either`, using `error` when no value is present.
    #[inline]
    pub fn into_either<E>(self, error: E) -> Either<A, E> {
        match self {
            Self::Some(value) => Either::Success(value),
            Self::None => Either::Error(error),
        }
    }

    /// Converts into an `Either`, computing the error lazily.
    #[inline]
    pub fn into_either_with<E, F>(self, factory: F) -> Either<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Either::Success(value),
            Self::None => Either::Error(factory()),
        }
    }

    /// Distributes the `Maybe` over an iterable result.
    ///
    /// `Some(a)` yields every item of `function(a)` wrapped in `Some`;
    /// `None` yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// let spread = Maybe::pure(3).traverse_iter(|n| 0..n);
    /// assert_eq!(spread, vec![Maybe::Some(0), Maybe::Some(1), Maybe::Some(2)]);
    ///
    /// let empty = Maybe::<i32>::none().traverse_iter(|n| 0..n);
    /// assert!(empty.is_empty());
    /// ```
    pub fn traverse_iter<B, I, F>(self, function: F) -> Vec<Maybe<B>>
    where
        F: FnOnce(A) -> I,
        I: IntoIterator<Item = B>,
    {
        match self {
            Self::Some(value) => function(value).into_iter().map(Maybe::Some).collect(),
            Self::None => Vec::new(),
        }
    }
}

impl Maybe<()> {
    /// `Some(())` when `condition` holds, `None` otherwise.
    #[inline]
    pub const fn when_true(condition: bool) -> Self {
        if condition { Self::Some(()) } else { Self::None }
    }
}

impl<A: Default> Maybe<A> {
    /// Returns the value or `A::default()`.
    #[inline]
    pub fn get_or_default(self) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => A::default(),
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(value: Maybe<A>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}
