//! Helper functions used as arguments to the combinators.
//!
//! - [`identity`] (alias [`id`]): returns its argument unchanged
//! - [`noop`]: accepts a value and does nothing
//! - [`compose`] (alias [`comp`]): right-to-left function composition

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition and turns a
/// traversal into a sequence:
///
/// ```
/// use carrier::compose::identity;
/// use carrier::control::Maybe;
/// use carrier::traverse::Traverse;
///
/// let values = vec![Maybe::pure(1), Maybe::pure(2)];
/// assert_eq!(values.traverse_maybe(identity), Maybe::Some(vec![1, 2]));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Short alias for [`identity`].
///
/// # Examples
///
/// ```
/// use carrier::compose::id;
/// use carrier::control::Either;
///
/// let value: Either<i32, i32> = Either::Error(3);
/// assert_eq!(value.unify(id, id), 3);
/// ```
#[inline]
pub fn id<T>(value: T) -> T {
    value
}

/// Ignores its argument.
///
/// Handy as a callback for `when_*` taps or `into_maybe`.
///
/// # Examples
///
/// ```
/// use carrier::compose::noop;
/// use carrier::control::{Either, Maybe};
///
/// let failure: Either<i32, String> = Either::Error("ignored".to_string());
/// assert_eq!(failure.into_maybe(noop), Maybe::None);
/// ```
#[inline]
pub fn noop<T>(_value: T) {}

/// Composes two functions right-to-left: `compose(f, g)(x) == f(g(x))`.
///
/// # Laws
///
/// - **Left identity**: `compose(identity, f) == f`
/// - **Right identity**: `compose(f, identity) == f`
///
/// # Examples
///
/// ```
/// use carrier::compose::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// let composed = compose(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Short alias for [`compose`].
#[inline]
pub fn comp<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    compose(outer, inner)
}
