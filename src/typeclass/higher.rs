//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Either<_, E>` as type constructors
//! directly. The [`TypeConstructor`] trait uses a generic associated type to
//! name "the same container, applied to another payload type", which is what
//! `Functor`, `Applicative` and `Monad` are defined in terms of.
//!
//! # Example
//!
//! ```rust
//! use carrier::control::Maybe;
//! use carrier::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Maybe<String> = emptied(Maybe::pure(42));
//! assert_eq!(none_string, Maybe::None);
//! ```

use crate::control::{Either, Maybe, Try};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The payload type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The payload type. For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Either<i32, String>`, `WithType<bool>` is `Either<bool, String>`:
    /// the error side is part of the constructor.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<S, E> TypeConstructor for Either<S, E> {
    type Inner = S;
    type WithType<B> = Either<B, E>;
}

impl<S> TypeConstructor for Try<S> {
    type Inner = S;
    type WithType<B> = Try<B>;
}
