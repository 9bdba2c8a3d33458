//! Type class traits shared by the containers.
//!
//! The containers in [`crate::control`] expose their combinators as inherent
//! methods. This module states the common algebraic contract as traits, so
//! code can be written once for every container:
//!
//! - [`Functor`]: mapping over the payload
//! - [`Applicative`]: lifting values and combining independent containers
//! - [`Monad`]: sequencing dependent computations
//! - [`Alternative`]: choosing the first container that holds a value
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not support higher-kinded types. [`TypeConstructor`] uses a
//! generic associated type to emulate them.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::{Either, Maybe, Try};
//! use carrier::typeclass::Functor;
//!
//! fn label<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|x| format!("#{x}"))
//! }
//!
//! assert_eq!(label(Maybe::pure(1)), Maybe::Some("#1".to_string()));
//! assert_eq!(label(Either::<i32, ()>::Success(2)), Either::Success("#2".to_string()));
//! assert_eq!(label(Try::success(3)), Try::success("#3".to_string()));
//! ```

mod alternative;
mod applicative;
mod functor;
mod higher;
mod monad;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
