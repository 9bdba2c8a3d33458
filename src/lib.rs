//! # carrier
//!
//! Algebraic containers for optional, fallible and panicking computations,
//! with a uniform combinator vocabulary.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe), [`Either`](control::Either)
//!   and [`Try`](control::Try), plus the [`Exception`](control::Exception)
//!   a `Try` captures
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Alternative`
//!   implemented for the containers
//! - **Traversal**: turn an iterable of containers inside out, stopping at the
//!   first absence or failure
//! - **Applicative builders**: combine up to seven containers with one function
//! - **Async**: traversal over futures, bounded concurrent traversal and
//!   future builders
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits (enabled by default)
//! - `async`: future traversal and combinators (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Either`
//! - `full`: enable all features
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` when a `Try` boundary captures
//! a panic, `trace` when a traversal stops early. No subscriber is installed.
//!
//! ## Example
//!
//! ```rust
//! use carrier::prelude::*;
//!
//! let parsed = vec!["4", "8", "15"].traverse_try(|s| Try::catching(|| s.parse::<u32>().unwrap()));
//! assert_eq!(parsed, Try::success(vec![4, 8, 15]));
//!
//! let area = Maybe::pure(3).and(Maybe::pure(4)).then(|w, h| w * h);
//! assert_eq!(area, Maybe::Some(12));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, traversal traits and, depending on enabled
/// features, the type classes and async helpers.
///
/// # Usage
///
/// ```rust
/// use carrier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::applicative::*;
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::traverse::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::future::*;
}

pub mod applicative;
pub mod compose;
pub mod control;
pub mod error;
pub mod traverse;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "async")]
pub mod future;
