//! Algebraic containers.
//!
//! This module provides the three containers the rest of the crate is built
//! around:
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: a success or a declared error
//! - [`Try`]: a success or a captured [`Exception`]
//!
//! All three are immutable values: every combinator consumes its receiver and
//! returns a new container.
//!
//! # Examples
//!
//! ## Chaining optional steps
//!
//! ```rust
//! use carrier::control::Maybe;
//!
//! fn lookup(id: u32) -> Maybe<&'static str> {
//!     Maybe::when(id == 7, || "seven")
//! }
//!
//! assert_eq!(Maybe::pure(7).bind(lookup).map(str::len), Maybe::Some(5));
//! assert_eq!(Maybe::pure(8).bind(lookup).map(str::len), Maybe::None);
//! ```
//!
//! ## Capturing failures
//!
//! ```rust
//! use carrier::control::{Either, Try};
//!
//! let attempt = Try::catching(|| "12".parse::<i32>().unwrap()).map(|n| n * 2);
//! let either: Either<i32, String> = attempt.into_either_with(|exception| exception.to_string());
//! assert_eq!(either, Either::Success(24));
//! ```

mod attempt;
mod either;
mod exception;
mod maybe;

pub(crate) use attempt::capture;
pub use attempt::Try;
pub use either::Either;
pub use exception::Exception;
pub use maybe::Maybe;

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Try<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Exception: Send, Sync, Clone);
