//! Asynchronous traversal, sequencing and combinators.
//!
//! This module is available with the `async` feature (enabled by default). It
//! works with any [`std::future::Future`] and does not depend on a particular
//! runtime: futures are only awaited, never spawned.
//!
//! - [`traverse_future`] / [`sequence_future`]: plain futures, run concurrently
//! - `traverse_{maybe,either,try}_async`: container futures, run sequentially
//!   and stopped at the first absence or failure
//! - `traverse_{either,try}_concurrent`: container futures with a bounded
//!   number in flight, see [`Concurrency`]
//! - [`Asynquence1`] .. [`Asynquence7`]: applicative builders over futures
//! - `map_async` / `bind_async` on `Maybe`, `Either` and `Try`, plus
//!   [`Try::catching_async`](crate::control::Try::catching_async)
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::Maybe;
//! use carrier::future::traverse_maybe_async;
//!
//! # futures::executor::block_on(async {
//! let lookups = traverse_maybe_async(vec!["a", "missing", "c"], |key| async move {
//!     Maybe::when(key != "missing", || key.to_uppercase())
//! })
//! .await;
//! assert_eq!(lookups, Maybe::None);
//! # });
//! ```

mod applicative;
mod config;
mod methods;
mod traverse;

pub use applicative::{
    Asynquence1, Asynquence2, Asynquence3, Asynquence4, Asynquence5, Asynquence6, Asynquence7,
    asynquence,
};
pub use config::Concurrency;
pub use traverse::{
    sequence_either_async, sequence_future, sequence_maybe_async, sequence_try_async,
    traverse_either_async, traverse_either_concurrent, traverse_future, traverse_maybe_async,
    traverse_try_async, traverse_try_concurrent,
};
