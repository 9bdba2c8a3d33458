//! Traversal over futures.
//!
//! Three flavours are provided:
//!
//! - plain futures ([`traverse_future`], [`sequence_future`]) run concurrently
//!   and always produce every result
//! - container futures (`traverse_*_async`) run one after another; after the
//!   first absence or failure no further future is created
//! - bounded concurrent traversals (`traverse_*_concurrent`) create futures in
//!   input order, keep at most [`Concurrency`] of them in flight and stop at
//!   the first failure in input order, dropping whatever is still in flight

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::pin;

use futures::FutureExt;
use futures::StreamExt;
use futures::future::join_all;
use futures::stream;

use super::Concurrency;
use crate::control::{Either, Exception, Maybe, Try, capture};

/// Polls `future` to completion, converting a panic into an [`Exception`].
pub(crate) async fn capture_future<F>(future: F) -> Result<F::Output, Exception>
where
    F: Future,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|payload| {
            let exception = Exception::from_panic(payload);
            tracing::debug!(%exception, "captured panic while polling future");
            exception
        })
}

/// Creates the future for `item` and awaits it, capturing panics from both steps.
async fn settle<T, B, Fut, F>(item: T, function: &mut F) -> Try<B>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Try<B>>,
{
    match capture(|| function(item)) {
        Ok(future) => capture_future(future)
            .await
            .unwrap_or_else(Try::Failure),
        Err(exception) => Try::Failure(exception),
    }
}

/// Maps every element to a future and awaits them all concurrently.
///
/// Results are returned in input order.
///
/// # Examples
///
/// ```rust
/// use carrier::future::traverse_future;
///
/// # futures::executor::block_on(async {
/// let doubled = traverse_future(vec![1, 2, 3], |x| async move { x * 2 }).await;
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # });
/// ```
pub async fn traverse_future<I, Fut, F>(items: I, function: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    join_all(items.into_iter().map(function)).await
}

/// Awaits every future concurrently, returning results in input order.
pub async fn sequence_future<I>(futures: I) -> Vec<<I::Item as Future>::Output>
where
    I: IntoIterator,
    I::Item: Future,
{
    join_all(futures).await
}

/// Sequentially awaits `function(item)` for each element, collecting into `Maybe`.
///
/// Each future is created only after the previous one completed with a value.
///
/// # Examples
///
/// ```rust
/// use carrier::control::Maybe;
/// use carrier::future::traverse_maybe_async;
///
/// # futures::executor::block_on(async {
/// let found = traverse_maybe_async(vec![1, 2], |x| async move { Maybe::pure(x + 1) }).await;
/// assert_eq!(found, Maybe::Some(vec![2, 3]));
/// # });
/// ```
pub async fn traverse_maybe_async<I, B, Fut, F>(items: I, mut function: F) -> Maybe<Vec<B>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Maybe<B>>,
{
    let mut collected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match function(item).await {
            Maybe::Some(value) => collected.push(value),
            Maybe::None => {
                tracing::trace!(index, "async traversal stopped at absent element");
                return Maybe::None;
            }
        }
    }
    Maybe::Some(collected)
}

/// Sequentially awaits `function(item)` for each element, collecting into `Either`.
///
/// The first error is returned; no future is created after it.
pub async fn traverse_either_async<I, B, E, Fut, F>(items: I, mut function: F) -> Either<Vec<B>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Either<B, E>>,
{
    let mut collected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match function(item).await {
            Either::Success(value) => collected.push(value),
            Either::Error(error) => {
                tracing::trace!(index, "async traversal stopped at error");
                return Either::Error(error);
            }
        }
    }
    Either::Success(collected)
}

/// Sequentially awaits `function(item)` for each element, collecting into `Try`.
///
/// Panics raised while creating or polling a future become the failure of
/// that element. No future is created after the first failure.
pub async fn traverse_try_async<I, B, Fut, F>(items: I, mut function: F) -> Try<Vec<B>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Try<B>>,
{
    let mut collected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match settle(item, &mut function).await {
            Try::Success(value) => collected.push(value),
            Try::Failure(exception) => {
                tracing::trace!(index, %exception, "async traversal stopped at failure");
                return Try::Failure(exception);
            }
        }
    }
    Try::Success(collected)
}

/// Sequentially awaits each `Maybe` future.
pub async fn sequence_maybe_async<I, A>(futures: I) -> Maybe<Vec<A>>
where
    I: IntoIterator,
    I::Item: Future<Output = Maybe<A>>,
{
    traverse_maybe_async(futures, |future| future).await
}

/// Sequentially awaits each `Either` future, stopping at the first error.
pub async fn sequence_either_async<I, A, E>(futures: I) -> Either<Vec<A>, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Either<A, E>>,
{
    traverse_either_async(futures, |future| future).await
}

/// Sequentially awaits each `Try` future, stopping at the first failure.
pub async fn sequence_try_async<I, A>(futures: I) -> Try<Vec<A>>
where
    I: IntoIterator,
    I::Item: Future<Output = Try<A>>,
{
    traverse_try_async(futures, |future| future).await
}

/// Runs `function(item)` with at most `concurrency` futures in flight.
///
/// Results are collected in input order. The first error in input order is
/// returned as soon as it is reached; futures still in flight are dropped and
/// no further future is created.
///
/// # Examples
///
/// ```rust
/// use carrier::control::Either;
/// use carrier::future::{Concurrency, traverse_either_concurrent};
///
/// # futures::executor::block_on(async {
/// let checked = traverse_either_concurrent(vec![1, 2, 3], Concurrency::new(2), |x| async move {
///     if x < 3 { Either::Success(x) } else { Either::Error(format!("{x} too large")) }
/// })
/// .await;
/// assert_eq!(checked, Either::Error("3 too large".to_string()));
/// # });
/// ```
pub async fn traverse_either_concurrent<I, B, E, Fut, F>(
    items: I,
    concurrency: Concurrency,
    function: F,
) -> Either<Vec<B>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Either<B, E>>,
{
    tracing::trace!(limit = concurrency.get(), "starting concurrent traversal");
    let mut results = pin!(
        stream::iter(items)
            .map(function)
            .buffered(concurrency.get())
    );
    let mut collected = Vec::new();
    while let Some(result) = results.next().await {
        match result {
            Either::Success(value) => collected.push(value),
            Either::Error(error) => {
                tracing::trace!(index = collected.len(), "concurrent traversal stopped at error");
                return Either::Error(error);
            }
        }
    }
    Either::Success(collected)
}

/// Runs `function(item)` with at most `concurrency` futures in flight, capturing panics.
///
/// Behaves like [`traverse_either_concurrent`]; a panic while creating or
/// polling a future becomes the failure of that element.
pub async fn traverse_try_concurrent<I, B, Fut, F>(
    items: I,
    concurrency: Concurrency,
    mut function: F,
) -> Try<Vec<B>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Try<B>>,
{
    tracing::trace!(limit = concurrency.get(), "starting concurrent traversal");
    let mut results = pin!(
        stream::iter(items)
            .map(|item| match capture(|| function(item)) {
                Ok(future) => capture_future(future)
                    .map(|settled| settled.unwrap_or_else(Try::Failure))
                    .left_future(),
                Err(exception) => futures::future::ready(Try::Failure(exception)).right_future(),
            })
            .buffered(concurrency.get())
    );
    let mut collected = Vec::new();
    while let Some(result) = results.next().await {
        match result {
            Try::Success(value) => collected.push(value),
            Try::Failure(exception) => {
                tracing::trace!(index = collected.len(), %exception, "concurrent traversal stopped at failure");
                return Try::Failure(exception);
            }
        }
    }
    Try::Success(collected)
}
