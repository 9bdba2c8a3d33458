//! Asynchronous combinators on the containers.

use std::future::Future;

use super::traverse::capture_future;
use crate::control::{Either, Maybe, Try, capture};

impl<A> Maybe<A> {
    /// Awaits `function(value)` if present.
    ///
    /// No future is created for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// # futures::executor::block_on(async {
    /// let fetched = Maybe::pure(7).map_async(|id| async move { format!("user-{id}") }).await;
    /// assert_eq!(fetched, Maybe::Some("user-7".to_string()));
    /// # });
    /// ```
    pub async fn map_async<B, Fut, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value).await),
            Self::None => Maybe::None,
        }
    }

    /// Awaits a `Maybe`-returning future if present.
    pub async fn bind_async<B, Fut, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = Maybe<B>>,
    {
        match self {
            Self::Some(value) => function(value).await,
            Self::None => Maybe::None,
        }
    }

    /// Awaits `callback(&value)` if present, then returns `self` unchanged.
    pub async fn when_some_async<Fut, F>(self, callback: F) -> Self
    where
        F: FnOnce(&A) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Some(value) = &self {
            callback(value).await;
        }
        self
    }
}

impl<Fut: Future> Maybe<Fut> {
    /// Awaits the held future, turning `Maybe<Future<A>>` into `Future<Maybe<A>>`.
    pub async fn sequence_async(self) -> Maybe<Fut::Output> {
        self.map_async(|future| future).await
    }
}

impl<S, E> Either<S, E> {
    /// Awaits `function(value)` for a success.
    pub async fn map_async<B, Fut, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = B>,
    {
        match self {
            Self::Success(value) => Either::Success(function(value).await),
            Self::Error(error) => Either::Error(error),
        }
    }

    /// Awaits an `Either`-returning future for a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// # futures::executor::block_on(async {
    /// let start: Either<u32, String> = Either::Success(2);
    /// let next = start.bind_async(|x| async move { Either::Success(x * 10) }).await;
    /// assert_eq!(next, Either::Success(20));
    /// # });
    /// ```
    pub async fn bind_async<B, Fut, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = Either<B, E>>,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Error(error) => Either::Error(error),
        }
    }
}

impl<S> Try<S> {
    /// Awaits `future` inside a capture boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Try;
    ///
    /// # futures::executor::block_on(async {
    /// let failed = Try::<i32>::catching_async(async { panic!("lost connection") }).await;
    /// assert_eq!(failed.unwrap_failure().to_string(), "lost connection");
    /// # });
    /// ```
    pub async fn catching_async<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = S>,
    {
        match capture_future(future).await {
            Ok(value) => Self::Success(value),
            Err(exception) => Self::Failure(exception),
        }
    }

    /// Awaits `function(value)` for a success, capturing panics.
    pub async fn map_async<B, Fut, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = B>,
    {
        match self {
            Self::Success(value) => match capture(|| function(value)) {
                Ok(future) => Try::catching_async(future).await,
                Err(exception) => Try::Failure(exception),
            },
            Self::Failure(exception) => Try::Failure(exception),
        }
    }

    /// Awaits a `Try`-returning future for a success, capturing panics.
    pub async fn bind_async<B, Fut, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = Try<B>>,
    {
        match self {
            Self::Success(value) => match capture(|| function(value)) {
                Ok(future) => Try::catching_async(future).await.flatten(),
                Err(exception) => Try::Failure(exception),
            },
            Self::Failure(exception) => Try::Failure(exception),
        }
    }
}
