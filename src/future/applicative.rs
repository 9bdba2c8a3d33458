//! Applicative builders over futures.
//!
//! An `Asynquence` collects up to seven futures and, on `then`, awaits them
//! concurrently before combining their outputs.
//!
//! # Examples
//!
//! ```rust
//! use carrier::future::asynquence;
//!
//! # futures::executor::block_on(async {
//! let greeting = asynquence(async { "hello" })
//!     .and(async { 3 })
//!     .then(|word, times| word.repeat(times))
//!     .await;
//! assert_eq!(greeting, "hellohellohello");
//! # });
//! ```

use std::future::Future;

macro_rules! asynquence_builder {
    ($name:ident, $arity:literal; $($field:ident: $param:ident),+) => {
        #[doc = concat!("Applicative builder over ", stringify!($arity), " future(s).")]
        #[derive(Debug)]
        #[must_use = "builders do nothing until `then` is awaited"]
        pub struct $name<$($param),+> {
            $($field: $param,)+
        }

        impl<$($param: Future),+> $name<$($param),+> {
            /// Awaits every held future concurrently and combines their outputs.
            pub async fn then<Output, Combine>(self, combine: Combine) -> Output
            where
                Combine: FnOnce($($param::Output),+) -> Output,
            {
                let ($($field,)+) = futures::join!($(self.$field),+);
                combine($($field),+)
            }
        }
    };
}

macro_rules! asynquence_and {
    ($from:ident => $to:ident; $($field:ident: $param:ident),+; $next_field:ident: $next:ident) => {
        impl<$($param: Future),+> $from<$($param),+> {
            /// Adds one more future to the builder.
            pub fn and<$next: Future>(self, $next_field: $next) -> $to<$($param,)+ $next> {
                $to {
                    $($field: self.$field,)+
                    $next_field,
                }
            }
        }
    };
}

/// Applicative builder over a single future.
#[derive(Debug)]
#[must_use = "builders do nothing until `then` is awaited"]
pub struct Asynquence1<A> {
    a: A,
}

impl<A: Future> Asynquence1<A> {
    /// Starts a builder from a single future.
    pub const fn new(a: A) -> Self {
        Self { a }
    }

    /// Awaits the held future and maps its output.
    pub async fn then<Output, Combine>(self, combine: Combine) -> Output
    where
        Combine: FnOnce(A::Output) -> Output,
    {
        combine(self.a.await)
    }
}

asynquence_builder!(Asynquence2, 2; a: A, b: B);
asynquence_builder!(Asynquence3, 3; a: A, b: B, c: C);
asynquence_builder!(Asynquence4, 4; a: A, b: B, c: C, d: D);
asynquence_builder!(Asynquence5, 5; a: A, b: B, c: C, d: D, e: E);
asynquence_builder!(Asynquence6, 6; a: A, b: B, c: C, d: D, e: E, f: F);
asynquence_builder!(Asynquence7, 7; a: A, b: B, c: C, d: D, e: E, f: F, g: G);

asynquence_and!(Asynquence1 => Asynquence2; a: A; b: B);
asynquence_and!(Asynquence2 => Asynquence3; a: A, b: B; c: C);
asynquence_and!(Asynquence3 => Asynquence4; a: A, b: B, c: C; d: D);
asynquence_and!(Asynquence4 => Asynquence5; a: A, b: B, c: C, d: D; e: E);
asynquence_and!(Asynquence5 => Asynquence6; a: A, b: B, c: C, d: D, e: E; f: F);
asynquence_and!(Asynquence6 => Asynquence7; a: A, b: B, c: C, d: D, e: E, f: F; g: G);

/// Starts a future builder; shorthand for [`Asynquence1::new`].
pub const fn asynquence<A: Future>(future: A) -> Asynquence1<A> {
    Asynquence1::new(future)
}
