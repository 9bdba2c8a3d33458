//! Fixed-arity applicative builders.
//!
//! A builder collects between one and seven containers of the same shape and
//! combines their payloads with a single function:
//!
//! ```rust
//! use carrier::control::{Either, Maybe};
//!
//! let total = Maybe::pure(1).and(Maybe::pure(2)).and(Maybe::pure(3)).then(|a, b, c| a + b + c);
//! assert_eq!(total, Maybe::Some(6));
//!
//! let first_error = Either::<i32, &str>::Success(1)
//!     .and(Either::<i32, &str>::Error("second"))
//!     .and(Either::<i32, &str>::Error("third"))
//!     .then(|a, b, c| a + b + c);
//! assert_eq!(first_error, Either::Error("second"));
//! ```
//!
//! The combining function is evaluated only when every held container holds a
//! value. Containers are inspected in argument order: for `Maybe` the first
//! `None` ends the scan, for `Either` the first error is returned no matter how
//! many of the later containers are errors too.
//!
//! Builders for futures live in [`crate::future`].

/// Declares a builder struct holding one `Maybe` per type parameter.
macro_rules! maybe_applicative {
    ($name:ident, $arity:literal; $($field:ident: $param:ident),+) => {
        #[doc = concat!("Applicative builder over ", stringify!($arity), " `Maybe` value(s).")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[must_use = "builders do nothing until `then` is called"]
        pub struct $name<$($param),+> {
            $($field: $crate::control::Maybe<$param>,)+
        }

        impl<$($param),+> $name<$($param),+> {
            /// Combines the held values, or returns `None` at the first absence.
            pub fn then<Output, Combine>(self, combine: Combine) -> $crate::control::Maybe<Output>
            where
                Combine: FnOnce($($param),+) -> Output,
            {
                $(
                    let $crate::control::Maybe::Some($field) = self.$field else {
                        return $crate::control::Maybe::None;
                    };
                )+
                $crate::control::Maybe::Some(combine($($field),+))
            }
        }
    };
}

/// Adds `and`, growing a `Maybe` builder by one slot.
macro_rules! maybe_applicative_and {
    ($from:ident => $to:ident; $($field:ident: $param:ident),+; $next_field:ident: $next:ident) => {
        impl<$($param),+> $from<$($param),+> {
            /// Adds one more container to the builder.
            pub fn and<$next>(self, $next_field: $crate::control::Maybe<$next>) -> $to<$($param,)+ $next> {
                $to {
                    $($field: self.$field,)+
                    $next_field,
                }
            }
        }
    };
}

/// Declares a builder struct holding one `Either` per success type parameter.
macro_rules! either_applicative {
    ($name:ident, $arity:literal; $($field:ident: $param:ident),+) => {
        #[doc = concat!("Applicative builder over ", stringify!($arity), " `Either` value(s) sharing an error type.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[must_use = "builders do nothing until `then` is called"]
        pub struct $name<$($param,)+ Error> {
            $($field: $crate::control::Either<$param, Error>,)+
        }

        impl<$($param,)+ Error> $name<$($param,)+ Error> {
            /// Combines the held values, or returns the first error in argument order.
            pub fn then<Output, Combine>(self, combine: Combine) -> $crate::control::Either<Output, Error>
            where
                Combine: FnOnce($($param),+) -> Output,
            {
                $(
                    let $field = match self.$field {
                        $crate::control::Either::Success(value) => value,
                        $crate::control::Either::Error(error) => {
                            return $crate::control::Either::Error(error);
                        }
                    };
                )+
                $crate::control::Either::Success(combine($($field),+))
            }
        }
    };
}

/// Adds `and`, growing an `Either` builder by one slot.
macro_rules! either_applicative_and {
    ($from:ident => $to:ident; $($field:ident: $param:ident),+; $next_field:ident: $next:ident) => {
        impl<$($param,)+ Error> $from<$($param,)+ Error> {
            /// Adds one more container to the builder.
            pub fn and<$next>(
                self,
                $next_field: $crate::control::Either<$next, Error>,
            ) -> $to<$($param,)+ $next, Error> {
                $to {
                    $($field: self.$field,)+
                    $next_field,
                }
            }
        }
    };
}

mod either;
mod maybe;

pub use either::{
    EitherApplicative1, EitherApplicative2, EitherApplicative3, EitherApplicative4,
    EitherApplicative5, EitherApplicative6, EitherApplicative7,
};
pub use maybe::{
    MaybeApplicative1, MaybeApplicative2, MaybeApplicative3, MaybeApplicative4, MaybeApplicative5,
    MaybeApplicative6, MaybeApplicative7,
};
