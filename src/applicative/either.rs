//! Applicative builders over `Either`.

use crate::control::Either;

either_applicative!(EitherApplicative1, 1; a: A);
either_applicative!(EitherApplicative2, 2; a: A, b: B);
either_applicative!(EitherApplicative3, 3; a: A, b: B, c: C);
either_applicative!(EitherApplicative4, 4; a: A, b: B, c: C, d: D);
either_applicative!(EitherApplicative5, 5; a: A, b: B, c: C, d: D, e: E);
either_applicative!(EitherApplicative6, 6; a: A, b: B, c: C, d: D, e: E, f: F);
either_applicative!(EitherApplicative7, 7; a: A, b: B, c: C, d: D, e: E, f: F, g: G);

either_applicative_and!(EitherApplicative1 => EitherApplicative2; a: A; b: B);
either_applicative_and!(EitherApplicative2 => EitherApplicative3; a: A, b: B; c: C);
either_applicative_and!(EitherApplicative3 => EitherApplicative4; a: A, b: B, c: C; d: D);
either_applicative_and!(EitherApplicative4 => EitherApplicative5; a: A, b: B, c: C, d: D; e: E);
either_applicative_and!(EitherApplicative5 => EitherApplicative6; a: A, b: B, c: C, d: D, e: E; f: F);
either_applicative_and!(EitherApplicative6 => EitherApplicative7; a: A, b: B, c: C, d: D, e: E, f: F; g: G);

impl<A, Error> EitherApplicative1<A, Error> {
    /// Starts a builder from a single container.
    pub const fn new(a: Either<A, Error>) -> Self {
        Self { a }
    }
}

impl<S, E> Either<S, E> {
    /// Starts an applicative builder holding `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Either;
    ///
    /// let width: Either<u32, String> = Either::Success(3);
    /// let height: Either<u32, String> = Either::Error("height missing".to_string());
    /// assert_eq!(width.and(height).then(|w, h| w * h), Either::Error("height missing".to_string()));
    /// ```
    pub fn and<B>(self, other: Either<B, E>) -> EitherApplicative2<S, B, E> {
        EitherApplicative1::new(self).and(other)
    }
}
