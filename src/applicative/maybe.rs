//! Applicative builders over `Maybe`.

use crate::control::Maybe;

maybe_applicative!(MaybeApplicative1, 1; a: A);
maybe_applicative!(MaybeApplicative2, 2; a: A, b: B);
maybe_applicative!(MaybeApplicative3, 3; a: A, b: B, c: C);
maybe_applicative!(MaybeApplicative4, 4; a: A, b: B, c: C, d: D);
maybe_applicative!(MaybeApplicative5, 5; a: A, b: B, c: C, d: D, e: E);
maybe_applicative!(MaybeApplicative6, 6; a: A, b: B, c: C, d: D, e: E, f: F);
maybe_applicative!(MaybeApplicative7, 7; a: A, b: B, c: C, d: D, e: E, f: F, g: G);

maybe_applicative_and!(MaybeApplicative1 => MaybeApplicative2; a: A; b: B);
maybe_applicative_and!(MaybeApplicative2 => MaybeApplicative3; a: A, b: B; c: C);
maybe_applicative_and!(MaybeApplicative3 => MaybeApplicative4; a: A, b: B, c: C; d: D);
maybe_applicative_and!(MaybeApplicative4 => MaybeApplicative5; a: A, b: B, c: C, d: D; e: E);
maybe_applicative_and!(MaybeApplicative5 => MaybeApplicative6; a: A, b: B, c: C, d: D, e: E; f: F);
maybe_applicative_and!(MaybeApplicative6 => MaybeApplicative7; a: A, b: B, c: C, d: D, e: E, f: F; g: G);

impl<A> MaybeApplicative1<A> {
    /// Starts a builder from a single container.
    pub const fn new(a: Maybe<A>) -> Self {
        Self { a }
    }
}

impl<A> Maybe<A> {
    /// Starts an applicative builder holding `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    ///
    /// let name = Maybe::pure("Ada").and(Maybe::pure(36)).then(|name, age| format!("{name} ({age})"));
    /// assert_eq!(name, Maybe::Some("Ada (36)".to_string()));
    /// ```
    pub fn and<B>(self, other: Maybe<B>) -> MaybeApplicative2<A, B> {
        MaybeApplicative1::new(self).and(other)
    }
}
