//! Search and aggregation helpers answering with [`Maybe`].

use crate::control::Maybe;

/// Iterator adapters whose result may be absent.
///
/// # Examples
///
/// ```rust
/// use carrier::control::Maybe;
/// use carrier::traverse::MaybeIteratorExt;
///
/// assert_eq!(vec![3, 8, 10].into_iter().first_or_none(|x| x % 2 == 0), Maybe::Some(8));
/// assert_eq!(vec![3].into_iter().single_or_none(), Maybe::Some(3));
/// assert_eq!(vec![3, 4].into_iter().single_or_none(), Maybe::None);
/// assert_eq!(Vec::<i32>::new().into_iter().reduce_or_none(|a, b| a + b), Maybe::None);
/// ```
pub trait MaybeIteratorExt: Iterator + Sized {
    /// Returns the first element matching `predicate`.
    fn first_or_none<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from_nullable(self.find(predicate))
    }

    /// Returns the only element, or `None` when there are zero or several.
    ///
    /// At most two elements are pulled from the iterator.
    fn single_or_none(mut self) -> Maybe<Self::Item> {
        match (self.next(), self.next()) {
            (Some(item), None) => Maybe::Some(item),
            _ => Maybe::None,
        }
    }

    /// Folds the elements with their first element as seed; `None` when empty.
    fn reduce_or_none<F>(self, function: F) -> Maybe<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Maybe::from_nullable(self.reduce(function))
    }

    /// Folds the elements from `seed`; `None` when the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    /// use carrier::traverse::MaybeIteratorExt;
    ///
    /// let joined = ["a", "b"].into_iter().fold_or_none(String::new(), |acc, s| acc + s);
    /// assert_eq!(joined, Maybe::Some("ab".to_string()));
    ///
    /// let empty = std::iter::empty::<&str>().fold_or_none(String::new(), |acc, s| acc + s);
    /// assert_eq!(empty, Maybe::None);
    /// ```
    fn fold_or_none<B, F>(mut self, seed: B, mut function: F) -> Maybe<B>
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let Some(first) = self.next() else {
            return Maybe::None;
        };
        let initial = function(seed, first);
        Maybe::Some(self.fold(initial, function))
    }

    /// Returns the first present value among `Maybe` elements.
    fn first_some<A>(self) -> Maybe<A>
    where
        Self: Iterator<Item = Maybe<A>>,
    {
        Maybe::from_nullable(self.flatten().next())
    }

    /// Yields the present values among `Maybe` elements, skipping absences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Maybe;
    /// use carrier::traverse::MaybeIteratorExt;
    ///
    /// let values: Vec<i32> = vec![Maybe::pure(1), Maybe::None, Maybe::pure(3)].into_iter().somes().collect();
    /// assert_eq!(values, vec![1, 3]);
    /// ```
    fn somes<A>(self) -> std::iter::Flatten<Self>
    where
        Self: Iterator<Item = Maybe<A>>,
    {
        self.flatten()
    }

    /// Returns the first present value produced by `function`.
    fn first_some_by<B, F>(mut self, mut function: F) -> Maybe<B>
    where
        F: FnMut(Self::Item) -> Maybe<B>,
    {
        Maybe::from_nullable(self.find_map(|item| Option::from(function(item))))
    }

    /// Collects every value if all elements are present, otherwise `None`.
    fn all_or_none<A>(self) -> Maybe<Vec<A>>
    where
        Self: Iterator<Item = Maybe<A>>,
    {
        super::Traverse::sequence_maybe(self)
    }
}

impl<I: Iterator> MaybeIteratorExt for I {}
