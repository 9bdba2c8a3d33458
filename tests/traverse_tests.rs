//! Integration tests for sequential traversal and sequencing.

use carrier::control::{Either, Exception, Maybe, Try};
use carrier::traverse::{MaybeIteratorExt, Traverse};
use rstest::rstest;
use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};

fn below_ten(x: i32) -> Either<i32, &'static str> {
    if x < 10 { Either::Success(x) } else { Either::Error("too big") }
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn traverse_all_small_values_succeeds() {
    assert_eq!(vec![1, 2, 3].traverse_either(below_ten), Either::Success(vec![1, 2, 3]));
}

#[rstest]
fn traverse_stops_at_first_large_value() {
    let visited = RefCell::new(Vec::new());
    let result = vec![1, 2, 30, 4].traverse_either(|x| {
        visited.borrow_mut().push(x);
        below_ten(x)
    });
    assert_eq!(result, Either::Error("too big"));
    assert_eq!(*visited.borrow(), vec![1, 2, 30]);
}

// =============================================================================
// Short-circuit and Ordering
// =============================================================================

#[rstest]
fn traverse_either_returns_first_of_several_errors() {
    let result = vec![1, 11, 12].traverse_either(|x| {
        if x < 10 { Either::Success(x) } else { Either::Error(x) }
    });
    assert_eq!(result, Either::Error(11));
}

#[rstest]
fn traverse_try_stops_after_first_failure() {
    let visited = RefCell::new(Vec::new());
    let stop = Exception::msg("stop");
    let result = vec![1, 2, 3].traverse_try(|x| {
        visited.borrow_mut().push(x);
        if x == 2 { Try::failure(stop.clone()) } else { Try::success(x) }
    });
    assert_eq!(result, Try::failure(stop));
    assert_eq!(*visited.borrow(), vec![1, 2]);
}

#[rstest]
fn traverse_try_captures_raised_exception() {
    let raised = Exception::msg("raised mid traversal");
    let result = vec![1, 2].traverse_try(|x| {
        if x == 2 {
            raised.clone().raise();
        }
        Try::success(x)
    });
    assert_eq!(result, Try::failure(raised));
}

#[rstest]
fn traverse_preserves_order_for_non_vec_iterables() {
    let queue: VecDeque<i32> = VecDeque::from(vec![3, 1, 2]);
    assert_eq!(queue.traverse_maybe(Maybe::pure), Maybe::Some(vec![3, 1, 2]));

    let set: BTreeSet<i32> = [5, 1, 3].into_iter().collect();
    assert_eq!(set.traverse_maybe(Maybe::pure), Maybe::Some(vec![1, 3, 5]));
}

#[rstest]
fn traverse_works_on_lazy_iterators() {
    let result = (1..).take(4).traverse_either(below_ten);
    assert_eq!(result, Either::Success(vec![1, 2, 3, 4]));
}

#[rstest]
fn traverse_stops_pulling_from_infinite_iterator() {
    assert_eq!((1..).traverse_either(below_ten), Either::Error("too big"));
}

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(25)]
fn sequence_all_present_keeps_length_and_order(#[case] length: i32) {
    let items: Vec<Maybe<i32>> = (0..length).map(Maybe::pure).collect();
    let expected: Vec<i32> = (0..length).collect();
    assert_eq!(items.sequence_maybe(), Maybe::Some(expected));
}

#[rstest]
fn sequence_either_first_error() {
    let items: Vec<Either<i32, &str>> =
        vec![Either::Success(1), Either::Error("first"), Either::Error("second")];
    assert_eq!(items.sequence_either(), Either::Error("first"));
}

#[rstest]
fn sequence_try_all_success() {
    let items = vec![Try::success('a'), Try::success('b')];
    assert_eq!(items.sequence_try(), Try::success(vec!['a', 'b']));
}

#[rstest]
fn for_each_either_runs_effects_until_error() {
    let written = RefCell::new(Vec::new());
    let result = vec!["a", "b", "", "c"].for_each_either(|line| {
        if line.is_empty() {
            return Either::Error("empty line");
        }
        written.borrow_mut().push(line);
        Either::Success(())
    });
    assert_eq!(result, Either::Error("empty line"));
    assert_eq!(*written.borrow(), vec!["a", "b"]);
}

// =============================================================================
// Search Helpers
// =============================================================================

#[rstest]
#[case(vec![1, 3, 4, 6], Maybe::Some(4))]
#[case(vec![1, 3], Maybe::None)]
fn first_or_none_finds_first_even(#[case] items: Vec<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(items.into_iter().first_or_none(|x| x % 2 == 0), expected);
}

#[rstest]
fn reduce_or_none_sums() {
    assert_eq!(vec![1, 2, 3].into_iter().reduce_or_none(|a, b| a + b), Maybe::Some(6));
}

#[rstest]
fn somes_skips_absent_values() {
    let lengths: Vec<usize> = vec![Maybe::pure("ab"), Maybe::None, Maybe::pure("cde")]
        .into_iter()
        .somes()
        .map(str::len)
        .collect();
    assert_eq!(lengths, vec![2, 3]);
}

#[rstest]
fn all_or_none_with_all_present() {
    let items = vec![Maybe::pure(1), Maybe::pure(2)];
    assert_eq!(items.into_iter().all_or_none(), Maybe::Some(vec![1, 2]));
}
