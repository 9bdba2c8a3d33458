//! Interaction between the `Try` capture boundary and the process panic hook.
//!
//! The panic hook is global, so this binary holds a single test.

use carrier::control::{Exception, Try};
use rstest::rstest;
use std::panic;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[rstest]
fn only_plain_panics_reach_the_panic_hook() {
    let hook_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hook_calls);
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let reason = Exception::msg("quota exceeded");
    let raised = reason.clone();
    let from_raise: Try<i32> = Try::success(1).map(move |_| raised.raise());
    let from_try_map = Try::success(-1).try_map(|n: i32| u32::try_from(n));
    let after_expected_failures = hook_calls.load(Ordering::SeqCst);

    let from_panic: Try<i32> = Try::catching(|| panic!("unexpected"));
    let after_panic = hook_calls.load(Ordering::SeqCst);

    panic::set_hook(previous);

    assert_eq!(from_raise, Try::failure(reason));
    assert!(from_try_map.is_failure());
    assert_eq!(after_expected_failures, 0);
    assert!(from_panic.is_failure());
    assert_eq!(after_panic, 1);
}
