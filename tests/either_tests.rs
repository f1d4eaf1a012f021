//! Unit tests for Either<L, R>.
//!
//! Either is right-biased: `map`, `bind`, `ap` and iteration act on `Right`.

#![cfg(feature = "control")]

use monadic::control::{err, left, none, ok, right, some, Either, Result};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
#[case(left(1))]
#[case(right("r"))]
fn either_tags_are_exclusive(#[case] value: Either<i32, &str>) {
    assert_ne!(value.is_left(), value.is_right());
}

#[rstest]
fn either_projections_return_crate_option() {
    let value: Either<i32, String> = left(42);
    assert_eq!(value.clone().left(), some(42));
    assert_eq!(value.right(), none());

    let value: Either<i32, String> = right("hello".to_string());
    assert_eq!(value.clone().right(), some("hello".to_string()));
    assert_eq!(value.left(), none());
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn either_map_left_leaves_right_alone() {
    let calls = Cell::new(0);
    let value: Either<i32, &str> = right("r");
    let mapped = value.map_left(|n| {
        calls.set(calls.get() + 1);
        n + 1
    });
    assert_eq!(mapped, right("r"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn either_bimap_applies_matching_side() {
    let value: Either<i32, &str> = left(2);
    assert_eq!(value.bimap(|n| n * 2, str::len), left(4));

    let value: Either<i32, &str> = right("abc");
    assert_eq!(value.bimap(|n| n * 2, str::len), right(3));
}

#[rstest]
fn either_bind_never_calls_function_on_left() {
    let calls = Cell::new(0);
    let value: Either<&str, i32> = left("stop");
    let result = value.and_then(|n| {
        calls.set(calls.get() + 1);
        right::<&str, i32>(n)
    });
    assert_eq!(result, left("stop"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn either_ap_prefers_own_left() {
    let value: Either<&str, i32> = left("value missing");
    let function: Either<&str, fn(i32) -> i32> = left("function missing");
    assert_eq!(value.ap(function), left("value missing"));
}

#[rstest]
fn either_join_flattens_one_level() {
    let nested: Either<&str, Either<&str, i32>> = right(right(1));
    assert_eq!(nested.join(), right(1));

    let inner_left: Either<&str, Either<&str, i32>> = right(left("inner"));
    assert_eq!(inner_left.join(), left("inner"));

    let outer_left: Either<&str, Either<&str, i32>> = left("outer");
    assert_eq!(outer_left.join(), left("outer"));
}

#[rstest]
fn either_fold_and_swap() {
    let value: Either<i32, &str> = left(7);
    assert_eq!(value.fold(|n| n.to_string(), str::to_string), "7");
    assert_eq!(value.swap(), right(7));
}

// =============================================================================
// Unwrap Operations
// =============================================================================

#[rstest]
fn either_unwrap_matching_side() {
    assert_eq!(left::<i32, &str>(1).unwrap_left(), 1);
    assert_eq!(right::<i32, &str>("r").unwrap_right(), "r");
}

#[rstest]
#[should_panic(expected = "called `Either::unwrap_left()` on a `Right` value")]
fn either_unwrap_left_on_right_panics() {
    right::<i32, &str>("r").unwrap_left();
}

// =============================================================================
// Iteration and Conversion
// =============================================================================

#[rstest]
fn either_iterates_right_only() {
    let value: Either<&str, i32> = right(5);
    assert_eq!(value.iter().copied().collect::<Vec<_>>(), vec![5]);

    let value: Either<&str, i32> = left("l");
    assert_eq!(value.into_iter().count(), 0);
}

#[rstest]
fn either_result_conversions_match_sides() {
    let success: Result<i32, &str> = ok(1);
    assert_eq!(Either::from(success), right(1));

    let failure: Result<i32, &str> = err("e");
    assert_eq!(Either::from(failure), left("e"));

    let value: Either<&str, i32> = right(3);
    assert_eq!(Result::from(value), ok(3));
}
