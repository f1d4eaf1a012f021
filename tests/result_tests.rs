//! Unit tests for Result<T, E>.

#![cfg(feature = "control")]

use monadic::control::{err, none, ok, some, Result, ResultKind};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Tag Inspection
// =============================================================================

#[rstest]
#[case(ok(1))]
#[case(err("e".to_string()))]
fn result_tags_are_exclusive(#[case] value: Result<i32, String>) {
    assert_ne!(value.is_ok(), value.is_err());
}

#[rstest]
fn result_kind_reports_variant() {
    assert_eq!(ok::<i32, ()>(1).kind(), ResultKind::Ok);
    assert_eq!(err::<i32, ()>(()).kind(), ResultKind::Err);
}

// =============================================================================
// Projections
// =============================================================================

#[rstest]
fn result_ok_projection() {
    assert_eq!(ok::<i32, &str>(1).ok(), some(1));
    assert_eq!(err::<i32, &str>("e").ok(), none());
}

#[rstest]
fn result_err_projection() {
    assert_eq!(ok::<i32, &str>(1).err(), none());
    assert_eq!(err::<i32, &str>("e").err(), some("e"));
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn result_map_leaves_error_untouched() {
    let failure: Result<i32, String> = err("e".to_string());
    assert_eq!(failure.map(|n| n.to_string()), err("e".to_string()));
}

#[rstest]
fn result_map_err_leaves_success_untouched() {
    let calls = Cell::new(0);
    let success: Result<i32, &str> = ok(1);
    let mapped = success.map_err(|e| {
        calls.set(calls.get() + 1);
        e.len()
    });
    assert_eq!(mapped, ok(1));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn result_map_err_transforms_error() {
    let failure: Result<i32, &str> = err("four");
    assert_eq!(failure.map_err(str::len), err(4));
}

#[rstest]
#[case(ok(2), 4)]
#[case(err("abc"), 3)]
fn result_map_or_else_runs_exactly_one_branch(
    #[case] value: Result<usize, &'static str>,
    #[case] expected: usize,
) {
    let fallback_calls = Cell::new(0);
    let success_calls = Cell::new(0);
    let output = value.map_or_else(
        |e| {
            fallback_calls.set(fallback_calls.get() + 1);
            e.len()
        },
        |n| {
            success_calls.set(success_calls.get() + 1);
            n * 2
        },
    );
    assert_eq!(output, expected);
    assert_eq!(fallback_calls.get() + success_calls.get(), 1);
}

#[rstest]
fn result_map_or() {
    assert_eq!(ok::<i32, &str>(2).map_or(0, |n| n + 1), 3);
    assert_eq!(err::<i32, &str>("e").map_or(0, |n| n + 1), 0);
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn result_and() {
    assert_eq!(ok::<i32, &str>(1).and(ok::<&str, &str>("b")), ok("b"));
    assert_eq!(err::<i32, &str>("first").and(ok::<&str, &str>("b")), err("first"));
    assert_eq!(ok::<i32, &str>(1).and(err::<&str, &str>("second")), err("second"));
}

#[rstest]
fn result_and_then_never_calls_function_on_err() {
    let calls = Cell::new(0);
    let result = err::<i32, &str>("e").and_then(|n| {
        calls.set(calls.get() + 1);
        ok(n + 1)
    });
    assert_eq!(result, err("e"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn result_or() {
    assert_eq!(ok::<i32, &str>(1).or(err::<i32, u8>(0)), ok(1));
    assert_eq!(err::<i32, &str>("e").or(ok::<i32, u8>(2)), ok(2));
}

#[rstest]
fn result_or_else_is_lazy_for_ok() {
    let calls = Cell::new(0);
    let result: Result<char, &str> = ok('x').or_else(|e: &str| {
        calls.set(calls.get() + 1);
        err(e)
    });
    assert_eq!(result, ok('x'));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn result_or_else_recovers_error() {
    let result: Result<usize, ()> = err::<usize, &str>("abc").or_else(|e| ok(e.len()));
    assert_eq!(result, ok(3));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn result_unwrap_or_and_else() {
    assert_eq!(ok::<i32, &str>(1).unwrap_or(0), 1);
    assert_eq!(err::<i32, &str>("e").unwrap_or(0), 0);
    assert_eq!(err::<usize, &str>("four").unwrap_or_else(str::len), 4);
    assert_eq!(err::<String, ()>(()).unwrap_or_default(), String::new());
}

#[rstest]
#[should_panic(expected = "called `Result::unwrap()` on an `Err` value: \"e\"")]
fn result_unwrap_on_err_panics_with_error_text() {
    err::<i32, &str>("e").unwrap();
}

#[rstest]
#[should_panic(expected = "called `Result::unwrap_err()` on an `Ok` value: \"v\"")]
fn result_unwrap_err_on_ok_panics_with_value_text() {
    ok::<&str, i32>("v").unwrap_err();
}

#[rstest]
#[should_panic(expected = "caller message")]
fn result_expect_on_err_prefers_caller_message() {
    err::<i32, &str>("payload").expect("caller message");
}

#[rstest]
#[should_panic(expected = "wanted a failure")]
fn result_expect_err_on_ok_panics_with_message() {
    ok::<i32, &str>(1).expect_err("wanted a failure");
}

#[rstest]
fn result_expect_message_omits_payload() {
    let payload = std::panic::catch_unwind(|| err::<i32, &str>("payload").expect("only this"))
        .expect_err("expect on Err must panic");
    let message = payload.downcast_ref::<String>().cloned().unwrap_or_default();
    assert_eq!(message, "only this");
}

#[rstest]
fn result_unwrap_err_returns_error() {
    assert_eq!(err::<i32, &str>("e").unwrap_err(), "e");
    assert_eq!(err::<i32, &str>("e").expect_err("unused"), "e");
}

// =============================================================================
// Nesting
// =============================================================================

#[rstest]
fn result_flatten() {
    let nested: Result<Result<i32, &str>, &str> = ok(ok(1));
    assert_eq!(nested.flatten(), ok(1));

    let inner_failure: Result<Result<i32, &str>, &str> = ok(err("inner"));
    assert_eq!(inner_failure.flatten(), err("inner"));
}

#[rstest]
fn result_transpose() {
    let present: Result<_, &str> = ok(some(1));
    assert_eq!(present.transpose(), some(ok(1)));

    let absent: Result<monadic::control::Option<i32>, &str> = ok(none());
    assert_eq!(absent.transpose(), none());

    let failed: Result<monadic::control::Option<i32>, &str> = err("bad");
    assert_eq!(failed.transpose(), some(err("bad")));
}

#[rstest]
#[case(ok(some(1)))]
#[case(ok(none()))]
#[case(err("bad"))]
fn result_transpose_round_trip(#[case] value: Result<monadic::control::Option<i32>, &'static str>) {
    assert_eq!(value.transpose().transpose(), value);
}

#[rstest]
fn result_ok_orders_before_err() {
    assert!(ok::<i32, i32>(i32::MAX) < err(i32::MIN));
}
