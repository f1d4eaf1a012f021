//! Property-based tests for Monad and Applicative laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! The inherent `and_then` of each container is checked against the same laws,
//! since it is the form most callers use.

#![cfg(feature = "typeclass")]

use monadic::control::{err, left, none, ok, right, some, Either, Option, Result};
use monadic::typeclass::{Applicative, Identity, Monad};
use proptest::prelude::*;

fn option_strategy() -> impl Strategy<Value = Option<i32>> {
    any::<std::option::Option<i32>>().prop_map(Option::from)
}

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Result::from)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::<String, i32>::Left),
        any::<i32>().prop_map(Either::<String, i32>::Right),
    ]
}

fn halve_even(n: i32) -> Option<i32> {
    if n % 2 == 0 { some(n / 2) } else { none() }
}

fn checked_double(n: i32) -> Option<i32> {
    Option::from(n.checked_mul(2))
}

fn positive(n: i32) -> Result<i32, String> {
    if n > 0 { ok(n) } else { err(format!("{n} is not positive")) }
}

fn decrement(n: i32) -> Result<i32, String> {
    Option::from(n.checked_sub(1)).ok_or_else(|| "underflow".to_string())
}

fn small(n: i32) -> Either<String, i32> {
    if n.unsigned_abs() < 1000 { right(n) } else { left(format!("{n} is too large")) }
}

fn tripled(n: i32) -> Either<String, i32> {
    right(n.wrapping_mul(3))
}

// =============================================================================
// Option<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_option_left_identity(value in any::<i32>()) {
        prop_assert_eq!(some(value).and_then(halve_even), halve_even(value));
        prop_assert_eq!(<Option<()>>::pure(value).flat_map(halve_even), halve_even(value));
    }

    #[test]
    fn prop_option_right_identity(value in option_strategy()) {
        prop_assert_eq!(value.and_then(some), value);
        prop_assert_eq!(value.flat_map(<Option<()>>::pure), value);
    }

    #[test]
    fn prop_option_associativity(value in option_strategy()) {
        let left = value.flat_map(halve_even).flat_map(checked_double);
        let right = value.flat_map(|x| halve_even(x).flat_map(checked_double));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_tag_exclusivity(value in option_strategy()) {
        prop_assert_ne!(value.is_some(), value.is_none());
    }

    #[test]
    fn prop_option_apply_identity(value in option_strategy()) {
        let identity: Option<fn(i32) -> i32> = <Option<()>>::pure(|x| x);
        prop_assert_eq!(identity.apply(value), value);
    }
}

// =============================================================================
// Result<T, E> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        prop_assert_eq!(ok::<i32, String>(value).and_then(positive), positive(value));
    }

    #[test]
    fn prop_result_right_identity(value in result_strategy()) {
        prop_assert_eq!(value.clone().and_then(ok), value.clone());
        prop_assert_eq!(value.clone().flat_map(<Result<(), String>>::pure), value);
    }

    #[test]
    fn prop_result_associativity(value in result_strategy()) {
        let left = value.clone().flat_map(positive).flat_map(decrement);
        let right = value.flat_map(|x| positive(x).flat_map(decrement));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_tag_exclusivity(value in result_strategy()) {
        prop_assert_ne!(value.is_ok(), value.is_err());
    }

    /// The combination keeps the first error from left to right.
    #[test]
    fn prop_result_map2_keeps_first_error(first in result_strategy(), second in result_strategy()) {
        let combined = first.clone().map2(second.clone(), i32::wrapping_add);
        let expected = match (first, second) {
            (Result::Ok(a), Result::Ok(b)) => ok(a.wrapping_add(b)),
            (Result::Err(e), _) | (_, Result::Err(e)) => err(e),
        };
        prop_assert_eq!(combined, expected);
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(right::<String, i32>(value).bind(small), small(value));
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().bind(right), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let left = value.clone().flat_map(small).flat_map(tripled);
        let right = value.flat_map(|x| small(x).flat_map(tripled));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_join_matches_bind_identity(value in either_strategy()) {
        let nested = value.clone().map(right::<String, i32>);
        prop_assert_eq!(nested.join(), value);
    }
}

// =============================================================================
// Identity<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let function = |n: i32| Identity::new(n.wrapping_mul(5));
        prop_assert_eq!(Identity::new(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_identity_associativity(value in any::<i32>()) {
        let function1 = |n: i32| Identity::new(n.wrapping_add(1));
        let function2 = |n: i32| Identity::new(i64::from(n) * 2);

        let left = Identity::new(value).flat_map(function1).flat_map(function2);
        let right = Identity::new(value).flat_map(|x| function1(x).flat_map(function2));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_identity_join_after_map(value in any::<i32>()) {
        prop_assert_eq!(Identity::new(value).map(Identity::new).join(), Identity::new(value));
    }
}
