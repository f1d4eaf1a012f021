//! Result type - the outcome of a fallible computation.
//!
//! This module provides `Result<T, E>`, which is either `Ok(T)` or `Err(E)`.
//! The error channel stays distinct from the success channel: combinators on
//! one side leave the other side untouched, and only the unchecked accessors
//! (`unwrap`, `expect`, `unwrap_err`, `expect_err`) can panic.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{err, ok, Result};
//!
//! fn attempt(param: bool) -> Result<String, String> {
//!     if param {
//!         ok("the parameter is true".to_string())
//!     } else {
//!         err("the parameter should be true".to_string())
//!     }
//! }
//!
//! assert_eq!(attempt(true).map(|s| s.len()).unwrap(), 21);
//! assert_eq!(
//!     attempt(false).map_err(|e| e.to_uppercase()).unwrap_err(),
//!     "THE PARAMETER SHOULD BE TRUE"
//! );
//! ```

use std::fmt;

use super::error::{UnwrapError, unwrap_failed};
use super::iter::{IntoIter, Iter};
use super::option::Option;

/// A successful value of type `T`, or a failure value of type `E`.
///
/// Exactly one variant holds at any time. Combinators consume `self` and
/// return a new `Result`.
///
/// Matching on a `Result` must cover both variants:
///
/// ```compile_fail
/// use monadic::control::Result;
///
/// fn describe(value: Result<i32, String>) -> &'static str {
///     match value {
///         Result::Ok(_) => "ok",
///     }
/// }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant.
    Err(E),
}

/// The tag of a [`Result`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultKind {
    /// The computation succeeded.
    Ok,
    /// The computation failed.
    Err,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => formatter.write_str("ok"),
            Self::Err => formatter.write_str("err"),
        }
    }
}

/// Wraps `value` in `Ok`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{ok, Result};
///
/// let success: Result<i32, String> = ok(1);
/// assert!(success.is_ok());
/// ```
#[inline]
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Wraps `error` in `Err`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{err, Result};
///
/// let failure: Result<i32, &str> = err("bad");
/// assert!(failure.is_err());
/// ```
#[inline]
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Result::Err(error)
}

impl<T, E> Result<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns the variant tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result, ResultKind};
    ///
    /// fn describe(result: &Result<i32, String>) -> &'static str {
    ///     match result.kind() {
    ///         ResultKind::Ok => "is ok",
    ///         ResultKind::Err => "is err",
    ///     }
    /// }
    ///
    /// assert_eq!(describe(&ok(1)), "is ok");
    /// assert_eq!(describe(&err("no".to_string())), "is err");
    /// ```
    #[inline]
    pub const fn kind(&self) -> ResultKind {
        match self {
            Self::Ok(_) => ResultKind::Ok,
            Self::Err(_) => ResultKind::Err,
        }
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    // =========================================================================
    // Conversion to Option
    // =========================================================================

    /// Converts into an [`Option`] of the success value, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, none, ok, some, Result};
    ///
    /// let success: Result<i32, &str> = ok(2);
    /// assert_eq!(success.ok(), some(2));
    ///
    /// let failure: Result<i32, &str> = err("bad");
    /// assert_eq!(failure.ok(), none());
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::None,
        }
    }

    /// Converts into an [`Option`] of the error value, discarding any success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, none, ok, some, Result};
    ///
    /// let success: Result<i32, &str> = ok(2);
    /// assert_eq!(success.err(), none());
    ///
    /// let failure: Result<i32, &str> = err("bad");
    /// assert_eq!(failure.err(), some("bad"));
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Err(error) => Option::Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value, leaving an `Err` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    ///
    /// let success: Result<i32, &str> = ok(2);
    /// assert_eq!(success.map(|x| x + 1), ok(3));
    ///
    /// let failure: Result<i32, &str> = err("bad");
    /// assert_eq!(failure.map(|x| x + 1), err("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Applies `function` to the error value, leaving an `Ok` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    ///
    /// let failure: Result<i32, &str> = err("bad");
    /// assert_eq!(failure.map_err(str::len), err(3));
    ///
    /// let success: Result<i32, &str> = ok(1);
    /// assert_eq!(success.map_err(str::len), ok(1));
    /// ```
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => default,
        }
    }

    /// Applies `function` to the success value or `fallback` to the error value.
    ///
    /// Exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    ///
    /// let success: Result<i32, String> = ok(4);
    /// assert_eq!(success.map_or_else(|e| e.len() as i32, |v| v * 2), 8);
    ///
    /// let failure: Result<i32, String> = err("abc".to_string());
    /// assert_eq!(failure.map_or_else(|e| e.len() as i32, |v| v * 2), 3);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => fallback(error),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the success value, if any.
    ///
    /// Every call returns a new iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    ///
    /// let success: Result<i32, &str> = ok(1);
    /// assert_eq!(success.iter().next(), Some(&1));
    /// assert_eq!(success.iter().next(), Some(&1));
    ///
    /// let failure: Result<i32, &str> = err("bad");
    /// assert_eq!(failure.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().ok().into())
    }

    // =========================================================================
    // Boolean-like Combinators
    // =========================================================================

    /// Returns `other` if this is `Ok`, otherwise this result's error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    ///
    /// let success: Result<i32, &str> = ok(1);
    /// assert_eq!(success.and(ok::<&str, &str>("next")), ok("next"));
    ///
    /// let failure: Result<i32, &str> = err("first");
    /// assert_eq!(failure.and(ok::<&str, &str>("next")), err("first"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Calls `function` with the success value, or returns this result's error.
    ///
    /// `function` is not invoked for `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    ///
    /// fn checked_half(value: i32) -> Result<i32, String> {
    ///     if value % 2 == 0 { ok(value / 2) } else { err(format!("{value} is odd")) }
    /// }
    ///
    /// assert_eq!(ok(12).and_then(checked_half).and_then(checked_half), ok(3));
    /// assert_eq!(ok(6).and_then(checked_half).and_then(checked_half), err("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns `other` if this is `Err`, otherwise this result's value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    ///
    /// let failure: Result<i32, &str> = err("bad");
    /// assert_eq!(failure.or(ok::<i32, ()>(2)), ok(2));
    ///
    /// let success: Result<i32, &str> = ok(1);
    /// assert_eq!(success.or(ok::<i32, ()>(2)), ok(1));
    /// ```
    #[inline]
    pub fn or<F>(self, other: Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Calls `function` with the error value, or returns this result's value.
    ///
    /// `function` is not invoked for `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    ///
    /// let failure: Result<i32, &str> = err("7");
    /// let recovered: Result<i32, String> = failure.or_else(|e| e.parse::<i32>().map_err(|_| e.to_string()).into());
    /// assert_eq!(recovered, ok(7));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the success value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, Result};
    ///
    /// let failure: Result<i32, &str> = err("bad");
    /// assert_eq!(failure.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Unchecked Access
    // =========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if this is `Err`. The error payload is not
    /// part of the message.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => unwrap_failed(&UnwrapError::custom("Result", "expect", "Err", message)),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Ok(_) => {
                unwrap_failed(&UnwrapError::custom("Result", "expect_err", "Ok", message))
            }
            Self::Err(error) => error,
        }
    }
}

impl<T, E: fmt::Debug> Result<T, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`, with a message containing the error's `Debug` form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{ok, Result};
    ///
    /// let success: Result<i32, String> = ok(3);
    /// assert_eq!(success.unwrap(), 3);
    /// ```
    ///
    /// ```should_panic
    /// use monadic::control::{err, Result};
    ///
    /// let failure: Result<i32, &str> = err("e");
    /// failure.unwrap(); // panics, mentioning "e"
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed(
                &UnwrapError::new("Result", "unwrap", "Err").with_detail(format!("{error:?}")),
            ),
        }
    }
}

impl<T: fmt::Debug, E> Result<T, E> {
    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Ok`, with a message containing the value's `Debug` form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, Result};
    ///
    /// let failure: Result<i32, &str> = err("bad");
    /// assert_eq!(failure.unwrap_err(), "bad");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(value) => unwrap_failed(
                &UnwrapError::new("Result", "unwrap_err", "Ok").with_detail(format!("{value:?}")),
            ),
            Self::Err(error) => error,
        }
    }
}

impl<T: Default, E> Result<T, E> {
    /// Returns the success value, or `T::default()` if this is `Err`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    ///
    /// let nested: Result<Result<i32, &str>, &str> = ok(ok(1));
    /// assert_eq!(nested.flatten(), ok(1));
    ///
    /// let inner_failure: Result<Result<i32, &str>, &str> = ok(err("inner"));
    /// assert_eq!(inner_failure.flatten(), err("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Result<T, E> {
        match self {
            Self::Ok(inner) => inner,
            Self::Err(error) => Result::Err(error),
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// Transposes a `Result` of an [`Option`] into an `Option` of a `Result`.
    ///
    /// `Ok(None)` maps to `None`, `Ok(Some(v))` to `Some(Ok(v))` and `Err(e)`
    /// to `Some(Err(e))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, none, ok, some, Option, Result};
    ///
    /// let value: Result<Option<i32>, &str> = ok(some(5));
    /// assert_eq!(value.transpose(), some(ok(5)));
    ///
    /// let empty: Result<Option<i32>, &str> = ok(none());
    /// assert_eq!(empty.transpose(), none());
    ///
    /// let failure: Result<Option<i32>, &str> = err("bad");
    /// assert_eq!(failure.transpose(), some(err("bad")));
    /// ```
    #[inline]
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Self::Ok(Option::Some(value)) => Option::Some(Result::Ok(value)),
            Self::Ok(Option::None) => Option::None,
            Self::Err(error) => Option::Some(Result::Err(error)),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.ok().into())
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    /// Converts a standard library `Result` into this crate's `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{ok, Result};
    ///
    /// let parsed: Result<i32, std::num::ParseIntError> = "42".parse::<i32>().into();
    /// assert_eq!(parsed.unwrap(), 42);
    /// ```
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            std::result::Result::Ok(value) => Self::Ok(value),
            std::result::Result::Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    /// Converts this crate's `Result` into a standard library `Result`, so it
    /// can be propagated with `?`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, Result};
    ///
    /// fn run() -> std::result::Result<i32, String> {
    ///     let failure: Result<i32, String> = err("bad".to_string());
    ///     let value = std::result::Result::from(failure)?;
    ///     Ok(value + 1)
    /// }
    ///
    /// assert_eq!(run(), Err("bad".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Self::Ok(value),
            Result::Err(error) => Self::Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{none, some};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(ok(1))]
    #[case(err("e"))]
    fn test_tags_are_exclusive(#[case] value: Result<i32, &str>) {
        assert_ne!(value.is_ok(), value.is_err());
    }

    #[rstest]
    fn test_or_else_not_called_for_ok() {
        let calls = Cell::new(0);
        let result: Result<&str, &str> = ok::<&str, &str>("x").or_else(|_| {
            calls.set(calls.get() + 1);
            ok("y")
        });
        assert_eq!(result, ok("x"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_and_then_not_called_for_err() {
        let calls = Cell::new(0);
        let result: Result<i32, &str> = err::<i32, &str>("e").and_then(|value| {
            calls.set(calls.get() + 1);
            ok(value)
        });
        assert_eq!(result, err("e"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_err_leaves_ok_untouched() {
        let calls = Cell::new(0);
        let result = ok::<i32, &str>(1).map_err(|error| {
            calls.set(calls.get() + 1);
            error.len()
        });
        assert_eq!(result, ok(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_or_else_runs_exactly_one_branch() {
        let fallback_calls = Cell::new(0);
        let function_calls = Cell::new(0);
        let value = err::<i32, i32>(2).map_or_else(
            |error| {
                fallback_calls.set(fallback_calls.get() + 1);
                error * 10
            },
            |value| {
                function_calls.set(function_calls.get() + 1);
                value
            },
        );
        assert_eq!(value, 20);
        assert_eq!(fallback_calls.get(), 1);
        assert_eq!(function_calls.get(), 0);
    }

    #[rstest]
    fn test_conversions_round_trip() {
        assert_eq!(ok::<i32, &str>(1).ok().unwrap(), 1);
        assert_eq!(err::<i32, &str>("e").err().unwrap(), "e");

        let original: Result<i32, &str> = err("e");
        assert_eq!(original.ok().ok_or("e"), original);

        let original: Result<i32, &str> = ok(3);
        assert_eq!(original.ok().ok_or("e"), original);
    }

    #[rstest]
    fn test_transpose_round_trip() {
        let value: Result<Option<i32>, &str> = ok(some(1));
        assert_eq!(value.transpose().transpose(), value);

        let empty: Result<Option<i32>, &str> = ok(none());
        assert_eq!(empty.transpose().transpose(), empty);

        let failure: Result<Option<i32>, &str> = err("e");
        assert_eq!(failure.transpose().transpose(), failure);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", ok::<i32, &str>(1)), "Ok(1)");
        assert_eq!(format!("{}", err::<i32, &str>("e")), "Err(e)");
        assert_eq!(format!("{:?}", err::<i32, &str>("e")), "Err(\"e\")");
    }

    #[rstest]
    #[should_panic(expected = "called `Result::unwrap()` on an `Err` value: \"e\"")]
    fn test_unwrap_panics_with_error_payload() {
        err::<i32, &str>("e").unwrap();
    }

    #[rstest]
    #[should_panic(expected = "called `Result::unwrap_err()` on an `Ok` value: \"v\"")]
    fn test_unwrap_err_panics_with_value_payload() {
        ok::<&str, i32>("v").unwrap_err();
    }

    #[rstest]
    #[should_panic(expected = "caller message")]
    fn test_expect_prefers_caller_message() {
        err::<i32, &str>("payload").expect("caller message");
    }

    #[rstest]
    #[should_panic(expected = "expected a failure")]
    fn test_expect_err_panics_on_ok() {
        ok::<i32, &str>(1).expect_err("expected a failure");
    }
}
