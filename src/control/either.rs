//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. It is right-biased: `map`,
//! `bind`, `ap` and iteration act on the `Right` side and pass a `Left`
//! through unchanged, so `Left` can carry an error or an early exit.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{left, right, Either};
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>().map_or_else(|_| left(format!("not a number: {text}")), right)
//! }
//!
//! let sum = parse("20").bind(|a| parse("22").map(|b| a + b));
//! assert_eq!(sum, right(42));
//!
//! let failed = parse("20").bind(|a| parse("x").map(|b| a + b));
//! assert_eq!(failed, left("not a number: x".to_string()));
//!
//! // Using fold to handle both cases
//! let message = sum.fold(|e| e, |n| format!("sum is {n}"));
//! assert_eq!(message, "sum is 42");
//! ```

use std::fmt;

use super::error::{UnwrapError, unwrap_failed};
use super::iter::{IntoIter, Iter};
use super::option::Option;
use super::result::Result;

/// A value that can be one of two types.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the first alternative.
    Left(L),
    /// The right variant, conventionally representing success or the second alternative.
    Right(R),
}

/// Wraps `value` in `Left`.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Wraps `value` in `Right`.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Converts into an [`Option`] of the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Either};
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.left(), some(42));
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.left(), none());
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Option::Some(value),
            Self::Right(_) => Option::None,
        }
    }

    /// Converts into an [`Option`] of the right value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => Option::None,
            Self::Right(value) => Option::Some(value),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the right value, passing a `Left` through.
    ///
    /// Same as [`Either::map_right`].
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map_right(function)
    }

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Calls `function` with the right value, or passes a `Left` through.
    ///
    /// `function` is not invoked for `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{left, right, Either};
    ///
    /// let value: Either<String, i32> = right(5);
    /// let result = value.bind(|x| if x > 0 { right(x * 2) } else { left("negative".to_string()) });
    /// assert_eq!(result, right(10));
    /// ```
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::bind`].
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.bind(function)
    }

    /// Applies a function held in another `Either` to the right value.
    ///
    /// The first `Left` encountered wins: this value's `Left` is checked before
    /// the function's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{left, right, Either};
    ///
    /// let value: Either<&str, i32> = right(1);
    /// let function: Either<&str, fn(i32) -> String> = right(|x: i32| x.to_string());
    /// assert_eq!(value.ap(function), right("1".to_string()));
    ///
    /// let missing: Either<&str, fn(i32) -> String> = left("no function");
    /// assert_eq!(value.ap(missing), left("no function"));
    /// ```
    #[inline]
    pub fn ap<T, F>(self, function: Either<L, F>) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match (self, function) {
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
            (Self::Right(value), Either::Right(function)) => Either::Right(function(value)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// This is also known as "case analysis" or "pattern matching" as a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => unwrap_failed(&UnwrapError::new("Either", "unwrap_left", "Right")),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => unwrap_failed(&UnwrapError::new("Either", "unwrap_right", "Left")),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the right value, if any.
    #[inline]
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.as_ref().right().into())
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting on the right side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{left, right, Either};
    ///
    /// let nested: Either<&str, Either<&str, i32>> = right(right(1));
    /// assert_eq!(nested.join(), right(1));
    ///
    /// let nested: Either<&str, Either<&str, i32>> = right(left("inner"));
    /// assert_eq!(nested.join(), left("inner"));
    /// ```
    #[inline]
    pub fn join(self) -> Either<L, R> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = IntoIter<R>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.right().into())
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{ok, Either, Result};
    ///
    /// let success: Result<i32, String> = ok(42);
    /// let either: Either<String, i32> = success.into();
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Result::Ok(value) => Self::Right(value),
            Result::Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Self::Err(value),
            Either::Right(value) => Self::Ok(value),
        }
    }
}
