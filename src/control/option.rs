//! Option type - a value that may be absent.
//!
//! This module provides `Option<T>`, which is either `Some(T)` or `None`.
//! It lets callers compose over the possibility of absence without null
//! checks: every combinator is total, and only the unchecked accessors
//! ([`Option::unwrap`] and [`Option::expect`]) can panic.
//!
//! `Option` interconverts with [`Result`] through [`Option::ok_or`],
//! [`Option::ok_or_else`], [`Result::ok`] and [`Result::err`], and with the
//! standard library's `Option` through `From`/`Into`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{none, some, Option};
//!
//! fn parse_port(text: &str) -> Option<u16> {
//!     text.parse::<u16>().ok().into()
//! }
//!
//! assert_eq!(parse_port("8080").filter(|port| *port > 1024), some(8080));
//! assert_eq!(parse_port("http").or(some(80)).unwrap(), 80);
//! assert_eq!(parse_port("22").filter(|port| *port > 1024), none());
//! ```

use std::fmt;

use super::error::{UnwrapError, unwrap_failed};
use super::iter::{IntoIter, Iter};
use super::result::Result;

/// A value of type `T`, or nothing.
///
/// Exactly one variant holds at any time, and a value never changes after it
/// is constructed: every combinator consumes `self` and returns a new `Option`.
///
/// `Some` wraps any value, including values that are themselves "empty" such
/// as `()` or another `None`. Presence is a property of the container, not of
/// the wrapped value.
///
/// Matching on an `Option` must cover both variants:
///
/// ```compile_fail
/// use monadic::control::Option;
///
/// fn describe(value: Option<i32>) -> &'static str {
///     match value {
///         Option::Some(_) => "some",
///     }
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use monadic::control::{none, some, Option};
///
/// let present: Option<i32> = some(2);
/// let absent: Option<i32> = none();
///
/// assert_eq!(present.map(|x| x * 10), some(20));
/// assert_eq!(absent.map(|x| x * 10), none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

/// The tag of an [`Option`], without its payload.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{none, some, Option, OptionKind};
///
/// assert_eq!(some(1).kind(), OptionKind::Some);
/// assert_eq!(none::<i32>().kind(), OptionKind::None);
/// assert_eq!(OptionKind::Some.to_string(), "some");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKind {
    /// The option holds a value.
    Some,
    /// The option is empty.
    None,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some => formatter.write_str("some"),
            Self::None => formatter.write_str("none"),
        }
    }
}

/// Wraps `value` in `Some`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::some;
///
/// assert!(some(()).is_some());
/// assert_eq!(some("x").unwrap(), "x");
/// ```
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// Creates an empty `Option`; the type parameter is inferred from context.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{none, Option};
///
/// let empty: Option<String> = none();
/// assert!(empty.is_none());
/// ```
#[inline]
pub const fn none<T>() -> Option<T> {
    Option::None
}

impl<T> Option<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some};
    ///
    /// assert!(some(1).is_some());
    /// assert!(!none::<i32>().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some};
    ///
    /// assert!(none::<i32>().is_none());
    /// assert!(!some(1).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the variant tag.
    #[inline]
    pub const fn kind(&self) -> OptionKind {
        match self {
            Self::Some(_) => OptionKind::Some,
            Self::None => OptionKind::None,
        }
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::some;
    ///
    /// let text = some(String::from("hello"));
    /// assert_eq!(text.as_ref().map(|s| s.len()), some(5));
    /// assert_eq!(text.unwrap(), "hello");
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    // =========================================================================
    // Unchecked Access
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::some;
    ///
    /// assert_eq!(some("value").expect("value must be present"), "value");
    /// ```
    ///
    /// ```should_panic
    /// use monadic::control::{none, Option};
    ///
    /// let empty: Option<i32> = none();
    /// empty.expect("boom"); // panics with `boom`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => unwrap_failed(&UnwrapError::custom("Option", "expect", "None", message)),
        }
    }

    /// Returns the contained value.
    ///
    /// Prefer [`Option::unwrap_or`], [`Option::unwrap_or_else`] or a `match`
    /// when absence is an expected outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::some;
    ///
    /// assert_eq!(some(3).unwrap(), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => unwrap_failed(&UnwrapError::new("Option", "unwrap", "None")),
        }
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the contained value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some};
    ///
    /// assert_eq!(some("VAL").unwrap_or("default"), "VAL");
    /// assert_eq!(none().unwrap_or("default"), "default");
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one from `default`.
    ///
    /// `default` runs only when this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some};
    ///
    /// let mut calls = 0;
    /// assert_eq!(some(1).unwrap_or_else(|| { calls += 1; 0 }), 1);
    /// assert_eq!(calls, 0);
    /// assert_eq!(none().unwrap_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Maps an `Option<T>` to `Option<U>` by applying `function` to the contained value.
    ///
    /// `function` is called at most once, and only for `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    ///
    /// assert_eq!(some("VAL").map(|v| format!("{v}mapped")), some("VALmapped".to_string()));
    ///
    /// let empty: Option<&str> = none();
    /// assert!(empty.map(|v| v.len()).is_none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }

    /// Applies `function` to the contained value, or returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    ///
    /// assert_eq!(some("abc").map_or(0, |v| v.len()), 3);
    /// assert_eq!(none::<&str>().map_or(0, |v| v.len()), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default,
        }
    }

    /// Applies `function` to the contained value, or computes a value from `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some};
    ///
    /// assert_eq!(some(2).map_or_else(|| -1, |v| v * 2), 4);
    /// assert_eq!(none::<i32>().map_or_else(|| -1, |v| v * 2), -1);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default(),
        }
    }

    // =========================================================================
    // Conversion to Result
    // =========================================================================

    /// Transforms into a [`Result`], mapping `Some(v)` to `Ok(v)` and `None` to `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, none, ok, some, Option, Result};
    ///
    /// let present: Result<i32, &str> = some(1).ok_or("missing");
    /// assert_eq!(present, ok(1));
    ///
    /// let absent: Result<i32, &str> = none().ok_or("missing");
    /// assert_eq!(absent, err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(error),
        }
    }

    /// Transforms into a [`Result`], computing the error from `error` only for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, none, Option, Result};
    ///
    /// let absent: Option<i32> = none();
    /// assert_eq!(absent.ok_or_else(|| "missing".to_string()), err("missing".to_string()));
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(error()),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the possibly contained value.
    ///
    /// Every call returns a new iterator, so the same option can be iterated
    /// repeatedly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    ///
    /// let present = some('a');
    /// assert_eq!(present.iter().collect::<Vec<_>>(), vec![&'a']);
    /// assert_eq!(present.iter().collect::<Vec<_>>(), vec![&'a']);
    ///
    /// let absent: Option<char> = none();
    /// assert_eq!(absent.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into())
    }

    // =========================================================================
    // Boolean-like Combinators
    // =========================================================================

    /// Returns `None` if this is `None`, otherwise returns `other`.
    ///
    /// `other` is already evaluated; use [`Option::and_then`] to compute it lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    ///
    /// assert_eq!(some(1).and(some("b")), some("b"));
    /// assert_eq!(none::<i32>().and(some("b")), none());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    /// Returns `None` if this is `None`, otherwise calls `function` with the
    /// contained value and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    ///
    /// fn half(value: i32) -> Option<i32> {
    ///     if value % 2 == 0 { some(value / 2) } else { none() }
    /// }
    ///
    /// assert_eq!(some(8).and_then(half).and_then(half), some(2));
    /// assert_eq!(some(6).and_then(half).and_then(half), none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
        }
    }

    /// Keeps the contained value only if `predicate` returns `true` for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some};
    ///
    /// assert_eq!(some(4).filter(|n| n % 2 == 0), some(4));
    /// assert_eq!(some(3).filter(|n| n % 2 == 0), none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Returns this option if it holds a value, otherwise returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some};
    ///
    /// assert_eq!(some(1).or(some(2)), some(1));
    /// assert_eq!(none().or(some(2)), some(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns this option if it holds a value, otherwise calls `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some};
    ///
    /// assert_eq!(none().or_else(|| some("fallback")), some("fallback"));
    /// assert_eq!(some("first").or_else(|| some("fallback")), some("first"));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => function(),
        }
    }

    /// Returns `Some` if exactly one of `self` and `other` is `Some`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    ///
    /// assert_eq!(some(1).xor(none()), some(1));
    /// assert_eq!(none().xor(some(1)), some(1));
    /// assert!(some(1).xor(some(2)).is_none());
    /// assert!(none::<i32>().xor(none()).is_none());
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (present @ Self::Some(_), Self::None) | (Self::None, present @ Self::Some(_)) => {
                present
            }
            _ => Self::None,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Option<T> {
    /// Returns the contained value, or `T::default()` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some};
    ///
    /// assert_eq!(some(5).unwrap_or_default(), 5);
    /// assert_eq!(none::<i32>().unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }
}

// =============================================================================
// Nested Options
// =============================================================================

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    ///
    /// assert_eq!(some(some(1)).flatten(), some(1));
    /// assert_eq!(some(none::<i32>()).flatten(), none());
    /// assert_eq!(none::<Option<i32>>().flatten(), none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Option::None,
        }
    }
}

impl<T, E> Option<Result<T, E>> {
    /// Transposes an `Option` of a [`Result`] into a `Result` of an `Option`.
    ///
    /// `None` maps to `Ok(None)`, `Some(Ok(v))` to `Ok(Some(v))` and
    /// `Some(Err(e))` to `Err(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, none, ok, some, Option, Result};
    ///
    /// let value: Option<Result<i32, &str>> = some(ok(5));
    /// assert_eq!(value.transpose(), ok(some(5)));
    ///
    /// let failure: Option<Result<i32, &str>> = some(err("bad"));
    /// assert_eq!(failure.transpose(), err("bad"));
    ///
    /// let empty: Option<Result<i32, &str>> = none();
    /// assert_eq!(empty.transpose(), ok(none()));
    /// ```
    #[inline]
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Self::Some(Result::Ok(value)) => Result::Ok(Option::Some(value)),
            Self::Some(Result::Err(error)) => Result::Err(error),
            Self::None => Result::Ok(Option::None),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Option<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into())
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    /// Converts a standard library `Option` into this crate's `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{some, Option};
    ///
    /// let converted: Option<i32> = Some(3).into();
    /// assert_eq!(converted, some(3));
    /// ```
    #[inline]
    fn from(option: std::option::Option<T>) -> Self {
        match option {
            std::option::Option::Some(value) => Self::Some(value),
            std::option::Option::None => Self::None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    /// Converts this crate's `Option` into a standard library `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::none;
    ///
    /// let converted: std::option::Option<i32> = none().into();
    /// assert_eq!(converted, None);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Option::Some(value) => Self::Some(value),
            Option::None => Self::None,
        }
    }
}
