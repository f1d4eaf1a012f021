//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{none, some, Option};
//! use monadic::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     Option::from(s.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| some(n * 2));
//! assert_eq!(result, some(84));
//!
//! assert_eq!(some("-1").flat_map(parse_positive), none());
//! ```

use super::applicative::Applicative;
use super::identity::Identity;
use crate::control::{Either, Option, Result};

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next.
/// Once a container is empty or failed, later steps are skipped and their
/// functions are never called.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, ok, Result};
    /// use monadic::typeclass::Monad;
    ///
    /// let halve = |n: i32| -> Result<i32, String> {
    ///     if n % 2 == 0 { ok(n / 2) } else { err(format!("{n} is odd")) }
    /// };
    ///
    /// assert_eq!(ok(8).flat_map(halve).flat_map(halve), ok(2));
    /// assert_eq!(ok(6).flat_map(halve).flat_map(halve), err("3 is odd".to_string()));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    ///
    /// The containers of this crate also carry an inherent `and_then`, which
    /// takes precedence in method-call syntax; this one is reached through
    /// generic code bounded by `Monad`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is empty or failed, that propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(some(5).then(some("hello")), some("hello"));
    ///
    /// let missing: Option<i32> = none();
    /// assert_eq!(missing.then(some("hello")), none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        // Inherent and_then
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.bind(function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        self.bind(function)
    }
}
