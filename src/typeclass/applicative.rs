//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine multiple applicative values using a function (`map2`, `map3`)
//! - Create tuples of applicative values (`product`)
//! - Keep one side of a pair (`product_left`, `product_right`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{some, Option};
//! use monadic::typeclass::Applicative;
//!
//! // Lifting a pure value into Option context
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, some(42));
//!
//! // Combining two Option values
//! assert_eq!(some(1).map2(some(2), |x, y| x + y), some(3));
//!
//! // Creating a tuple of values
//! assert_eq!(some(1).product(some("hello")), some((1, "hello")));
//! ```

use super::functor::Functor;
use super::identity::Identity;
use crate::control::{Either, Option, Result};

/// A type class for types that support lifting values and combining contexts.
///
/// For the two-variant containers, the combination succeeds only when every
/// input carries a value. Otherwise the first empty or failed input (from left
/// to right) is the result.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{ok, Result};
    /// use monadic::typeclass::Applicative;
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    /// use monadic::typeclass::Applicative;
    ///
    /// let missing: Option<i32> = none();
    /// assert_eq!(some(1).map2(missing, |x, y| x + y), none());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    /// use monadic::typeclass::Applicative;
    ///
    /// assert_eq!(some(1).product_left(some(2)), some(1));
    ///
    /// let missing: Option<i32> = none();
    /// assert_eq!(some(1).product_left(missing), none());
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{none, some, Option};
    /// use monadic::typeclass::Applicative;
    ///
    /// assert_eq!(some(1).product_right(some(2)), some(2));
    ///
    /// let missing: Option<i32> = none();
    /// assert_eq!(missing.product_right(some(2)), none());
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{some, Option};
    /// use monadic::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = some(|x| x + 1);
    /// assert_eq!(function.apply(some(5)), some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Option::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Option::Some(b)) => Option::Some(function(a, b)),
            _ => Option::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Option::Some(b), Option::Some(c)) => Option::Some(function(a, b, c)),
            _ => Option::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Result::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Ok(a), Result::Ok(b)) => Result::Ok(function(a, b)),
            (Self::Err(error), _) | (_, Result::Err(error)) => Result::Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Ok(a), Result::Ok(b), Result::Ok(c)) => Result::Ok(function(a, b, c)),
            (Self::Err(error), _, _) | (_, Result::Err(error), _) | (_, _, Result::Err(error)) => {
                Result::Err(error)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(value), _) | (_, Either::Left(value)) => Either::Left(value),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => Either::Right(function(a, b, c)),
            (Self::Left(value), _, _) | (_, Either::Left(value), _) | (_, _, Either::Left(value)) => {
                Either::Left(value)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity::new(function(
            self.into_inner(),
            second.into_inner(),
            third.into_inner(),
        ))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity::new((self.into_inner())(other.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{err, left, none, ok, right, some};
    use rstest::rstest;

    // =========================================================================
    // Option<A> Tests
    // =========================================================================

    #[rstest]
    fn option_pure_creates_some() {
        let result: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(result, some(42));
    }

    #[rstest]
    #[case(some(1), some(2), some(3))]
    #[case(some(1), none(), none())]
    #[case(none(), some(2), none())]
    #[case(none(), none(), none())]
    fn option_map2(#[case] first: Option<i32>, #[case] second: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(first.map2(second, |x, y| x + y), expected);
    }

    #[rstest]
    fn option_map3_with_none() {
        assert_eq!(some(1).map3(none::<i32>(), some(3), |a, b, c| a + b + c), none());
    }

    // =========================================================================
    // Result<T, E> Tests
    // =========================================================================

    #[rstest]
    fn result_map2_returns_first_error() {
        let first: Result<i32, &str> = err("first");
        let second: Result<i32, &str> = err("second");
        assert_eq!(first.map2(second, |x, y| x + y), err("first"));
    }

    #[rstest]
    fn result_map3_all_ok() {
        let result: Result<i32, &str> = ok(1).map3(ok(2), ok(3), |a, b, c| a + b + c);
        assert_eq!(result, ok(6));
    }

    #[rstest]
    fn result_apply_with_error_value() {
        let function: Result<fn(i32) -> i32, &str> = ok(|x| x * 2);
        assert_eq!(function.apply(err::<i32, &str>("no value")), err("no value"));
    }

    // =========================================================================
    // Either<L, R> Tests
    // =========================================================================

    #[rstest]
    fn either_product_combines_rights() {
        let first: Either<&str, i32> = right(1);
        let second: Either<&str, char> = right('a');
        assert_eq!(first.product(second), right((1, 'a')));
    }

    #[rstest]
    fn either_product_right_propagates_left() {
        let first: Either<&str, i32> = left("stop");
        let second: Either<&str, char> = right('a');
        assert_eq!(first.product_right(second), left("stop"));
    }

    // =========================================================================
    // Identity<A> Tests
    // =========================================================================

    #[rstest]
    fn identity_map2_combines() {
        let result = Identity::new(2).map2(Identity::new(3), |a, b| a * b);
        assert_eq!(result, Identity::new(6));
    }
}
