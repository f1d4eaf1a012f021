//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{none, some, Option};
//! use monadic::typeclass::Functor;
//!
//! let some_value: Option<i32> = some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), some("5".to_string()));
//!
//! // None is preserved
//! let none_value: Option<i32> = none();
//! assert_eq!(none_value.fmap(|n| n.to_string()), none());
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use crate::control::{Either, Option, Result};

/// A type class for types that can have a function mapped over their contents.
///
/// For the two-variant containers the function only runs on the variant that
/// carries an `Inner` value (`Some`, `Ok`, `Right`); the other variant is
/// passed through.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{ok, Result};
    /// use monadic::typeclass::Functor;
    ///
    /// let x: Result<i32, String> = ok(5);
    /// assert_eq!(x.fmap(|n| n * 2), ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay available afterwards, or when the inner
    /// type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{some, Option};
    /// use monadic::typeclass::Functor;
    ///
    /// let x: Option<String> = some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, some(5));
    /// assert!(x.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Result::Ok(value) => Result::Ok(function(value)),
            Result::Err(error) => Result::Err(error.clone()),
        }
    }
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Either::Left(value) => Either::Left(value.clone()),
            Either::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity::new(function(self.as_inner()))
    }
}
