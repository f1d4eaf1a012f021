//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types: we cannot write a trait
//! that abstracts over `Option<_>` and `Either<L, _>` as type constructors.
//! [`TypeConstructor`] works around this with a generic associated type, and
//! is the foundation of [`Functor`](super::Functor),
//! [`Applicative`](super::Applicative) and [`Monad`](super::Monad).
//!
//! # Example
//!
//! ```rust
//! use monadic::control::{none, some, Option};
//! use monadic::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = transform_type(some(42));
//! assert_eq!(none_string, none());
//! ```

use super::identity::Identity;
use crate::control::{Either, Option, Result};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result usable
    /// for further transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

/// The error type is fixed; only the success type varies.
impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

/// Right-biased: the left type is fixed.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}
