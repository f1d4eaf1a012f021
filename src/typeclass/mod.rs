//! Type class traits shared by the containers of this crate.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over both sides of `Result` and `Either`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which lets `Functor` and `Monad` be written once for
//! [`Option`](crate::control::Option), [`Result`](crate::control::Result),
//! [`Either`](crate::control::Either) and [`Identity`].
//!
//! # Examples
//!
//! ## Writing code that works for any monad
//!
//! ```rust
//! use monadic::control::{err, ok, some, Result};
//! use monadic::typeclass::{Identity, Monad};
//!
//! fn increment<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     container.flat_map(|value| M::pure(value + 1))
//! }
//!
//! assert_eq!(increment(some(1)), some(2));
//! assert_eq!(increment::<Result<i32, &str>>(err("nope")), err("nope"));
//! assert_eq!(increment::<Result<i32, &str>>(ok(1)), ok(2));
//! assert_eq!(increment(Identity::new(41)), Identity::new(42));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
