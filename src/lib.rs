//! # monadic
//!
//! Algebraic containers for optional values, recoverable failure and
//! sequential composition without exceptions or null references.
//!
//! ## Overview
//!
//! - **Containers**: [`Option`](control::Option), [`Result`](control::Result),
//!   [`Either`](control::Either) and [`Identity`](typeclass::Identity)
//! - **Type Classes**: Functor, Applicative, Monad and Bifunctor, implemented
//!   for every container
//!
//! Every container is an immutable value. Combinators consume the receiver and
//! produce a new container; nothing is mutated in place and no operation
//! performs I/O.
//!
//! ## Feature Flags
//!
//! - `control`: the containers themselves (enabled by default)
//! - `typeclass`: type class traits and `Identity` (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for every container
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! fn get_user_avatar_url(has_url: bool) -> Option<String> {
//!     if has_url { some("http://x".to_string()) } else { none() }
//! }
//!
//! fn extract_host(url: String) -> Option<String> {
//!     url.strip_prefix("http://").map(str::to_string).into()
//! }
//!
//! let host = get_user_avatar_url(true)
//!     .and_then(extract_host)
//!     .unwrap_or("no-host".to_string());
//! assert_eq!(host, "x");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their factory functions and the type classes.
/// Importing the prelude shadows the standard library's `Option` and `Result`
/// type names; the standard variants (`Some`, `Ok`, ...) are not shadowed, so
/// use the factories [`some`](crate::control::some), [`ok`](crate::control::ok)
/// and friends to build this crate's containers.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
///
/// let value: Option<i32> = some(1);
/// assert!(value.is_some());
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;
