//! Containers for optional values, fallible computations and alternatives.
//!
//! This module provides the closed, immutable containers of the crate:
//!
//! - [`Option`]: a value, or nothing
//! - [`Result`]: a success value, or a failure value
//! - [`Either`]: a value of one of two types (right-biased)
//!
//! together with their factory functions ([`some`], [`none`], [`ok`], [`err`],
//! [`left`], [`right`]), the zero-or-one element iterators they share, and the
//! [`UnwrapError`] raised by the unchecked accessors.
//!
//! # Examples
//!
//! ## Composing optional lookups
//!
//! ```rust
//! use monadic::control::{none, some, Option};
//!
//! fn get_user_avatar_url(has_url: bool) -> Option<String> {
//!     if has_url { some("http://x".to_string()) } else { none() }
//! }
//!
//! fn extract_host(url: String) -> Option<String> {
//!     url.strip_prefix("http://").map(str::to_string).into()
//! }
//!
//! assert_eq!(get_user_avatar_url(true).and_then(extract_host).unwrap_or("no-host".to_string()), "x");
//! assert_eq!(get_user_avatar_url(false).and_then(extract_host).unwrap_or("no-host".to_string()), "no-host");
//! ```
//!
//! ## Moving between Option and Result
//!
//! ```rust
//! use monadic::control::{err, none, ok, some, Option, Result};
//!
//! let found: Result<i32, &str> = some(1).ok_or("missing");
//! assert_eq!(found.ok(), some(1));
//!
//! let missing: Result<i32, &str> = none().ok_or("missing");
//! assert_eq!(missing.err(), some("missing"));
//! ```

mod either;
mod error;
mod iter;
mod option;
mod result;

pub use either::{Either, left, right};
pub use error::UnwrapError;
pub use iter::{IntoIter, Iter};
pub use option::{Option, OptionKind, none, some};
pub use result::{Result, ResultKind, err, ok};

static_assertions::assert_impl_all!(Option<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Result<String, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync);
static_assertions::assert_not_impl_any!(Option<std::rc::Rc<i32>>: Send, Sync);
