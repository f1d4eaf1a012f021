//! The fault raised by unchecked accessors.
//!
//! `unwrap`, `expect` and their `Err`/`Left`/`Right` counterparts panic when
//! called on the variant that does not hold the requested payload. The panic
//! payload is the rendered text of an [`UnwrapError`], not the error value
//! itself. The type is public so callers can produce the same wording in their
//! own checks.

use std::fmt;

/// Describes an unchecked access on the wrong variant of a container.
///
/// When `message` came from the caller (as with `expect`), the error renders
/// as that message alone. Otherwise it renders as
/// ``called `Container::method()` on a `Variant` value`` followed by the
/// detail, if any.
///
/// # Examples
///
/// ```rust
/// use monadic::control::UnwrapError;
///
/// let error = UnwrapError::new("Option", "unwrap", "None");
/// assert_eq!(
///     format!("{error}"),
///     "called `Option::unwrap()` on a `None` value"
/// );
///
/// let error = UnwrapError::new("Result", "unwrap", "Err").with_detail("\"boom\"");
/// assert_eq!(
///     format!("{error}"),
///     "called `Result::unwrap()` on an `Err` value: \"boom\""
/// );
///
/// let error = UnwrapError::custom("Option", "expect", "None", "config missing");
/// assert_eq!(format!("{error}"), "config missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError {
    container: &'static str,
    method: &'static str,
    found: &'static str,
    detail: Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Detail {
    /// Default wording only.
    None,
    /// Default wording followed by the textual form of the opposing payload.
    Payload(String),
    /// Caller-supplied text that replaces the default wording.
    Message(String),
}

impl UnwrapError {
    /// Creates an error with the default wording and no detail.
    pub const fn new(container: &'static str, method: &'static str, found: &'static str) -> Self {
        Self {
            container,
            method,
            found,
            detail: Detail::None,
        }
    }

    /// Creates an error that renders as the caller-supplied `message` alone.
    pub fn custom(
        container: &'static str,
        method: &'static str,
        found: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            container,
            method,
            found,
            detail: Detail::Message(message.into()),
        }
    }

    /// Attaches the textual form of the payload that was found instead.
    ///
    /// Replaces any earlier detail, including a caller-supplied message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Detail::Payload(detail.into());
        self
    }

    /// The container type the accessor was called on (`"Option"`, `"Result"`, ...).
    pub const fn container(&self) -> &'static str {
        self.container
    }

    /// The accessor that was called.
    pub const fn method(&self) -> &'static str {
        self.method
    }

    /// The variant that was actually present.
    pub const fn found(&self) -> &'static str {
        self.found
    }

    /// Whether the rendered text is a caller-supplied message.
    pub const fn is_custom(&self) -> bool {
        matches!(self.detail, Detail::Message(_))
    }

    fn article(&self) -> &'static str {
        match self.found.chars().next() {
            Some('A' | 'E' | 'I' | 'O' | 'U') => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Detail::Message(message) => formatter.write_str(message),
            Detail::Payload(payload) => write!(
                formatter,
                "called `{}::{}()` on {} `{}` value: {}",
                self.container,
                self.method,
                self.article(),
                self.found,
                payload
            ),
            Detail::None => write!(
                formatter,
                "called `{}::{}()` on {} `{}` value",
                self.container,
                self.method,
                self.article(),
                self.found
            ),
        }
    }
}

impl std::error::Error for UnwrapError {}

/// Panics with the rendered `error`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn unwrap_failed(error: &UnwrapError) -> ! {
    panic!("{error}")
}
