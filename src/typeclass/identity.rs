//! Identity wrapper type - the identity functor.
//!
//! `Identity` always holds exactly one value and adds no behavior of its own.
//! It is the smallest type that satisfies the `Functor`, `Applicative` and
//! `Monad` contracts, which makes it the reference model when checking the
//! laws of the other containers.

use std::fmt;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.map(|x| x + 1).into_inner(), 43);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies `function` to the wrapped value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Applies `function` to the wrapped value and returns its result as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Identity;
    ///
    /// let doubled = Identity::new(21).bind(|x| Identity::new(x * 2));
    /// assert_eq!(doubled, Identity::new(42));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    /// Applies the function wrapped in `function` to the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Identity;
    ///
    /// let increment = Identity::new(|x: i32| x + 1);
    /// assert_eq!(Identity::new(1).ap(increment), Identity::new(2));
    /// ```
    #[inline]
    pub fn ap<B, F>(self, function: Identity<F>) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function.0(self.0))
    }

    /// Discards `other` and keeps this value.
    #[inline]
    pub fn take_left<B>(self, _other: Identity<B>) -> Self {
        self
    }

    /// Discards this value and keeps `other`.
    #[inline]
    pub fn take_right<B>(self, other: Identity<B>) -> Identity<B> {
        other
    }
}

impl<A> Identity<Identity<A>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Identity;
    ///
    /// assert_eq!(Identity::new(Identity::new(7)).join(), Identity::new(7));
    /// ```
    #[inline]
    pub fn join(self) -> Identity<A> {
        self.0
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
