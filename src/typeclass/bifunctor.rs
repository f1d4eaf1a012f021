//! Mapping over both sides of a two-variant container.
//!
//! [`Either`] and [`Result`] each carry one of two payloads. [`Bifunctor`]
//! gives them a shared way to transform either payload while keeping the
//! variant. The impls forward to the containers' own `map_left`,
//! `map_right`, `map` and `map_err`, so both spellings behave identically.
//!
//! For `Result<T, E>` the trait parameters are `<E, T>`: `first` touches the
//! error and `second` touches the success value, matching the left/right
//! layout of `Either<L, R>`.
//!
//! Implementations keep these equalities:
//!
//! ```text
//! value.bimap(|a| a, |b| b)        == value
//! value.bimap(f, g)                == value.first(f).second(g)
//! value.first(f).second(g)         == value.second(g).first(f)
//! ```
//!
//! ```rust
//! use monadic::control::{err, ok, Result};
//! use monadic::typeclass::{Bifunctor, Functor};
//!
//! let failure: Result<i32, String> = err("boom".to_string());
//! assert_eq!(failure.bimap(|e: String| e.len(), |x: i32| x * 2), err(4));
//!
//! // `second` and `fmap` agree on the success side.
//! let success: Result<i32, String> = ok(21);
//! assert_eq!(success.clone().second(|x| x * 2), success.fmap(|x| x * 2));
//! ```

use crate::control::{Either, Result};

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See module-level documentation for laws and detailed examples.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Bifunctor;
/// use monadic::control::Either;
///
/// let either: Either<i32, String> = Either::Left(42);
/// let result = either.bimap(|x| x * 2, |s: String| s.len());
/// assert_eq!(result, Either::Left(84));
/// ```
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `Either<L, R>`, `Target<C, D> = Either<C, D>`.
    /// For `Result<T, E>` (implemented as `Bifunctor<E, T>`), `Target<C, D> = Result<D, C>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{right, Either};
    /// use monadic::typeclass::Bifunctor;
    ///
    /// let either: Either<i32, String> = right("hello".to_string());
    /// let result = Bifunctor::bimap(either, |x: i32| x * 2, |s: String| s.len());
    /// assert_eq!(result, right(5));
    /// ```
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Bifunctor;
    /// use monadic::control::Either;
    ///
    /// let either: Either<i32, String> = Either::Left(42);
    /// let result = either.first(|x| x.to_string());
    /// assert_eq!(result, Either::Left("42".to_string()));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Bifunctor;
    /// use monadic::control::Either;
    ///
    /// let either: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = either.second(|s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without consuming self.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{err, Result};
    /// use monadic::typeclass::Bifunctor;
    ///
    /// let failure: Result<i32, String> = err("boom".to_string());
    /// let result = failure.bimap_ref(|e| e.len(), |x| x * 2);
    /// assert!(failure.is_err()); // still available
    /// assert_eq!(result, err(4));
    /// ```
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Applies a function to a reference of the first type parameter.
    ///
    /// Requires `B: Clone` because the untransformed value must be cloned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Bifunctor;
    /// use monadic::control::Either;
    ///
    /// let either: Either<String, i32> = Either::Left("hello".to_string());
    /// let result = either.first_ref(|s| s.len());
    /// assert!(either.is_left()); // either is still available
    /// assert_eq!(result, Either::Left(5));
    /// ```
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, |b| b.clone())
    }

    /// Applies a function to a reference of the second type parameter.
    ///
    /// Requires `A: Clone` because the untransformed value must be cloned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Bifunctor;
    /// use monadic::control::Either;
    ///
    /// let either: Either<String, i32> = Either::Right(42);
    /// let result = either.second_ref(|n| n * 2);
    /// assert!(either.is_right()); // either is still available
    /// assert_eq!(result, Either::Right(84));
    /// ```
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(|a| a.clone(), function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Either<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Either<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map_right(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }

    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Either<C, R>
    where
        R: Clone,
        F: FnOnce(&L) -> C,
    {
        self.as_ref().map_left(function).map_right(R::clone)
    }

    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Either<L, D>
    where
        L: Clone,
        G: FnOnce(&R) -> D,
    {
        self.as_ref().map_left(L::clone).map_right(function)
    }
}

/// `first` maps the error, `second` maps the success value.
impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        self.map(second_function).map_err(first_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Result<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_err(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Result<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().map(second_function).map_err(first_function)
    }

    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Result<T, C>
    where
        T: Clone,
        F: FnOnce(&E) -> C,
    {
        self.as_ref().map(T::clone).map_err(function)
    }

    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Result<D, E>
    where
        E: Clone,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().map(function).map_err(E::clone)
    }
}
