//! Zero-or-one element iterators shared by every container.
//!
//! `Option`, `Result` and `Either` each hold at most one "interesting" value,
//! so iterating over them yields either that value once or nothing at all.
//! [`Iter`] borrows the value and is what `iter()` returns; [`IntoIter`] owns it
//! and backs the `IntoIterator` implementations.
//!
//! Each call to `iter()` builds a new [`Iter`], so a container can be iterated
//! any number of times and every sequence starts fresh.

use std::iter::FusedIterator;

/// A borrowing iterator over the zero or one value held by a container.
///
/// # Examples
///
/// ```rust
/// use monadic::control::some;
///
/// let value = some('a');
/// let mut iterator = value.iter();
/// assert_eq!(iterator.next(), Some(&'a'));
/// assert_eq!(iterator.next(), None);
///
/// // A second call starts a new sequence.
/// assert_eq!(value.iter().count(), 1);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    slot: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) const fn new(slot: Option<&'a T>) -> Self {
        Self { slot }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { slot: self.slot }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slot.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.slot.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slot.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the zero or one value held by a container.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{err, ok, Result};
///
/// let success: Result<i32, String> = ok(7);
/// assert_eq!(success.into_iter().collect::<Vec<_>>(), vec![7]);
///
/// let failure: Result<i32, String> = err("bad".to_string());
/// assert_eq!(failure.into_iter().count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    slot: Option<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) const fn new(slot: Option<T>) -> Self {
        Self { slot }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slot.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.slot.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slot.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_iter_yields_single_value_then_stops() {
        let value = 42;
        let mut iterator = Iter::new(Some(&value));
        assert_eq!(iterator.len(), 1);
        assert_eq!(iterator.next(), Some(&42));
        assert_eq!(iterator.len(), 0);
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_iter_empty_yields_nothing() {
        let mut iterator: Iter<'_, i32> = Iter::new(None);
        assert_eq!(iterator.size_hint(), (0, Some(0)));
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_iter_clone_is_independent() {
        let value = "a";
        let mut first = Iter::new(Some(&value));
        let second = first.clone();
        assert_eq!(first.next(), Some(&"a"));
        assert_eq!(second.count(), 1);
    }

    #[rstest]
    fn test_into_iter_next_back() {
        let mut iterator = IntoIter::new(Some(String::from("x")));
        assert_eq!(iterator.next_back(), Some(String::from("x")));
        assert_eq!(iterator.next(), None);
    }
}
