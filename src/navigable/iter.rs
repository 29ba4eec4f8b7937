//! Iterators over [`OrderedArraySet`](super::OrderedArraySet).

use std::iter::FusedIterator;

/// Iterator over references to the elements of a set, in storage order.
///
/// Created by [`OrderedArraySet::iter`](super::OrderedArraySet::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(elements: &'a [T]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator walking a set from its last element back to its first.
///
/// The cursor counts the elements still to be produced. Once it reaches
/// zero the iterator is exhausted and keeps returning `None`.
///
/// Created by [`OrderedArraySet::descending_iter`](super::OrderedArraySet::descending_iter).
#[derive(Debug, Clone)]
pub struct DescendingIter<'a, T> {
    elements: &'a [T],
    cursor: usize,
}

impl<'a, T> DescendingIter<'a, T> {
    pub(super) const fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            cursor: elements.len(),
        }
    }
}

impl<'a, T> Iterator for DescendingIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor.checked_sub(1)?;
        self.cursor = index;
        self.elements.get(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor, Some(self.cursor))
    }
}

impl<T> ExactSizeIterator for DescendingIter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.cursor
    }
}

impl<T> FusedIterator for DescendingIter<'_, T> {}

/// Owning iterator over the elements of a set, in storage order.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(elements: Vec<T>) -> Self {
        Self {
            inner: elements.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
