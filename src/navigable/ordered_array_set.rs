//! Navigable set backed by a flat, growable sequence.
//!
//! This module provides [`OrderedArraySet`], a set that keeps its elements in
//! a `Vec` and answers every navigation and range query with a linear pass
//! over that `Vec`, using the comparator supplied at construction.
//!
//! # Ordering Contract
//!
//! The set does not sort. [`add`](OrderedArraySet::add) appends to the end of
//! the backing sequence and accepts duplicates. All navigation queries
//! (`lower`, `floor`, `ceiling`, `higher`, `first`, `last`) and all range views
//! assume the sequence is ascending under the comparator. Adding elements in
//! ascending order keeps every query correct; any other insertion order makes
//! the answers unspecified (but never unsafe and never a panic).
//!
//! # Views Are Copies
//!
//! `sub_set`, `head_set`, `tail_set`, `range` and `descending_set` build a new,
//! independently owned set holding clones of the selected elements. Mutating a
//! view never affects its source and vice versa. Every view shares the
//! source's comparator instance.
//!
//! # Time Complexity
//!
//! | Operation                           | Complexity      |
//! |-------------------------------------|-----------------|
//! | `add`                               | O(1) amortized  |
//! | `poll_last`                         | O(1)            |
//! | `poll_first`                        | O(n)            |
//! | `lower` / `floor` / `ceiling` / `higher` | O(n)       |
//! | `first` / `last` / `len`            | O(1)            |
//! | `sub_set` / `head_set` / `tail_set` | O(n)            |
//! | `descending_set`                    | O(n)            |

use super::ReferenceCounter;
use super::iter::{DescendingIter, IntoIter, Iter};
use crate::comparator::{Comparator, NaturalOrder};
use crate::error::SetError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Bound, RangeBounds};

/// A set stored as a flat sequence and navigated with a comparator.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The comparator. Defaults to [`NaturalOrder<T>`].
///
/// # Examples
///
/// ```rust
/// use navset::navigable::OrderedArraySet;
///
/// let set = OrderedArraySet::from_vec(vec![1, 3, 5, 7, 9]);
///
/// assert_eq!(set.lower(&5), Some(&3));
/// assert_eq!(set.ceiling(&4), Some(&5));
///
/// let tail = set.tail_set(&5);
/// assert_eq!(tail.as_slice(), &[5, 7, 9]);
///
/// let middle = set.sub_set_with(&3, false, &7, true).unwrap();
/// assert_eq!(middle.as_slice(), &[5, 7]);
/// ```
pub struct OrderedArraySet<T, C = NaturalOrder<T>> {
    elements: Vec<T>,
    comparator: ReferenceCounter<C>,
}

impl<T: Ord> OrderedArraySet<T, NaturalOrder<T>> {
    /// Creates an empty set ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let set: OrderedArraySet<i32> = OrderedArraySet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder::new())
    }

    /// Creates a set ordered by `T`'s [`Ord`] implementation, holding
    /// `elements` exactly as given. No sort is applied.
    #[inline]
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with_comparator(elements, NaturalOrder::new())
    }
}

impl<T, C: Comparator<T>> OrderedArraySet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let mut set = OrderedArraySet::with_comparator(|left: &&str, right: &&str| {
    ///     left.len().cmp(&right.len())
    /// });
    /// set.add("a");
    /// set.add("abc");
    ///
    /// assert_eq!(set.higher(&"ab"), Some(&"abc"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::from_vec_with_comparator(Vec::new(), comparator)
    }

    /// Creates a set ordered by `comparator`, holding `elements` exactly as
    /// given.
    ///
    /// The sequence is used as-is: it is neither sorted nor deduplicated, so
    /// it should already be ascending under `comparator`.
    #[inline]
    #[must_use]
    pub fn from_vec_with_comparator(elements: Vec<T>, comparator: C) -> Self {
        Self::from_shared(elements, ReferenceCounter::new(comparator))
    }

    #[inline]
    const fn from_shared(elements: Vec<T>, comparator: ReferenceCounter<C>) -> Self {
        Self {
            elements,
            comparator,
        }
    }

    /// Returns the comparator this set was constructed with.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of elements, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `element` to the end of the backing sequence.
    ///
    /// Always returns `true`. No duplicate check is made and the position is
    /// not adjusted, so callers that rely on navigation queries must add
    /// elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let mut set = OrderedArraySet::new();
    /// assert!(set.add(1));
    /// assert!(set.add(1));
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    pub fn add(&mut self, element: T) -> bool {
        self.elements.push(element);
        true
    }

    /// Removes and returns the element at the front of the sequence, or
    /// `None` if the set is empty.
    pub fn poll_first(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.remove(0))
        }
    }

    /// Removes and returns the element at the back of the sequence, or
    /// `None` if the set is empty.
    #[inline]
    pub fn poll_last(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Returns the first (lowest) element.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::EmptyCollection`] if the set is empty.
    #[inline]
    pub fn first(&self) -> Result<&T, SetError> {
        self.elements.first().ok_or(SetError::EmptyCollection)
    }

    /// Returns the last (highest) element.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::EmptyCollection`] if the set is empty.
    #[inline]
    pub fn last(&self) -> Result<&T, SetError> {
        self.elements.last().ok_or(SetError::EmptyCollection)
    }

    /// Returns the greatest element strictly less than `element`, or `None`
    /// if there is no such element.
    ///
    /// If the first element is not below `element` the answer is `None`.
    /// Otherwise the scan stops at the first element that is equal to or
    /// greater than `element` and its predecessor is returned; when no such
    /// element exists the last element is the answer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let set = OrderedArraySet::from_vec(vec![1, 3, 5, 7, 9]);
    /// assert_eq!(set.lower(&5), Some(&3));
    /// assert_eq!(set.lower(&6), Some(&5));
    /// assert_eq!(set.lower(&100), Some(&9));
    /// assert_eq!(set.lower(&1), None);
    /// ```
    pub fn lower(&self, element: &T) -> Option<&T> {
        let first = self.elements.first()?;
        if !self.comparator.less(first, element) {
            return None;
        }
        let boundary = self
            .elements
            .iter()
            .position(|candidate| self.comparator.greater_or_equal(candidate, element))
            .unwrap_or(self.elements.len());
        boundary
            .checked_sub(1)
            .and_then(|index| self.elements.get(index))
    }

    /// Returns the greatest element less than or equal to `element`, or
    /// `None` if there is no such element.
    ///
    /// An element equal to `element` (the first one found) is returned as-is;
    /// otherwise this is [`lower`](Self::lower).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let set = OrderedArraySet::from_vec(vec![1, 3, 5, 7, 9]);
    /// assert_eq!(set.floor(&5), Some(&5));
    /// assert_eq!(set.floor(&4), Some(&3));
    /// assert_eq!(set.floor(&0), None);
    /// ```
    pub fn floor(&self, element: &T) -> Option<&T> {
        self.find_equal(element).or_else(|| self.lower(element))
    }

    /// Returns the least element greater than or equal to `element`, or
    /// `None` if there is no such element.
    ///
    /// An element equal to `element` (the first one found) is returned as-is;
    /// otherwise this is [`higher`](Self::higher).
    pub fn ceiling(&self, element: &T) -> Option<&T> {
        self.find_equal(element).or_else(|| self.higher(element))
    }

    /// Returns the least element strictly greater than `element`, or `None`
    /// if there is no such element.
    ///
    /// If the last element is not above `element` the answer is `None`;
    /// otherwise it is the first element in storage order that compares
    /// greater than `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let set = OrderedArraySet::from_vec(vec![1, 3, 5, 7, 9]);
    /// assert_eq!(set.higher(&5), Some(&7));
    /// assert_eq!(set.higher(&0), Some(&1));
    /// assert_eq!(set.higher(&9), None);
    /// ```
    pub fn higher(&self, element: &T) -> Option<&T> {
        let last = self.elements.last()?;
        if !self.comparator.greater(last, element) {
            return None;
        }
        self.elements
            .iter()
            .find(|candidate| self.comparator.greater(candidate, element))
    }

    /// Returns `true` if an element equal to `element` under the comparator
    /// is present.
    pub fn contains(&self, element: &T) -> bool {
        self.find_equal(element).is_some()
    }

    /// Removes the first element equal to `element` under the comparator.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        let comparator = &self.comparator;
        self.elements
            .iter()
            .position(|candidate| comparator.equal(candidate, element))
            .map(|index| self.elements.remove(index))
            .is_some()
    }

    /// Removes every element, keeping the comparator.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the backing sequence in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the set, returning the backing sequence.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns an iterator over the elements in storage (ascending) order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements)
    }

    /// Returns an iterator from the last element back to the first.
    ///
    /// The iterator ends with `None` once the first element has been
    /// produced; it never panics when driven past the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let set = OrderedArraySet::from_vec(vec![1, 2, 3]);
    /// let mut descending = set.descending_iter();
    /// assert_eq!(descending.next(), Some(&3));
    /// assert_eq!(descending.next(), Some(&2));
    /// assert_eq!(descending.next(), Some(&1));
    /// assert_eq!(descending.next(), None);
    /// ```
    #[inline]
    pub fn descending_iter(&self) -> DescendingIter<'_, T> {
        DescendingIter::new(&self.elements)
    }

    fn find_equal(&self, element: &T) -> Option<&T> {
        self.elements
            .iter()
            .find(|candidate| self.comparator.equal(candidate, element))
    }

    fn satisfies_lower(&self, candidate: &T, bound: Bound<&T>) -> bool {
        match bound {
            Bound::Included(from) => self.comparator.greater_or_equal(candidate, from),
            Bound::Excluded(from) => self.comparator.greater(candidate, from),
            Bound::Unbounded => true,
        }
    }

    fn satisfies_upper(&self, candidate: &T, bound: Bound<&T>) -> bool {
        match bound {
            Bound::Included(to) => self.comparator.less_or_equal(candidate, to),
            Bound::Excluded(to) => self.comparator.less(candidate, to),
            Bound::Unbounded => true,
        }
    }
}

impl<T: Clone, C: Comparator<T>> OrderedArraySet<T, C> {
    /// Returns a copy of the backing sequence.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Builds a new set holding this set's elements from last to first.
    ///
    /// The copy shares this set's comparator, so its storage order is the
    /// reverse of what the comparator considers ascending. Applying
    /// `descending_set` twice restores the original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let set = OrderedArraySet::from_vec(vec![1, 2, 3]);
    /// let reversed = set.descending_set();
    /// assert_eq!(reversed.as_slice(), &[3, 2, 1]);
    /// assert_eq!(reversed.descending_set(), set);
    /// ```
    #[must_use]
    pub fn descending_set(&self) -> Self {
        let reversed: Vec<T> = self.descending_iter().cloned().collect();
        self.materialize("descending_set", reversed)
    }

    /// Returns a new set holding the elements between `from` and `to`.
    ///
    /// `from_inclusive` and `to_inclusive` decide independently whether each
    /// bound itself may be selected. Every element is tested.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidRange`] if `from` compares greater than `to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::error::SetError;
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let set = OrderedArraySet::from_vec(vec![1, 3, 5, 7, 9]);
    ///
    /// let both = set.sub_set_with(&3, true, &7, true).unwrap();
    /// assert_eq!(both.as_slice(), &[3, 5, 7]);
    ///
    /// let neither = set.sub_set_with(&3, false, &7, false).unwrap();
    /// assert_eq!(neither.as_slice(), &[5]);
    ///
    /// assert_eq!(set.sub_set_with(&5, true, &2, true), Err(SetError::InvalidRange));
    /// ```
    pub fn sub_set_with(
        &self,
        from: &T,
        from_inclusive: bool,
        to: &T,
        to_inclusive: bool,
    ) -> Result<Self, SetError> {
        let lower = if from_inclusive {
            Bound::Included(from)
        } else {
            Bound::Excluded(from)
        };
        let upper = if to_inclusive {
            Bound::Included(to)
        } else {
            Bound::Excluded(to)
        };
        self.range((lower, upper))
    }

    /// Returns a new set holding the elements in `[from, to)`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidRange`] if `from` compares greater than `to`.
    pub fn sub_set(&self, from: &T, to: &T) -> Result<Self, SetError> {
        self.sub_set_with(from, true, to, false)
    }

    /// Returns a new set holding the elements within `range`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidRange`] if both bounds are present and the
    /// start compares greater than the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navset::navigable::OrderedArraySet;
    ///
    /// let set = OrderedArraySet::from_vec(vec![1, 3, 5, 7, 9]);
    /// assert_eq!(set.range(3..=7).unwrap().as_slice(), &[3, 5, 7]);
    /// assert_eq!(set.range(..5).unwrap().as_slice(), &[1, 3]);
    /// assert!(set.range(7..3).is_err());
    /// ```
    pub fn range<R>(&self, range: R) -> Result<Self, SetError>
    where
        R: RangeBounds<T>,
    {
        let lower = range.start_bound();
        let upper = range.end_bound();
        if let (
            Bound::Included(from) | Bound::Excluded(from),
            Bound::Included(to) | Bound::Excluded(to),
        ) = (lower, upper)
            && self.comparator.greater(from, to)
        {
            return Err(SetError::InvalidRange);
        }

        let selected: Vec<T> = self
            .elements
            .iter()
            .filter(|candidate| {
                self.satisfies_lower(candidate, lower) && self.satisfies_upper(candidate, upper)
            })
            .cloned()
            .collect();
        Ok(self.materialize("range", selected))
    }

    /// Returns a new set holding the leading elements below `to` (or equal
    /// to it when `inclusive`).
    ///
    /// The scan stops at the first element outside the bound, relying on the
    /// sequence being ascending.
    pub fn head_set_with(&self, to: &T, inclusive: bool) -> Self {
        let upper = if inclusive {
            Bound::Included(to)
        } else {
            Bound::Excluded(to)
        };
        let selected: Vec<T> = self
            .elements
            .iter()
            .take_while(|candidate| self.satisfies_upper(candidate, upper))
            .cloned()
            .collect();
        self.materialize("head_set", selected)
    }

    /// Returns a new set holding the leading elements strictly below `to`.
    #[inline]
    pub fn head_set(&self, to: &T) -> Self {
        self.head_set_with(to, false)
    }

    /// Returns a new set holding every element above `from` (or equal to it
    /// when `inclusive`).
    pub fn tail_set_with(&self, from: &T, inclusive: bool) -> Self {
        let lower = if inclusive {
            Bound::Included(from)
        } else {
            Bound::Excluded(from)
        };
        let selected: Vec<T> = self
            .elements
            .iter()
            .filter(|candidate| self.satisfies_lower(candidate, lower))
            .cloned()
            .collect();
        self.materialize("tail_set", selected)
    }

    /// Returns a new set holding every element greater than or equal to `from`.
    #[inline]
    pub fn tail_set(&self, from: &T) -> Self {
        self.tail_set_with(from, true)
    }

    fn materialize(&self, operation: &'static str, selected: Vec<T>) -> Self {
        tracing::trace!(
            target: "navset",
            operation = operation,
            source_len = self.elements.len(),
            selected_len = selected.len(),
            "materialized set view"
        );
        Self::from_shared(selected, ReferenceCounter::clone(&self.comparator))
    }
}

impl<T: Clone, C> Clone for OrderedArraySet<T, C> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }
}

impl<T, C: Comparator<T> + Default> Default for OrderedArraySet<T, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedArraySet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for OrderedArraySet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl<T: PartialEq, C> PartialEq for OrderedArraySet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, C> Eq for OrderedArraySet<T, C> {}

impl<T: Hash, C> Hash for OrderedArraySet<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedArraySet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for OrderedArraySet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedArraySet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.elements)
    }
}

impl<T, C> IntoIterator for OrderedArraySet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C> serde::Serialize for OrderedArraySet<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedArraySetVisitor<T, C> {
    marker: std::marker::PhantomData<fn() -> (T, C)>,
}

#[cfg(feature = "serde")]
impl<T, C> OrderedArraySetVisitor<T, C> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::de::Visitor<'de> for OrderedArraySetVisitor<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Default,
{
    type Value = OrderedArraySet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Elements keep their serialized order, exactly as `add` would.
        let mut set = OrderedArraySet::default();
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for OrderedArraySet<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedArraySetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
