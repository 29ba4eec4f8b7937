//! Total orders supplied to a set at construction.
//!
//! A [`Comparator`] is a three-way comparison over `T`. Sets never fall back
//! to a global ordering: every set holds the comparator it was built with and
//! hands the same instance to every view derived from it.
//!
//! - [`NaturalOrder`]: delegates to [`Ord`]
//! - [`Reversed`]: inverts another comparator
//! - any `Fn(&T, &T) -> Ordering`
//!
//! # Examples
//!
//! ```rust
//! use navset::comparator::{Comparator, NaturalOrder, Reversed};
//! use std::cmp::Ordering;
//!
//! let natural = NaturalOrder::<i32>::default();
//! assert_eq!(natural.compare(&1, &2), Ordering::Less);
//!
//! let reversed = Reversed::new(natural);
//! assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
//!
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert!(by_length.less(&"ab", &"abc"));
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A total order over `T`.
///
/// Only [`compare`](Comparator::compare) is required; the predicates are
/// derived from it and exist so that call sites read as the relation they test.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if `left` and `right` are equal under this order.
    #[inline]
    fn equal(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }

    /// Returns `true` if `left` sorts strictly before `right`.
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    /// Returns `true` if `left` does not sort after `right`.
    #[inline]
    fn less_or_equal(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Greater
    }

    /// Returns `true` if `left` sorts strictly after `right`.
    #[inline]
    fn greater(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    /// Returns `true` if `left` does not sort before `right`.
    #[inline]
    fn greater_or_equal(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Less
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// A zero-sized comparator that delegates to the [`Ord`] implementation of `T`.
pub struct NaturalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> NaturalOrder<T> {
    /// Creates the natural order of `T`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for NaturalOrder<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for NaturalOrder<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NaturalOrder<T> {}

impl<T: ?Sized> std::fmt::Debug for NaturalOrder<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("NaturalOrder")
    }
}

impl<T: ?Sized + Ord> Comparator<T> for NaturalOrder<T> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// A comparator that inverts the order of another comparator.
///
/// # Examples
///
/// ```rust
/// use navset::comparator::{NaturalOrder, Reversed};
/// use navset::navigable::OrderedArraySet;
///
/// let mut set = OrderedArraySet::with_comparator(Reversed::new(NaturalOrder::<i32>::new()));
/// set.add(9);
/// set.add(5);
/// set.add(1);
///
/// assert_eq!(set.higher(&5), Some(&1));
/// assert_eq!(set.lower(&5), Some(&9));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(C);

impl<C> Reversed<C> {
    /// Wraps `comparator`, inverting its order.
    #[inline]
    #[must_use]
    pub const fn new(comparator: C) -> Self {
        Self(comparator)
    }

    /// Returns the wrapped comparator.
    #[inline]
    pub const fn inner(&self) -> &C {
        &self.0
    }

    /// Unwraps the inner comparator.
    #[inline]
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}
