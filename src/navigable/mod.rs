//! Array-backed navigable sets.
//!
//! - [`OrderedArraySet`]: a set stored as a flat sequence, queried with a
//!   caller-supplied [`Comparator`](crate::comparator::Comparator)
//! - [`Iter`] / [`IntoIter`]: ascending traversal in storage order
//! - [`DescendingIter`]: traversal from the last element back to the first
//!
//! # Examples
//!
//! ```rust
//! use navset::navigable::OrderedArraySet;
//!
//! let mut set = OrderedArraySet::new();
//! set.add(1);
//! set.add(3);
//! set.add(5);
//!
//! assert_eq!(set.poll_first(), Some(1));
//! assert_eq!(set.len(), 2);
//!
//! let descending: Vec<&i32> = set.descending_iter().collect();
//! assert_eq!(descending, vec![&5, &3]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer holding a set's comparator.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod iter;
mod ordered_array_set;

pub use iter::DescendingIter;
pub use iter::IntoIter;
pub use iter::Iter;
pub use ordered_array_set::OrderedArraySet;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(OrderedArraySet<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(OrderedArraySet<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(OrderedArraySet<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
