//! # navset
//!
//! An array-backed navigable set: elements live in a flat, growable sequence
//! and every query is answered against that sequence with a caller-supplied
//! three-way comparator.
//!
//! ## Overview
//!
//! - **Comparators**: [`Comparator`](comparator::Comparator) trait, natural and
//!   reversed orders, and closures as comparators
//! - **Navigation**: `lower`, `floor`, `ceiling`, `higher`, `first`, `last`
//! - **Range views**: `sub_set`, `head_set`, `tail_set`, `range`, each
//!   materialized as a new, independently owned set
//! - **Traversal**: ascending and descending iterators, `descending_set`
//! - **Extremes**: `poll_first` and `poll_last`
//!
//! ## Insertion order matters
//!
//! [`OrderedArraySet::add`](navigable::OrderedArraySet::add) appends to the end
//! of the backing sequence. It neither sorts nor deduplicates. Navigation and
//! range queries are only meaningful while the sequence is ascending under the
//! comparator, so callers are expected to add elements in ascending order.
//!
//! ## Feature Flags
//!
//! - `arc`: share the comparator through `Arc` instead of `Rc`
//! - `serde`: `Serialize`/`Deserialize` for sets
//!
//! ## Example
//!
//! ```rust
//! use navset::prelude::*;
//!
//! let set: OrderedArraySet<i32> = [1, 3, 5, 7, 9].into_iter().collect();
//!
//! assert_eq!(set.lower(&5), Some(&3));
//! assert_eq!(set.floor(&5), Some(&5));
//! assert_eq!(set.ceiling(&4), Some(&5));
//! assert_eq!(set.higher(&9), None);
//!
//! let head = set.head_set_with(&7, false);
//! assert_eq!(head.as_slice(), &[1, 3, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use navset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::error::*;
    pub use crate::navigable::*;
}

pub mod comparator;
pub mod error;
pub mod navigable;
