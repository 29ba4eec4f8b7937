//! Error types for navigable sets.
//!
//! Both variants are precondition violations surfaced to the immediate
//! caller. Running out of elements during iteration is not an error: the
//! iterators simply return `None`.

/// Errors returned by [`OrderedArraySet`](crate::navigable::OrderedArraySet).
///
/// # Examples
///
/// ```rust
/// use navset::error::SetError;
/// use navset::navigable::OrderedArraySet;
///
/// let set: OrderedArraySet<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(set.sub_set(&5, &2).unwrap_err(), SetError::InvalidRange);
///
/// let empty: OrderedArraySet<i32> = OrderedArraySet::new();
/// assert_eq!(empty.first(), Err(SetError::EmptyCollection));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetError {
    /// The lower bound of a range view compares greater than its upper bound.
    InvalidRange,
    /// `first` or `last` was called on a set with no elements.
    EmptyCollection,
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange => {
                formatter.write_str("invalid range: lower bound is greater than upper bound")
            }
            Self::EmptyCollection => formatter.write_str("set is empty"),
        }
    }
}

impl std::error::Error for SetError {}
