//! Property-based tests for OrderedArraySet laws.
//!
//! Every set here is built by appending an ascending sequence, which is the
//! usage the navigation queries are defined for. Each law is checked against
//! a brute-force answer computed from the plain sequence.

use navset::navigable::OrderedArraySet;
use proptest::prelude::*;

fn ascending(elements: Vec<i32>) -> Vec<i32> {
    let mut elements = elements;
    elements.sort_unstable();
    elements
}

fn build(elements: &[i32]) -> OrderedArraySet<i32> {
    let mut set = OrderedArraySet::new();
    for element in elements {
        set.add(*element);
    }
    set
}

fn ascending_elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40).prop_map(ascending)
}

// =============================================================================
// Navigation Laws
// Description: each query returns the closest element on its side of the probe
// =============================================================================

proptest! {
    #[test]
    fn prop_lower_is_greatest_strictly_less(elements in ascending_elements(), probe in -60i32..60) {
        let set = build(&elements);
        let expected = elements.iter().filter(|element| **element < probe).max();
        prop_assert_eq!(set.lower(&probe), expected);
    }

    #[test]
    fn prop_floor_is_greatest_less_or_equal(elements in ascending_elements(), probe in -60i32..60) {
        let set = build(&elements);
        let expected = elements.iter().filter(|element| **element <= probe).max();
        prop_assert_eq!(set.floor(&probe), expected);
    }

    #[test]
    fn prop_ceiling_is_least_greater_or_equal(elements in ascending_elements(), probe in -60i32..60) {
        let set = build(&elements);
        let expected = elements.iter().filter(|element| **element >= probe).min();
        prop_assert_eq!(set.ceiling(&probe), expected);
    }

    #[test]
    fn prop_higher_is_least_strictly_greater(elements in ascending_elements(), probe in -60i32..60) {
        let set = build(&elements);
        let expected = elements.iter().filter(|element| **element > probe).min();
        prop_assert_eq!(set.higher(&probe), expected);
    }
}

// =============================================================================
// Poll Law
// Description: polling a non-empty set removes exactly one element
// =============================================================================

proptest! {
    #[test]
    fn prop_poll_first_shrinks_by_one(elements in ascending_elements()) {
        let mut set = build(&elements);
        let polled = set.poll_first();

        prop_assert_eq!(polled, elements.first().copied());
        prop_assert_eq!(set.len(), elements.len().saturating_sub(1));
    }

    #[test]
    fn prop_poll_last_shrinks_by_one(elements in ascending_elements()) {
        let mut set = build(&elements);
        let polled = set.poll_last();

        prop_assert_eq!(polled, elements.last().copied());
        prop_assert_eq!(set.len(), elements.len().saturating_sub(1));
    }
}

// =============================================================================
// Partition Law
// Description: head_set(to, true) followed by tail_set(to, false) is the whole set
// =============================================================================

proptest! {
    #[test]
    fn prop_head_and_tail_partition_the_set(elements in ascending_elements(), to in -60i32..60) {
        let set = build(&elements);
        let mut rebuilt: Vec<i32> = set.head_set_with(&to, true).into_vec();
        rebuilt.extend(set.tail_set_with(&to, false));

        prop_assert_eq!(rebuilt, elements);
    }
}

// =============================================================================
// Sub-Set Laws
// Description: the inclusive view is exactly [from, to]; the exclusive view
// is contained in it
// =============================================================================

proptest! {
    #[test]
    fn prop_inclusive_sub_set_is_closed_interval(
        elements in ascending_elements(),
        first_bound in -60i32..60,
        second_bound in -60i32..60
    ) {
        let (from, to) = (first_bound.min(second_bound), first_bound.max(second_bound));
        let set = build(&elements);

        let view = set.sub_set_with(&from, true, &to, true).unwrap();
        let expected: Vec<i32> = elements
            .iter()
            .copied()
            .filter(|element| from <= *element && *element <= to)
            .collect();

        prop_assert_eq!(view.into_vec(), expected);
    }

    #[test]
    fn prop_exclusive_sub_set_narrows_inclusive(
        elements in ascending_elements(),
        first_bound in -60i32..60,
        second_bound in -60i32..60
    ) {
        let (from, to) = (first_bound.min(second_bound), first_bound.max(second_bound));
        let set = build(&elements);

        let inclusive = set.sub_set_with(&from, true, &to, true).unwrap();
        let exclusive = set.sub_set_with(&from, false, &to, false).unwrap();

        prop_assert!(exclusive.len() <= inclusive.len());
        prop_assert!(exclusive.iter().all(|element| inclusive.contains(element)));
    }

    #[test]
    fn prop_sub_set_rejects_reversed_bounds(
        elements in ascending_elements(),
        from in -60i32..60,
        gap in 1i32..20
    ) {
        let set = build(&elements);
        prop_assert!(set.sub_set_with(&from, true, &(from - gap), true).is_err());
        prop_assert!(set.sub_set(&from, &(from - gap)).is_err());
    }
}

// =============================================================================
// Descending Laws
// Description: reversing twice restores ascending order, and the descending
// iterator visits every element once in reverse
// =============================================================================

proptest! {
    #[test]
    fn prop_descending_set_is_an_involution(elements in ascending_elements()) {
        let set = build(&elements);
        let restored = set.descending_set().descending_set();

        prop_assert_eq!(restored.into_vec(), elements);
    }

    #[test]
    fn prop_descending_iter_reverses_iter(elements in ascending_elements()) {
        let set = build(&elements);
        let descending: Vec<i32> = set.descending_iter().copied().collect();
        let mut ascending: Vec<i32> = set.iter().copied().collect();
        ascending.reverse();

        prop_assert_eq!(descending, ascending);
    }
}
