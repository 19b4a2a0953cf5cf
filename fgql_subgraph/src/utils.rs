//! Small set helpers used by candidate generation.

use std::collections::HashSet;
use std::hash::Hash;

/// Intersects a collection of borrowed sets into one owned set.
///
/// An empty input collection yields the empty set.
pub(crate) fn intersect_sets<T: Eq + Hash + Clone>(mut sets: Vec<&HashSet<T>>) -> HashSet<T> {
    let Some(first) = sets.pop() else {
        return HashSet::new();
    };

    sets.iter().fold(first.clone(), |acc: HashSet<T>, set| {
        acc.intersection(set).cloned().collect()
    })
}
