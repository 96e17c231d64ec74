//! A result item returned by a query

use crate::types::Content;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Represents an entry in the results of a radius query, with `distance`
/// being the distance of this particular item from the query point according
/// to the supplied metric, and `item` being the identifier of the stored
/// point that was found.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct Neighbour<A, T> {
    /// the distance of the found point from the query point according to the
    /// supplied distance metric
    pub distance: A,
    /// the identifier of the stored point that was found in the query
    pub item: T,
}

impl<A: PartialOrd, T: Content> Ord for Neighbour<A, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

#[allow(unknown_lints)]
#[allow(clippy::non_canonical_partial_ord_impl)]
impl<A: PartialOrd, T: Content> PartialOrd for Neighbour<A, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<A: PartialEq, T: Content> Eq for Neighbour<A, T> {}

impl<A: PartialEq, T: Content> PartialEq for Neighbour<A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.item == other.item
    }
}

impl<A, T: Content> From<Neighbour<A, T>> for (A, T) {
    fn from(elem: Neighbour<A, T>) -> Self {
        (elem.distance, elem.item)
    }
}
