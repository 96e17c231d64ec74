//! The value type stored in the tree: an identifier plus K co-ordinates.

use crate::float::kdtree::Axis;
use crate::types::Content;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable point: a caller-supplied identifier and a fixed-length
/// co-ordinate array.
///
/// The identifier is opaque to the tree: it is never validated or
/// deduplicated, so two points may share an id, co-ordinates, or both.
/// Dimensionality is the const generic `K`, which ties a `Point` to trees of
/// the same `K` at compile time.
///
/// # Examples
///
/// ```rust
/// use sapling::Point;
///
/// let p = Point::new(7u32, [1.0f64, 2.0, 3.0]);
///
/// assert_eq!(p.id(), 7);
/// assert_eq!(p.coord(2), 3.0);
/// assert_eq!(p.y(), 2.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<A: Axis, T: Content, const K: usize> {
    id: T,
    #[cfg_attr(feature = "serde", serde(with = "crate::custom_serde::array"))]
    #[cfg_attr(
        feature = "serde",
        serde(bound(serialize = "A: Serialize", deserialize = "A: Deserialize<'de>"))
    )]
    coords: [A; K],
}

impl<A: Axis, T: Content, const K: usize> Point<A, T, K> {
    /// Creates a point from an identifier and its co-ordinates.
    #[inline]
    pub fn new(id: T, coords: [A; K]) -> Self {
        Self { id, coords }
    }

    /// Returns the stored identifier.
    #[inline]
    pub fn id(&self) -> T {
        self.id
    }

    /// Returns the co-ordinate along `axis`.
    ///
    /// Panics if `axis >= K`. The tree only ever passes axes in `[0, K)`, so
    /// this is a caller contract when invoked directly.
    #[inline]
    pub fn coord(&self, axis: usize) -> A {
        self.coords[axis]
    }

    /// Returns all co-ordinates.
    #[inline]
    pub fn coords(&self) -> &[A; K] {
        &self.coords
    }

    /// Returns the dimensionality `K`.
    #[inline]
    pub const fn dimensions() -> usize {
        K
    }

    /// Convenience accessor for `coord(0)`. Only compiles when `K >= 1`.
    #[inline]
    pub fn x(&self) -> A {
        const {
            assert!(K >= 1, "x() requires at least 1 dimension");
        }
        self.coords[0]
    }

    /// Convenience accessor for `coord(1)`. Only compiles when `K >= 2`.
    #[inline]
    pub fn y(&self) -> A {
        const {
            assert!(K >= 2, "y() requires at least 2 dimensions");
        }
        self.coords[1]
    }

    /// Convenience accessor for `coord(2)`. Only compiles when `K >= 3`.
    #[inline]
    pub fn z(&self) -> A {
        const {
            assert!(K >= 3, "z() requires at least 3 dimensions");
        }
        self.coords[2]
    }
}
