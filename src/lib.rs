#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::invalid_codeblock_attributes)]

//! # Sapling
//!
//! A simple, pointer-based k-d tree for radius ("nearby") queries over
//! N-dimensional points.
//!
//! The tree grows one node per inserted [`Point`], cycling the splitting
//! dimension with depth. It is deliberately unbalanced: insertion never
//! reshuffles existing nodes, so tree shape (and worst-case depth) depends on
//! insertion order. Radius queries prune any subtree whose half-space cannot
//! reach the query sphere, which is what makes them faster than a linear scan
//! on non-degenerate data.
//!
//! Dimensionality is a const generic, so a tree and its points can never
//! disagree about how many co-ordinates a point has.
//!
//! ## Usage
//! ```rust
//! use sapling::{KdTree, Point};
//!
//! // The first point seeds the tree; there is no empty-tree state.
//! let mut tree = KdTree::new(Point::new(1u32, [0.3f64, 0.5]));
//! tree.insert(Point::new(2, [-0.3, 0.5]));
//! tree.insert(Point::new(3, [0.9, 1.5]));
//! tree.insert(Point::new(4, [1.7, 1.5]));
//! tree.insert(Point::new(5, [3.3, 0.95]));
//! tree.insert(Point::new(6, [0.03, -0.5]));
//!
//! assert_eq!(tree.size(), 6);
//!
//! let mut ids = tree.nearby_ids(&[1.3, 0.5], 1.1);
//! ids.sort_unstable();
//! assert_eq!(ids, vec![1, 3, 4]);
//! ```
//!
//! For metric-generic queries (or to get distances back), use
//! [`KdTree::within_unsorted`] with a
//! [`DistanceMetric`](crate::distance_metric::DistanceMetric) such as
//! [`SquaredEuclidean`]; [`KdTree::nearby`] and [`KdTree::nearby_ids`] are
//! squared-Euclidean conveniences that take a plain Euclidean radius.

#[cfg(feature = "serde")]
mod custom_serde;
pub mod distance_metric;
pub mod error;
pub mod float;
mod iter;
pub mod neighbour;
pub mod point;
pub mod types;

pub use crate::float::distance::{Manhattan, SquaredEuclidean};
pub use crate::float::kdtree::{Axis, KdTree};
pub use crate::neighbour::Neighbour;
pub use crate::point::Point;
