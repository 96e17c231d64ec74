//! Trait bounds for the item / identifier payload stored alongside each point.

use std::fmt::Debug;

/// Content trait represents the traits that must be implemented by the type
/// used as a point's identifier, the second generic parameter `T` on
/// [`Point`](crate::point::Point) and [`KdTree`](crate::KdTree). Any small
/// copyable, orderable value works; in practice this is usually `u32`,
/// `usize`, or a similar index-like type.
pub trait Content: PartialEq + Default + Clone + Copy + Ord + Debug {}
impl<T: PartialEq + Default + Clone + Copy + Ord + Debug> Content for T {}
