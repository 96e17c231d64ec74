//! Floating point k-d tree, for use when the co-ordinates of the points being
//! stored in the tree are floats. f64 or f32 are supported currently.

use num_traits::float::FloatCore;
use std::fmt::Debug;

use crate::error::{Result, SaplingError};
use crate::iter::TreeIter;
use crate::point::Point;
use crate::types::Content;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the first generic parameter, `A`,
/// on [`KdTree`]. This will be [`f64`] or [`f32`].
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send {}
impl<T: FloatCore + Default + Debug + Copy + Sync + Send> Axis for T {}

/// A single tree node. Owns the point stored at this level plus the two
/// optional subtrees, so ownership forms a strict tree.
///
/// Partition invariant: everything in `left` is strictly less than
/// `split_point` on `split_axis`; everything in `right` is greater or equal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct KdNode<A: Axis, T: Content, const K: usize> {
    pub(crate) split_point: Point<A, T, K>,
    pub(crate) split_axis: usize,
    pub(crate) left: Option<Box<KdNode<A, T, K>>>,
    pub(crate) right: Option<Box<KdNode<A, T, K>>>,
}

impl<A: Axis, T: Content, const K: usize> KdNode<A, T, K> {
    pub(crate) fn new(split_point: Point<A, T, K>, split_axis: usize) -> Self {
        Self {
            split_point,
            split_axis,
            left: None,
            right: None,
        }
    }
}

/// Floating point k-d tree
///
/// A binary tree over `K`-dimensional [`Point`]s that supports
/// [`insert`](KdTree::insert) and radius queries
/// ([`nearby`](KdTree::nearby), [`within_unsorted`](KdTree::within_unsorted)).
/// Each node splits space on one co-ordinate axis, cycling through the axes
/// with tree depth.
///
/// The tree is never rebalanced, so its depth is a function of insertion
/// order and can degrade to O(n) for adversarial orderings. Queries stay
/// correct regardless; only their cost degrades. Insertion, queries,
/// iteration, and drop all walk the tree iteratively, so none of them can
/// overflow the call stack on a degenerate tree.
///
/// `insert` takes `&mut self`, which means the single-writer discipline the
/// structure needs is enforced by the borrow checker: a frozen tree can be
/// queried from any number of threads at once.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct KdTree<A: Axis, T: Content, const K: usize> {
    pub(crate) root: Box<KdNode<A, T, K>>,
    pub(crate) size: usize,
}

impl<A: Axis, T: Content, const K: usize> KdTree<A, T, K> {
    /// Creates a single-node tree whose root stores `root_point` and splits
    /// on axis 0. This is the only way to create a tree (besides
    /// [`with_split_axis`](KdTree::with_split_axis)); there is no empty-tree
    /// state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::{KdTree, Point};
    ///
    /// let tree: KdTree<f64, u32, 3> = KdTree::new(Point::new(100, [1.0, 2.0, 5.0]));
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn new(root_point: Point<A, T, K>) -> Self {
        const {
            assert!(K > 0, "a KdTree must have at least one dimension");
        }
        Self {
            root: Box::new(KdNode::new(root_point, 0)),
            size: 1,
        }
    }

    /// Creates a single-node tree with an explicit split axis for the root.
    ///
    /// Errors with [`SaplingError::SplitAxisOutOfRange`] if
    /// `split_axis >= K`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::{KdTree, Point};
    ///
    /// let tree = KdTree::with_split_axis(Point::new(1u32, [0.0f64, 0.0]), 1).unwrap();
    /// assert_eq!(tree.size(), 1);
    ///
    /// assert!(KdTree::with_split_axis(Point::new(1u32, [0.0f64, 0.0]), 2).is_err());
    /// ```
    pub fn with_split_axis(root_point: Point<A, T, K>, split_axis: usize) -> Result<Self> {
        if split_axis >= K {
            return Err(SaplingError::SplitAxisOutOfRange {
                axis: split_axis,
                dims: K,
            });
        }
        Ok(Self {
            root: Box::new(KdNode::new(root_point, split_axis)),
            size: 1,
        })
    }

    /// Returns the current number of points stored in the tree, the root
    /// included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::{KdTree, Point};
    ///
    /// let mut tree = KdTree::new(Point::new(100u32, [1.0f64, 2.0, 5.0]));
    /// tree.insert(Point::new(101, [1.1, 2.1, 5.1]));
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterate over all `(id, co-ordinates)` pairs in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::{KdTree, Point};
    ///
    /// let mut tree = KdTree::new(Point::new(10u32, [1.0f64, 2.0, 3.0]));
    /// tree.insert(Point::new(12, [10.0, 2.0, 3.0]));
    ///
    /// let mut ids: Vec<u32> = tree.iter().map(|(id, _)| id).collect();
    /// ids.sort_unstable();
    /// assert_eq!(ids, vec![10, 12]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (T, [A; K])> + '_ {
        TreeIter::new(self)
    }
}

impl<A: Axis, T: Content, const K: usize> Drop for KdTree<A, T, K> {
    fn drop(&mut self) {
        // Unlink nodes onto a worklist first: letting Box drop the tree
        // recursively would overflow the stack on a pathologically deep tree.
        let mut pending = Vec::new();
        pending.extend(self.root.left.take());
        pending.extend(self.root.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
