use crate::float::distance::SquaredEuclidean;
use crate::float::kdtree::{Axis, KdTree};
use crate::point::Point;
use crate::types::Content;

impl<A: Axis, T: Content, const K: usize> KdTree<A, T, K> {
    /// Returns a copy of every stored point whose Euclidean distance from
    /// `query` is less than or equal to `radius`, in arbitrary order.
    ///
    /// The comparison is done on squared distances, so no square root is ever
    /// taken. `radius` must be non-negative; a radius of zero returns only
    /// points exactly coincident with `query`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::{KdTree, Point};
    ///
    /// let mut tree = KdTree::new(Point::new(1u32, [0.3f64, 0.5]));
    /// tree.insert(Point::new(2, [-0.3, 0.5]));
    /// tree.insert(Point::new(3, [0.9, 1.5]));
    ///
    /// let mut ids: Vec<u32> = tree.nearby(&[1.3, 0.5], 1.1).iter().map(|p| p.id()).collect();
    /// ids.sort_unstable();
    ///
    /// assert_eq!(ids, vec![1, 3]);
    /// ```
    #[inline]
    pub fn nearby(&self, query: &[A; K], radius: A) -> Vec<Point<A, T, K>> {
        debug_assert!(radius >= A::zero(), "radius must be non-negative");

        self.within_unsorted_ref::<SquaredEuclidean>(query, radius * radius)
            .into_iter()
            .map(|(_, point)| *point)
            .collect()
    }

    /// Returns the identifier of every stored point whose Euclidean distance
    /// from `query` is less than or equal to `radius`, in arbitrary order.
    ///
    /// Same query as [`nearby`](KdTree::nearby), for callers that only care
    /// about which points matched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::{KdTree, Point};
    ///
    /// let mut tree = KdTree::new(Point::new(1u32, [0.3f64, 0.5]));
    /// tree.insert(Point::new(2, [-0.3, 0.5]));
    /// tree.insert(Point::new(3, [0.9, 1.5]));
    ///
    /// let mut ids = tree.nearby_ids(&[1.3, 0.5], 1.1);
    /// ids.sort_unstable();
    ///
    /// assert_eq!(ids, vec![1, 3]);
    /// ```
    #[inline]
    pub fn nearby_ids(&self, query: &[A; K], radius: A) -> Vec<T> {
        debug_assert!(radius >= A::zero(), "radius must be non-negative");

        self.within_unsorted_ref::<SquaredEuclidean>(query, radius * radius)
            .into_iter()
            .map(|(_, point)| point.id())
            .collect()
    }
}
