use crate::distance_metric::DistanceMetric;
use crate::float::kdtree::{Axis, KdTree};
use crate::neighbour::Neighbour;
use crate::types::Content;

impl<A: Axis, T: Content, const K: usize> KdTree<A, T, K> {
    /// Finds all stored points whose distance from `query`, according to the
    /// metric `D`, is less than or equal to `dist`, sorted by ascending
    /// distance.
    ///
    /// `dist` is expressed in the metric's own units, as for
    /// [`within_unsorted`](KdTree::within_unsorted), which is faster if the
    /// order of the results does not matter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::{KdTree, Point, SquaredEuclidean};
    ///
    /// let mut tree = KdTree::new(Point::new(100u32, [1.0f64, 2.0, 5.0]));
    /// tree.insert(Point::new(101, [2.0, 3.0, 6.0]));
    /// tree.insert(Point::new(102, [200.0, 300.0, 600.0]));
    ///
    /// let within = tree.within::<SquaredEuclidean>(&[1.0, 2.0, 5.0], 10f64);
    ///
    /// assert_eq!(within.len(), 2);
    /// assert_eq!(within[0].item, 100);
    /// assert_eq!(within[0].distance, 0.0);
    /// ```
    #[inline]
    pub fn within<D>(&self, query: &[A; K], dist: A) -> Vec<Neighbour<A, T>>
    where
        D: DistanceMetric<A, K>,
    {
        let mut matching_items = self.within_unsorted::<D>(query, dist);
        matching_items.sort();
        matching_items
    }
}

#[cfg(test)]
mod tests {
    use crate::float::distance::SquaredEuclidean;
    use crate::float::kdtree::KdTree;
    use crate::point::Point;

    #[test]
    fn results_are_sorted_by_ascending_distance() {
        let mut tree: KdTree<f64, u32, 2> = KdTree::new(Point::new(3, [3.0, 0.0]));
        tree.insert(Point::new(1, [1.0, 0.0]));
        tree.insert(Point::new(2, [2.0, 0.0]));

        let result = tree.within::<SquaredEuclidean>(&[0.0, 0.0], 100.0);

        let items: Vec<u32> = result.iter().map(|n| n.item).collect();
        assert_eq!(items, vec![1, 2, 3]);
    }
}
