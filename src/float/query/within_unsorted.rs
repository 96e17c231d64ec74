use crate::distance_metric::DistanceMetric;
use crate::float::kdtree::{Axis, KdNode, KdTree};
use crate::neighbour::Neighbour;
use crate::point::Point;
use crate::types::Content;
#[cfg(feature = "tracing")]
use tracing::{span, Level};

impl<A: Axis, T: Content, const K: usize> KdTree<A, T, K> {
    /// Finds all stored points whose distance from `query`, according to the
    /// metric `D`, is less than or equal to `dist`.
    ///
    /// `dist` is expressed in the metric's own units: for
    /// [`SquaredEuclidean`](crate::SquaredEuclidean) that is the *squared*
    /// radius. Results are returned in arbitrary order; callers needing a
    /// deterministic order should sort, or use [`within`](KdTree::within).
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
    /// let within = tree.within_unsorted::<SquaredEuclidean>(&[1.0, 2.0, 5.0], 10f64);
    ///
    /// assert_eq!(within.len(), 2);
    /// ```
    #[inline]
    pub fn within_unsorted<D>(&self, query: &[A; K], dist: A) -> Vec<Neighbour<A, T>>
    where
        D: DistanceMetric<A, K>,
    {
        self.within_unsorted_ref::<D>(query, dist)
            .into_iter()
            .map(|(distance, point)| Neighbour {
                distance,
                item: point.id(),
            })
            .collect()
    }

    /// Shared traversal behind every radius query. Walks the tree with an
    /// explicit stack, so call-stack use never tracks tree depth.
    ///
    /// Per node: the node's own point is a match if its metric distance is
    /// within `dist` (boundary inclusive). A child is visited if the query
    /// ball reaches the node's splitting hyperplane, or if the query point
    /// itself falls on that child's side. The side disjunct keeps degenerate
    /// cases correct, e.g. a radius of zero.
    pub(crate) fn within_unsorted_ref<D>(
        &self,
        query: &[A; K],
        dist: A,
    ) -> Vec<(A, &Point<A, T, K>)>
    where
        D: DistanceMetric<A, K>,
    {
        #[cfg(feature = "tracing")]
        let _entered = span!(Level::TRACE, "within_unsorted", dist = ?dist).entered();

        let mut matching_items = Vec::new();
        let mut pending: Vec<&KdNode<A, T, K>> = vec![self.root.as_ref()];

        while let Some(node) = pending.pop() {
            let distance = D::dist(query, node.split_point.coords());
            if distance <= dist {
                matching_items.push((distance, &node.split_point));
            }

            let v = query[node.split_axis];
            let s = node.split_point.coord(node.split_axis);
            let reaches_split = D::dist1(v, s) <= dist;

            if let Some(left) = &node.left {
                if reaches_split || v < s {
                    pending.push(left);
                }
            }
            if let Some(right) = &node.right {
                if reaches_split || v >= s {
                    pending.push(right);
                }
            }
        }

        matching_items
    }
}

#[cfg(test)]
mod tests {
    use crate::distance_metric::DistanceMetric;
    use crate::float::distance::SquaredEuclidean;
    use crate::float::kdtree::{Axis, KdTree};
    use crate::point::Point;
    use rand::Rng;
    use std::cmp::Ordering;

    type AX = f32;

    const CONTENT_TO_ADD: [([AX; 4], u32); 16] = [
        ([0.9f32, 0.0f32, 0.9f32, 0.0f32], 9),
        ([0.4f32, 0.5f32, 0.4f32, 0.5f32], 4),
        ([0.12f32, 0.3f32, 0.12f32, 0.3f32], 12),
        ([0.7f32, 0.2f32, 0.7f32, 0.2f32], 7),
        ([0.13f32, 0.4f32, 0.13f32, 0.4f32], 13),
        ([0.6f32, 0.3f32, 0.6f32, 0.3f32], 6),
        ([0.2f32, 0.7f32, 0.2f32, 0.7f32], 2),
        ([0.14f32, 0.5f32, 0.14f32, 0.5f32], 14),
        ([0.3f32, 0.6f32, 0.3f32, 0.6f32], 3),
        ([0.10f32, 0.1f32, 0.10f32, 0.1f32], 10),
        ([0.16f32, 0.7f32, 0.16f32, 0.7f32], 16),
        ([0.1f32, 0.8f32, 0.1f32, 0.8f32], 1),
        ([0.15f32, 0.6f32, 0.15f32, 0.6f32], 15),
        ([0.5f32, 0.4f32, 0.5f32, 0.4f32], 5),
        ([0.8f32, 0.1f32, 0.8f32, 0.1f32], 8),
        ([0.11f32, 0.2f32, 0.11f32, 0.2f32], 11),
    ];

    fn build_tree() -> KdTree<AX, u32, 4> {
        let (coords, id) = CONTENT_TO_ADD[0];
        let mut tree = KdTree::new(Point::new(id, coords));
        for (coords, id) in &CONTENT_TO_ADD[1..] {
            tree.insert(Point::new(*id, *coords));
        }
        tree
    }

    #[test]
    fn can_query_items_within_radius() {
        let tree = build_tree();
        assert_eq!(tree.size(), 16);

        let query_point = [0.78f32, 0.55f32, 0.78f32, 0.55f32];
        let radius_sq = 0.2;

        let expected = linear_search(&CONTENT_TO_ADD, &query_point, radius_sq);

        let mut result: Vec<_> = tree
            .within_unsorted::<SquaredEuclidean>(&query_point, radius_sq)
            .into_iter()
            .map(Into::into)
            .collect();
        stabilize_sort(&mut result);

        assert_eq!(result, expected);

        let mut rng = rand::thread_rng();
        for _i in 0..1000 {
            let query_point = [
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
            ];
            let radius_sq = 0.2;
            let expected = linear_search(&CONTENT_TO_ADD, &query_point, radius_sq);

            let mut result: Vec<_> = tree
                .within_unsorted::<SquaredEuclidean>(&query_point, radius_sq)
                .into_iter()
                .map(Into::into)
                .collect();
            stabilize_sort(&mut result);

            assert_eq!(result, expected);
        }
    }

    #[test]
    fn includes_points_exactly_on_the_boundary() {
        let mut tree: KdTree<AX, u32, 2> = KdTree::new(Point::new(1, [1.0, 0.0]));
        tree.insert(Point::new(2, [0.0, 2.0]));

        // Squared distance to point 1 is exactly the queried dist.
        let result = tree.within_unsorted::<SquaredEuclidean>(&[0.0, 0.0], 1.0);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].item, 1);
        assert_eq!(result[0].distance, 1.0);
    }

    fn linear_search<A: Axis, const K: usize>(
        content: &[([A; K], u32)],
        query_point: &[A; K],
        radius_sq: A,
    ) -> Vec<(A, u32)> {
        let mut matching_items = vec![];

        for &(p, item) in content {
            let dist = SquaredEuclidean::dist(query_point, &p);
            if dist <= radius_sq {
                matching_items.push((dist, item));
            }
        }

        stabilize_sort(&mut matching_items);

        matching_items
    }

    fn stabilize_sort<A: Axis>(matching_items: &mut [(A, u32)]) {
        matching_items.sort_unstable_by(|a, b| {
            let dist_cmp = a.0.partial_cmp(&b.0).unwrap();
            if dist_cmp == Ordering::Equal {
                a.1.cmp(&b.1)
            } else {
                dist_cmp
            }
        });
    }
}
