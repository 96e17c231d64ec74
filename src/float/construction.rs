//! Growing a tree by inserting points one at a time.

use std::ops::Rem;

use crate::float::kdtree::{Axis, KdNode, KdTree};
use crate::point::Point;
use crate::types::Content;

impl<A: Axis, T: Content, const K: usize> KdTree<A, T, K> {
    /// Inserts `point` into the tree.
    ///
    /// Descends by the partition property: a point that is strictly less than
    /// a node's split value on that node's axis goes left, anything else
    /// (equal included) goes right. The first empty child slot found this way
    /// receives a new leaf node whose split axis is the parent's axis plus
    /// one, modulo `K`.
    ///
    /// Exactly one node is allocated and the tree grows by one point. No
    /// rebalancing ever happens, so tree depth depends on insertion order.
    /// The descent is a loop rather than recursion; stack use does not grow
    /// with tree depth.
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
    pub fn insert(&mut self, point: Point<A, T, K>) {
        let mut node = self.root.as_mut();

        loop {
            let axis = node.split_axis;
            let child_axis = (axis + 1).rem(K);

            let child = if point.coord(axis) < node.split_point.coord(axis) {
                &mut node.left
            } else {
                &mut node.right
            };

            match child {
                Some(next) => node = next.as_mut(),
                None => {
                    *child = Some(Box::new(KdNode::new(point, child_axis)));
                    break;
                }
            }
        }

        self.size += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::float::kdtree::KdTree;
    use crate::point::Point;
    use rand::Rng;

    type FLT = f32;

    #[test]
    fn can_insert_a_point() {
        let mut tree: KdTree<FLT, u32, 4> = KdTree::new(Point::new(9, [0.9, 0.0, 0.9, 0.0]));

        tree.insert(Point::new(123, [0.1, 0.2, 0.3, 0.4]));

        assert_eq!(tree.size(), 2);
    }

    #[test]
    fn equal_split_axis_values_go_right() {
        // Root splits on axis 0; both inserts tie with the root's x, so they
        // must both end up in the right subtree and still be queryable.
        let mut tree: KdTree<FLT, u32, 2> = KdTree::new(Point::new(1, [0.5, 0.5]));
        tree.insert(Point::new(2, [0.5, 0.9]));
        tree.insert(Point::new(3, [0.5, 0.1]));

        let mut ids = tree.nearby_ids(&[0.5, 0.5], 1.0);
        ids.sort_unstable();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn coincident_points_are_all_stored() {
        let mut tree: KdTree<FLT, u32, 2> = KdTree::new(Point::new(1, [0.25, 0.25]));
        tree.insert(Point::new(2, [0.25, 0.25]));
        tree.insert(Point::new(3, [0.25, 0.25]));

        assert_eq!(tree.size(), 3);
        assert_eq!(tree.nearby_ids(&[0.25, 0.25], 0.0).len(), 3);
    }

    #[test]
    fn can_insert_shitloads_of_random_points() {
        let mut rng = rand::thread_rng();

        let mut tree: KdTree<FLT, u32, 4> = KdTree::new(Point::new(
            0,
            [
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
            ],
        ));

        for i in 1..1000 {
            let point = [
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
                rng.gen_range(0f32..1f32),
            ];

            tree.insert(Point::new(i, point));
        }

        assert_eq!(tree.size(), 1000);
    }
}
