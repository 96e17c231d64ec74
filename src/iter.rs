use crate::float::kdtree::{Axis, KdNode, KdTree};
use crate::types::Content;

/// Iterator over every `(id, co-ordinates)` pair stored in a tree, in
/// arbitrary order. Uses an explicit node stack rather than recursion.
#[derive(Debug)]
pub struct TreeIter<'a, A: Axis, T: Content, const K: usize> {
    pending: Vec<&'a KdNode<A, T, K>>,
}

impl<'a, A: Axis, T: Content, const K: usize> TreeIter<'a, A, T, K> {
    pub(crate) fn new(tree: &'a KdTree<A, T, K>) -> Self {
        Self {
            pending: vec![tree.root.as_ref()],
        }
    }
}

impl<'a, A: Axis, T: Content, const K: usize> Iterator for TreeIter<'a, A, T, K> {
    type Item = (T, [A; K]);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;

        if let Some(left) = &node.left {
            self.pending.push(left);
        }
        if let Some(right) = &node.right {
            self.pending.push(right);
        }

        Some((node.split_point.id(), *node.split_point.coords()))
    }
}
