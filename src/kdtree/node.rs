use std::fmt;

use tinyvec::TinyVec;

use crate::point::Point;
use crate::r#type::IndexableNum;

/// An owned node of a [`KDTree`][crate::kdtree::KDTree].
///
/// A node stores its point by value and exclusively owns both of its subtrees. It stores neither
/// its depth nor a parent link; the splitting axis is derived from the depth of the traversal that
/// reaches it.
///
/// Insertion can grow a chain as long as the number of points, so every whole-subtree operation
/// here (drop, clone, equality) walks an explicit stack instead of recursing.
pub(crate) struct Node<N: IndexableNum, const K: usize> {
    pub(crate) point: Point<N, K>,
    pub(crate) left: Option<Box<Node<N, K>>>,
    pub(crate) right: Option<Box<Node<N, K>>>,
}

impl<N: IndexableNum, const K: usize> Node<N, K> {
    pub(crate) fn leaf(point: Point<N, K>) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<N: IndexableNum, const K: usize> Drop for Node<N, K> {
    fn drop(&mut self) {
        // detach every descendant first so each box drops without children of its own
        let mut stack: TinyVec<[Option<Box<Node<N, K>>>; 32]> = TinyVec::new();
        stack.push(self.left.take());
        stack.push(self.right.take());

        while let Some(entry) = stack.pop() {
            if let Some(mut node) = entry {
                stack.push(node.left.take());
                stack.push(node.right.take());
            }
        }
    }
}

impl<N: IndexableNum, const K: usize> Clone for Node<N, K> {
    fn clone(&self) -> Self {
        let mut root = Node::leaf(self.point);
        {
            let mut stack: Vec<(&Node<N, K>, &mut Node<N, K>)> = vec![(self, &mut root)];

            while let Some((source, target)) = stack.pop() {
                let Node { left, right, .. } = target;
                if let Some(source_left) = source.left.as_deref() {
                    let child = left.insert(Box::new(Node::leaf(source_left.point)));
                    stack.push((source_left, &mut **child));
                }
                if let Some(source_right) = source.right.as_deref() {
                    let child = right.insert(Box::new(Node::leaf(source_right.point)));
                    stack.push((source_right, &mut **child));
                }
            }
        }

        root
    }
}

impl<N: IndexableNum, const K: usize> PartialEq for Node<N, K> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.point != b.point {
                return false;
            }
            for (a_child, b_child) in [(&a.left, &b.left), (&a.right, &b.right)] {
                match (a_child.as_deref(), b_child.as_deref()) {
                    (Some(a_child), Some(b_child)) => stack.push((a_child, b_child)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<N: IndexableNum, const K: usize> fmt::Debug for Node<N, K> {
    /// Shallow: shows this node's point and the points of its direct children.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("point", &self.point)
            .field("left", &self.left.as_ref().map(|node| node.point))
            .field("right", &self.right.as_ref().map(|node| node.point))
            .finish()
    }
}
