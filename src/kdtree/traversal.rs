//! Utilities to traverse the KDTree structure.

use tinyvec::TinyVec;

use crate::kdtree::node::Node;
use crate::point::Point;
use crate::r#type::IndexableNum;

/// A read-only view onto a node of a KDTree, positioned at its depth in the tree.
///
/// Nodes do not store their depth, so the view carries it along as it descends. A view also acts
/// as a subtree index: queries through [`KDTreeIndex`][crate::kdtree::KDTreeIndex] on it split on
/// the same axes as the full tree does.
#[derive(Debug)]
pub struct NodeRef<'a, N: IndexableNum, const K: usize> {
    node: &'a Node<N, K>,
    depth: usize,
}

impl<N: IndexableNum, const K: usize> Clone for NodeRef<'_, N, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: IndexableNum, const K: usize> Copy for NodeRef<'_, N, K> {}

impl<'a, N: IndexableNum, const K: usize> NodeRef<'a, N, K> {
    pub(crate) fn from_root(node: &'a Node<N, K>) -> Self {
        Self { node, depth: 0 }
    }

    /// The point stored at this node.
    #[inline]
    pub fn point(&self) -> &'a Point<N, K> {
        &self.node.point
    }

    /// The depth of this node. The root is at depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The axis that the children of this node are split over.
    #[inline]
    pub fn axis(&self) -> usize {
        self.depth % K
    }

    /// The subtree holding points whose coordinate on [`axis`][Self::axis] is less than this
    /// node's.
    pub fn left_child(&self) -> Option<NodeRef<'a, N, K>> {
        self.node.left.as_deref().map(|node| NodeRef {
            node,
            depth: self.depth + 1,
        })
    }

    /// The subtree holding points whose coordinate on [`axis`][Self::axis] is greater than or
    /// equal to this node's.
    pub fn right_child(&self) -> Option<NodeRef<'a, N, K>> {
        self.node.right.as_deref().map(|node| NodeRef {
            node,
            depth: self.depth + 1,
        })
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

/// An in-order iterator over the points of a KDTree.
///
/// Yields the left subtree, then the node itself, then the right subtree.
#[derive(Debug, Clone)]
pub struct Iter<'a, N: IndexableNum, const K: usize> {
    // Use TinyVec to avoid heap allocations for reasonably balanced trees
    stack: TinyVec<[Option<&'a Node<N, K>>; 32]>,
    cursor: Option<&'a Node<N, K>>,
}

impl<'a, N: IndexableNum, const K: usize> Iter<'a, N, K> {
    pub(crate) fn new(root: Option<NodeRef<'a, N, K>>) -> Self {
        Self {
            stack: TinyVec::new(),
            cursor: root.map(|root| root.node),
        }
    }
}

impl<'a, N: IndexableNum, const K: usize> Iterator for Iter<'a, N, K> {
    type Item = &'a Point<N, K>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cursor {
            self.stack.push(Some(node));
            self.cursor = node.left.as_deref();
        }

        let node = self.stack.pop().flatten()?;
        self.cursor = node.right.as_deref();
        Some(&node.point)
    }
}
