use std::fmt;

use crate::kdtree::builder::build_node;
use crate::kdtree::node::Node;
use crate::kdtree::traversal::Iter;
use crate::kdtree::KDTreeIndex;
use crate::point::Point;
use crate::r#type::IndexableNum;

/// An owned k-d tree over points with `K` coordinates of type `N`.
///
/// The tree is represented only by its root; an absent root is the empty tree. Bulk construction
/// via [`build`][Self::build] yields a balanced tree, while [`insert`][Self::insert] never
/// restructures existing nodes. Queries are provided by [`KDTreeIndex`].
#[derive(Clone, PartialEq)]
pub struct KDTree<N: IndexableNum, const K: usize> {
    pub(crate) root: Option<Box<Node<N, K>>>,
}

impl<N: IndexableNum, const K: usize> KDTree<N, K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Build a balanced tree over exactly the given points.
    ///
    /// Each level splits its points at their median along `depth % K`, so a subtree over `n`
    /// points puts `n / 2` of them to the left and the remainder, less the node itself, to the
    /// right.
    pub fn build(mut points: Vec<Point<N, K>>) -> Self {
        Self {
            root: build_node(&mut points, 0),
        }
    }

    /// Add a single point without rebalancing.
    ///
    /// The point descends left while its coordinate on the node's axis is strictly less than the
    /// node's, and right otherwise, until it reaches an empty slot. Biased insertion order can
    /// degrade the tree towards a list; see [`rebalance`][Self::rebalance].
    pub fn insert(&mut self, point: Point<N, K>) {
        let mut slot = &mut self.root;
        let mut depth = 0;
        while let Some(node) = slot {
            let axis = depth % K;
            slot = if point.coord(axis) < node.point.coord(axis) {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Box::new(Node::leaf(point)));
    }

    /// Replace the tree with a balanced one over the same points.
    pub fn rebalance(&mut self) {
        let points = self.elements();
        *self = Self::build(points);
    }
}

impl<N: IndexableNum, const K: usize> fmt::Debug for KDTree<N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KDTree")
            .field("points", &self.elements())
            .finish()
    }
}

impl<N: IndexableNum, const K: usize> Default for KDTree<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: IndexableNum, const K: usize> FromIterator<Point<N, K>> for KDTree<N, K> {
    fn from_iter<I: IntoIterator<Item = Point<N, K>>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

impl<N: IndexableNum, const K: usize> Extend<Point<N, K>> for KDTree<N, K> {
    fn extend<I: IntoIterator<Item = Point<N, K>>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

impl<'a, N: IndexableNum, const K: usize> IntoIterator for &'a KDTree<N, K> {
    type Item = &'a Point<N, K>;
    type IntoIter = Iter<'a, N, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
