use geo_traits::CoordTrait;

use crate::error::{KdIndexError, Result};
use crate::kdtree::traversal::{Iter, NodeRef};
use crate::kdtree::KDTree;
use crate::point::Point;
use crate::r#type::{widen, IndexableNum};

/// A trait for searching and accessing data out of a KDTree.
///
/// Every query is derived from [`root`][Self::root], so the owned tree and any subtree view answer
/// them the same way.
pub trait KDTreeIndex<N: IndexableNum, const K: usize>: Sized {
    /// Access the root node for manual traversal, or `None` if there are no points.
    fn root(&self) -> Option<NodeRef<'_, N, K>>;

    /// The number of points, counted by traversal.
    fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if there are no points.
    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// The number of nodes on the longest root-to-leaf path. Zero when empty.
    fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeRef<'_, N, K>, usize)> = Vec::new();
        stack.extend(self.root().map(|root| (root, 1)));
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.left_child().map(|left| (left, level + 1)));
            stack.extend(node.right_child().map(|right| (right, level + 1)));
        }
        height
    }

    /// Iterate over all points in order: left subtree, node, right subtree.
    fn iter(&self) -> Iter<'_, N, K> {
        Iter::new(self.root())
    }

    /// A newly allocated snapshot of all points, in order.
    fn elements(&self) -> Vec<Point<N, K>> {
        self.iter().copied().collect()
    }

    /// Find the point closest to `query` under Euclidean distance.
    ///
    /// Returns [`KdIndexError::EmptyTree`] if there are no points. Among equidistant points, the
    /// first one reached by the traversal wins.
    fn nearest(&self, query: &Point<N, K>) -> Result<Point<N, K>> {
        self.nearest_with_distance(query).map(|(point, _)| point)
    }

    /// Find the point closest to `query`, along with its squared distance to `query`.
    fn nearest_with_distance(&self, query: &Point<N, K>) -> Result<(Point<N, K>, f64)> {
        let root = self.root().ok_or(KdIndexError::EmptyTree)?;

        let mut best = None;
        search_nearest(root, query, &mut best);

        best.map(|(point, dist)| (*point, dist)).ok_or(KdIndexError::EmptyTree)
    }

    /// Find the point closest to any coordinate with exactly `K` dimensions.
    fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<Point<N, K>> {
        let query = Point::try_from_coord(coord)?;
        self.nearest(&query)
    }
}

/// Branch-and-bound descent, visiting the side of the splitting plane that holds `query` first.
///
/// Pending subtrees live on an explicit stack so that list-shaped trees cannot exhaust the call
/// stack. A far side is pushed beneath its near side together with its squared distance to the
/// splitting plane, and that bound is only checked once the near side has been fully searched.
fn search_nearest<'a, N: IndexableNum, const K: usize>(
    root: NodeRef<'a, N, K>,
    query: &Point<N, K>,
    best: &mut Option<(&'a Point<N, K>, f64)>,
) {
    let mut stack: Vec<(NodeRef<'a, N, K>, Option<f64>)> = vec![(root, None)];

    while let Some((node, plane_dist)) = stack.pop() {
        // the far side can only hold a closer point if the splitting plane is within reach
        if let Some(plane_dist) = plane_dist {
            if !best.map_or(true, |(_, best_dist)| plane_dist <= best_dist) {
                continue;
            }
        }

        let point = node.point();
        let dist = point.sq_dist(query);
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            *best = Some((point, dist));
        }

        // nothing can beat an exact match
        if best.is_some_and(|(_, best_dist)| best_dist == 0.0) {
            continue;
        }

        let axis = node.axis();
        let delta = widen(point.coord(axis)) - widen(query.coord(axis));
        let (near, far) = if delta > 0.0 {
            (node.left_child(), node.right_child())
        } else {
            (node.right_child(), node.left_child())
        };

        if let Some(far) = far {
            stack.push((far, Some(delta * delta)));
        }
        if let Some(near) = near {
            stack.push((near, None));
        }
    }
}

impl<N: IndexableNum, const K: usize> KDTreeIndex<N, K> for KDTree<N, K> {
    fn root(&self) -> Option<NodeRef<'_, N, K>> {
        self.root.as_deref().map(NodeRef::from_root)
    }
}

impl<N: IndexableNum, const K: usize> KDTreeIndex<N, K> for NodeRef<'_, N, K> {
    fn root(&self) -> Option<NodeRef<'_, N, K>> {
        Some(*self)
    }
}
