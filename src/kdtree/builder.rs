use geo_traits::CoordTrait;

use crate::error::Result;
use crate::kdtree::node::Node;
use crate::kdtree::select::partition;
use crate::kdtree::KDTree;
use crate::point::Point;
use crate::r#type::IndexableNum;

/// Ranges at least this long build their two halves on separate rayon tasks.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 4096;

/// A builder to create a balanced [`KDTree`].
pub struct KDTreeBuilder<N: IndexableNum, const K: usize> {
    points: Vec<Point<N, K>>,
    num_items: usize,
}

impl<N: IndexableNum, const K: usize> KDTreeBuilder<N, K> {
    /// Create a new builder for exactly `num_items` points.
    pub fn new(num_items: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_items),
            num_items,
        }
    }

    /// Add a point to the index, returning its insertion index.
    pub fn add(&mut self, point: Point<N, K>) -> usize {
        let index = self.points.len();
        self.points.push(point);
        index
    }

    /// Add a point given as a coordinate slice, which must have exactly `K` elements.
    pub fn add_slice(&mut self, coords: &[N]) -> Result<usize> {
        let point = Point::try_from(coords)?;
        Ok(self.add(point))
    }

    /// Add a point given as any coordinate with exactly `K` dimensions.
    pub fn add_coord(&mut self, coord: &impl CoordTrait<T = N>) -> Result<usize> {
        let point = Point::try_from_coord(coord)?;
        Ok(self.add(point))
    }

    /// Consume this builder, partitioning the points around their medians to produce a balanced
    /// tree.
    pub fn finish(self) -> KDTree<N, K> {
        assert_eq!(
            self.points.len(),
            self.num_items,
            "Added {} items when expected {}.",
            self.points.len(),
            self.num_items
        );
        KDTree::build(self.points)
    }
}

/// Recursively build a subtree rooted at `depth` over all of `points`, reordering them in place.
///
/// The median along `depth % K` becomes the node; the `len / 2` points before it form the left
/// subtree and the rest form the right subtree.
pub(crate) fn build_node<N: IndexableNum, const K: usize>(
    points: &mut [Point<N, K>],
    depth: usize,
) -> Option<Box<Node<N, K>>> {
    match points.len() {
        0 => None,
        1 => Some(Box::new(Node::leaf(points[0]))),
        len => {
            let m = len / 2;
            partition(points, depth % K, m);

            let (left_points, rest) = points.split_at_mut(m);
            let (middle, right_points) = rest.split_at_mut(1);

            let (left, right) = build_children(left_points, right_points, depth + 1);
            Some(Box::new(Node {
                point: middle[0],
                left,
                right,
            }))
        }
    }
}

#[cfg(feature = "rayon")]
#[allow(clippy::type_complexity)]
fn build_children<N: IndexableNum, const K: usize>(
    left_points: &mut [Point<N, K>],
    right_points: &mut [Point<N, K>],
    depth: usize,
) -> (Option<Box<Node<N, K>>>, Option<Box<Node<N, K>>>) {
    if left_points.len() + right_points.len() >= PARALLEL_THRESHOLD {
        rayon::join(
            || build_node(left_points, depth),
            || build_node(right_points, depth),
        )
    } else {
        (build_node(left_points, depth), build_node(right_points, depth))
    }
}

#[cfg(not(feature = "rayon"))]
#[allow(clippy::type_complexity)]
fn build_children<N: IndexableNum, const K: usize>(
    left_points: &mut [Point<N, K>],
    right_points: &mut [Point<N, K>],
    depth: usize,
) -> (Option<Box<Node<N, K>>>, Option<Box<Node<N, K>>>) {
    (build_node(left_points, depth), build_node(right_points, depth))
}
