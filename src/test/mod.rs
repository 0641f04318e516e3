//! Shared fixtures for tests.


use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kdtree::{KDTree, KDTreeIndex, Node, NodeRef};
use crate::point::Point;
use crate::r#type::IndexableNum;

/// `n` points uniformly distributed in `[-1000, 1000)` along every axis.
pub(crate) fn random_points<const K: usize>(n: usize, seed: u64) -> Vec<Point<f64, K>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(std::array::from_fn(|_| rng.gen_range(-1000.0..1000.0))))
        .collect()
}

/// The list-shaped tree that inserting `[i, i]` for `i` in `0..n` produces, assembled in O(n).
pub(crate) fn chain(n: u32) -> KDTree<u32, 2> {
    let mut root = None;
    for i in (0..n).rev() {
        root = Some(Box::new(Node {
            point: Point::new([i, i]),
            left: None,
            right: root,
        }));
    }
    KDTree { root }
}

/// The first point in `points` minimizing the squared distance to `query`.
pub(crate) fn brute_force_nearest<N: IndexableNum, const K: usize>(
    points: &[Point<N, K>],
    query: &Point<N, K>,
) -> Point<N, K> {
    let mut best = points[0];
    let mut best_dist = best.sq_dist(query);
    for point in &points[1..] {
        let dist = point.sq_dist(query);
        if dist < best_dist {
            best = *point;
            best_dist = dist;
        }
    }
    best
}

/// Points sorted lexicographically, for comparing contents as a multiset.
pub(crate) fn sorted<N: IndexableNum, const K: usize>(
    mut points: Vec<Point<N, K>>,
) -> Vec<Point<N, K>> {
    points.sort_by(|a, b| a.coords().partial_cmp(b.coords()).unwrap());
    points
}

/// Assert that below every node, the left subtree lies at or below the node on its splitting
/// axis and the right subtree at or above it.
pub(crate) fn assert_split_invariant<N: IndexableNum, const K: usize>(node: NodeRef<'_, N, K>) {
    let axis = node.axis();
    let value = node.point().coord(axis);

    if let Some(left) = node.left_child() {
        for point in left.iter() {
            assert!(
                point.coord(axis) <= value,
                "{:?} left of {:?} at depth {}",
                point,
                node.point(),
                node.depth()
            );
        }
        assert_split_invariant(left);
    }
    if let Some(right) = node.right_child() {
        for point in right.iter() {
            assert!(
                point.coord(axis) >= value,
                "{:?} right of {:?} at depth {}",
                point,
                node.point(),
                node.depth()
            );
        }
        assert_split_invariant(right);
    }
}
