//! In-place selection of the median point along one axis.

use crate::point::Point;
use crate::r#type::IndexableNum;

/// Rearrange `points` so that `points[k]` holds the point of rank `k` along `axis`.
///
/// Afterwards every point before index `k` has an `axis` coordinate `<=` that of `points[k]`, and
/// every point after it has one `>=`. Nothing beyond that ordering is guaranteed; in particular
/// this is not a stable sort. Runs in expected linear time without allocating.
///
/// Panics if `axis >= K` or if `points` is non-empty and `k >= points.len()`.
pub fn partition<N: IndexableNum, const K: usize>(
    points: &mut [Point<N, K>],
    axis: usize,
    k: usize,
) {
    assert!(axis < K, "Axis {} out of range for {} dimensions.", axis, K);
    if points.len() <= 1 {
        return;
    }
    assert!(k < points.len(), "Rank {} out of range.", k);

    let mut start = 0;
    let mut end = points.len();

    while end - start > 1 {
        // park the current occupant of rank k at the end of the window and use it as pivot
        let pivot = points[k].coord(axis);
        let last = end - 1;
        points.swap(k, last);

        let mut store = start;
        for i in start..last {
            if points[i].coord(axis) < pivot {
                points.swap(i, store);
                store += 1;
            }
        }
        points.swap(store, last);

        // gather the pivot's ties directly after it: [store, ties) all equal the pivot
        let mut ties = store + 1;
        for i in store + 1..end {
            if points[i].coord(axis) == pivot {
                points.swap(i, ties);
                ties += 1;
            }
        }

        if k < store {
            end = store;
        } else if k >= ties {
            start = ties;
        } else {
            // any of the ties may sit at rank k
            return;
        }
    }
}
