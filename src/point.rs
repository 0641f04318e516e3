//! Fixed-dimension points.

use std::ops::Index;

use geo_traits::{CoordTrait, Dimensions};

use crate::error::{KdIndexError, Result};
use crate::r#type::{widen, IndexableNum};

/// A point with exactly `K` coordinates of type `N`.
///
/// The dimensionality is part of the type, so points of different dimensions can never be mixed
/// within one tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<N: IndexableNum, const K: usize>(pub [N; K]);

impl<N: IndexableNum, const K: usize> Point<N, K> {
    /// Create a new point from its coordinates.
    pub fn new(coords: [N; K]) -> Self {
        Self(coords)
    }

    /// All coordinates of this point.
    pub fn coords(&self) -> &[N; K] {
        &self.0
    }

    /// The coordinate along `axis`.
    ///
    /// Panics if `axis >= K`.
    #[inline]
    pub fn coord(&self, axis: usize) -> N {
        self.0[axis]
    }

    /// Squared Euclidean distance to `other`, accumulated in `f64`.
    #[inline]
    pub fn sq_dist(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| {
                let d = widen(a) - widen(b);
                d * d
            })
            .sum()
    }

    /// Build a point from any coordinate, checking that it has exactly `K` spatial dimensions.
    ///
    /// A measure (`m`) is not a spatial axis: it is ignored rather than indexed, so an `Xym`
    /// coordinate counts as two dimensions and an `Xyzm` coordinate as three.
    pub fn try_from_coord(coord: &impl CoordTrait<T = N>) -> Result<Self> {
        let actual = match coord.dim() {
            Dimensions::Xym => 2,
            Dimensions::Xyzm => 3,
            dim => dim.size(),
        };
        if actual != K {
            return Err(KdIndexError::DimensionMismatch {
                expected: K,
                actual,
            });
        }
        // the measure always comes last, so the first K ordinates are the spatial ones
        Ok(Self(std::array::from_fn(|i| coord.nth_or_panic(i))))
    }
}

impl<N: IndexableNum, const K: usize> Default for Point<N, K> {
    fn default() -> Self {
        Self([N::zero(); K])
    }
}

impl<N: IndexableNum, const K: usize> From<[N; K]> for Point<N, K> {
    fn from(coords: [N; K]) -> Self {
        Self(coords)
    }
}

impl<N: IndexableNum, const K: usize> TryFrom<&[N]> for Point<N, K> {
    type Error = KdIndexError;

    fn try_from(coords: &[N]) -> Result<Self> {
        let array: [N; K] = coords
            .try_into()
            .map_err(|_| KdIndexError::DimensionMismatch {
                expected: K,
                actual: coords.len(),
            })?;
        Ok(Self(array))
    }
}

impl<N: IndexableNum, const K: usize> Index<usize> for Point<N, K> {
    type Output = N;

    fn index(&self, axis: usize) -> &N {
        &self.0[axis]
    }
}

impl<N: IndexableNum, const K: usize> CoordTrait for Point<N, K> {
    type T = N;

    fn dim(&self) -> Dimensions {
        match K {
            2 => Dimensions::Xy,
            3 => Dimensions::Xyz,
            _ => Dimensions::Unknown(K),
        }
    }

    fn x(&self) -> Self::T {
        self.0[0]
    }

    fn y(&self) -> Self::T {
        self.0[1]
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        self.0[n]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn squared_distance() {
        let a = Point::new([0.0, 0.0, 0.0]);
        let b = Point::new([1.0, 2.0, 2.0]);
        assert_eq!(a.sq_dist(&b), 9.0);
        assert_eq!(b.sq_dist(&a), 9.0);
        assert_eq!(a.sq_dist(&a), 0.0);
    }

    #[test]
    fn squared_distance_widens_unsigned() {
        let a = Point::new([0u8, 255]);
        let b = Point::new([255u8, 0]);
        assert_eq!(a.sq_dist(&b), 2.0 * 255.0 * 255.0);
    }

    #[test]
    fn from_slice_checks_dimension() {
        let coords = [1i32, 2, 3];
        let point = Point::<i32, 3>::try_from(&coords[..]).unwrap();
        assert_eq!(point, Point::new([1, 2, 3]));

        let err = Point::<i32, 2>::try_from(&coords[..]).unwrap_err();
        assert_eq!(
            err,
            KdIndexError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn from_coord_checks_dimension() {
        let point = Point::<f64, 2>::try_from_coord(&(3.0, 4.0)).unwrap();
        assert_eq!(point, Point::new([3.0, 4.0]));

        let err = Point::<f64, 3>::try_from_coord(&(3.0, 4.0)).unwrap_err();
        assert!(matches!(
            err,
            KdIndexError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    /// A coordinate with an explicit layout, for dimensions tuples cannot express.
    struct LaidOutCoord {
        dim: Dimensions,
        ordinates: Vec<f64>,
    }

    impl CoordTrait for LaidOutCoord {
        type T = f64;

        fn dim(&self) -> Dimensions {
            self.dim
        }

        fn x(&self) -> f64 {
            self.ordinates[0]
        }

        fn y(&self) -> f64 {
            self.ordinates[1]
        }

        fn nth_or_panic(&self, n: usize) -> f64 {
            self.ordinates[n]
        }
    }

    #[test]
    fn from_coord_ignores_measure() {
        let xym = LaidOutCoord {
            dim: Dimensions::Xym,
            ordinates: vec![1.0, 2.0, 99.0],
        };
        assert_eq!(
            Point::<f64, 3>::try_from_coord(&xym),
            Err(KdIndexError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            Point::<f64, 2>::try_from_coord(&xym).unwrap(),
            Point::new([1.0, 2.0])
        );

        let xyzm = LaidOutCoord {
            dim: Dimensions::Xyzm,
            ordinates: vec![1.0, 2.0, 3.0, 99.0],
        };
        assert!(Point::<f64, 4>::try_from_coord(&xyzm).is_err());
        assert_eq!(
            Point::<f64, 3>::try_from_coord(&xyzm).unwrap(),
            Point::new([1.0, 2.0, 3.0])
        );

        let xyz = LaidOutCoord {
            dim: Dimensions::Xyz,
            ordinates: vec![1.0, 2.0, 3.0],
        };
        assert_eq!(
            Point::<f64, 3>::try_from_coord(&xyz).unwrap(),
            Point::new([1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn coord_trait_dimensions() {
        let point = Point::new([1.0f32, 2.0, 3.0]);
        assert_eq!(point.dim(), Dimensions::Xyz);
        assert_eq!(point.x(), 1.0);
        assert_eq!(point.y(), 2.0);
        assert_eq!(point.nth_or_panic(2), 3.0);
        assert_eq!(point[2], 3.0);
        assert_eq!(Point::<f32, 4>::default().dim(), Dimensions::Unknown(4));
    }
}
