//! The plain Cartesian kernel.

use super::{
    ComputeCoordinate, ConstructPoint, CoordinateRange, Dimension, EqualPoints, Kernel,
    PointDimension,
};
use crate::error::{CertumError, Result};
use crate::number::{zero_sized, Convert, Decision, Logic, Number, NumberConverter};
use std::cmp::Ordering;

/// Owned coordinate storage of a Cartesian point.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianPoint<T> {
    coords: Box<[T]>,
}

impl<T> CartesianPoint<T> {
    /// Takes ownership of the coordinates.
    #[inline]
    pub fn from_vec(coords: Vec<T>) -> Self {
        Self {
            coords: coords.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.coords
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }
}

impl<C: NumberConverter, T: Convert<C>> Convert<C> for CartesianPoint<T> {
    type Output = CartesianPoint<T::Output>;

    fn convert_with(&self, converter: &C) -> Self::Output {
        CartesianPoint::from_vec(
            self.coords
                .iter()
                .map(|c| c.convert_with(converter))
                .collect(),
        )
    }
}

zero_sized!(
    /// Kernel over number type `T` and dimension `D`, with no filtering.
    Cartesian<T, D>
);
zero_sized!(
    /// Builds [`CartesianPoint`]s, checking the ambient dimension `D`.
    CartesianConstruct<T, D>
);
zero_sized!(
    /// Coordinate access with bounds checking.
    CartesianCoordinate<T>
);
zero_sized!(
    /// Length of the coordinate slice.
    CartesianDimension<T>
);
zero_sized!(
    /// Coordinate-wise equality under `T`'s comparison logic.
    CartesianEqual<T>
);
zero_sized!(
    /// `0..dimension`.
    CartesianRange<T>
);

impl<T: Number, D: Dimension> Kernel for Cartesian<T, D> {
    type FT = T;
    type Point = CartesianPoint<T>;
    type Dimension = D;

    type ConstructPoint = CartesianConstruct<T, D>;
    type ComputeCoordinate = CartesianCoordinate<T>;
    type PointDimension = CartesianDimension<T>;
    type EqualPoints = CartesianEqual<T>;
    type CoordinateRange = CartesianRange<T>;
}

impl<T: Number, D: Dimension> ConstructPoint<T, CartesianPoint<T>> for CartesianConstruct<T, D> {
    fn from_coords<I>(&self, coords: I) -> Result<CartesianPoint<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let coords: Vec<T> = coords.into_iter().collect();
        D::check(coords.len())?;
        Ok(CartesianPoint::from_vec(coords))
    }

    fn origin(&self, dimension: usize) -> CartesianPoint<T> {
        CartesianPoint::from_vec(vec![T::zero(); dimension])
    }
}

impl<T: Number> ComputeCoordinate<T, CartesianPoint<T>> for CartesianCoordinate<T> {
    #[inline]
    fn call(&self, point: &CartesianPoint<T>, index: usize) -> Result<T> {
        point
            .as_slice()
            .get(index)
            .cloned()
            .ok_or(CertumError::IndexOutOfRange {
                index,
                dimension: point.dimension(),
            })
    }
}

impl<T: Number> PointDimension<CartesianPoint<T>> for CartesianDimension<T> {
    #[inline]
    fn call(&self, point: &CartesianPoint<T>) -> usize {
        point.dimension()
    }
}

impl<T: Number> EqualPoints<CartesianPoint<T>> for CartesianEqual<T> {
    type Output = Decision<T, bool>;

    fn call(&self, p: &CartesianPoint<T>, q: &CartesianPoint<T>) -> Decision<T, bool> {
        if p.dimension() != q.dimension() {
            return <T::Logic as Logic>::certain(false);
        }
        <T::Logic as Logic>::all(
            p.as_slice()
                .iter()
                .zip(q.as_slice())
                .map(|(a, b)| <T::Logic as Logic>::map(a.compare(b), |o| o == Ordering::Equal)),
        )
    }
}

impl<T: Number> CoordinateRange<CartesianPoint<T>> for CartesianRange<T> {
    #[inline]
    fn end(&self, point: &CartesianPoint<T>) -> usize {
        point.dimension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{Const, Dynamic};
    use crate::number::{Exact, Interval, Uncertain};

    #[test]
    fn test_construct_checks_dimension() {
        let construct = CartesianConstruct::<f64, Const<2>>::default();
        assert!(construct.from_coords([1.0, 2.0]).is_ok());
        assert_eq!(
            construct.from_coords([1.0, 2.0, 3.0]),
            Err(CertumError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_dynamic_origin() {
        let construct = CartesianConstruct::<Exact, Dynamic>::default();
        let o = construct.origin(4);
        assert_eq!(o.dimension(), 4);
        assert!(o.as_slice().iter().all(|c| *c == Exact::from_f64(0.0)));
    }

    #[test]
    fn test_coordinate_out_of_range() {
        let p = CartesianPoint::from_vec(vec![1.0f64, 2.0]);
        let access = CartesianCoordinate::<f64>::default();
        assert_eq!(access.call(&p, 1), Ok(2.0));
        assert_eq!(
            access.call(&p, 2),
            Err(CertumError::IndexOutOfRange {
                index: 2,
                dimension: 2
            })
        );
    }

    #[test]
    fn test_interval_equality_is_tentative() {
        let equal = CartesianEqual::<Interval>::default();
        let p = CartesianPoint::from_vec(vec![Interval::point(1.0), Interval::new(0.0, 1.0)]);
        let q = CartesianPoint::from_vec(vec![Interval::point(1.0), Interval::point(0.5)]);
        let r = CartesianPoint::from_vec(vec![Interval::point(2.0), Interval::point(0.5)]);
        assert_eq!(equal.call(&p, &q), Uncertain::Indeterminate);
        // A certain mismatch in the first coordinate decides the result.
        assert_eq!(equal.call(&p, &r), Uncertain::Certain(false));
        assert_eq!(equal.call(&q, &q), Uncertain::Certain(true));
    }

    #[test]
    fn test_different_dimensions_are_unequal() {
        let equal = CartesianEqual::<f64>::default();
        let p = CartesianPoint::from_vec(vec![0.0]);
        let q = CartesianPoint::from_vec(vec![0.0, 0.0]);
        assert!(!equal.call(&p, &q));
    }
}
