//! The filtering Cartesian kernel.

use super::{
    Cartesian, CartesianConstruct, CartesianCoordinate, CartesianDimension, CartesianEqual,
    CartesianPoint, CartesianRange, Dimension, FilteringKernel, Kernel,
};
use crate::filtered::FilteredPredicate;
use crate::number::{zero_sized, Exact, FromExact, Interval, ToExact, ToInterval};

zero_sized!(
    /// Double-precision kernel whose predicates are filtered.
    ///
    /// Points are stored as `f64`. Predicates run on
    /// `Cartesian<Interval, D>` and fall back to `Cartesian<Exact, D>`.
    FilteredCartesian<D>
);

impl<D: Dimension> Kernel for FilteredCartesian<D> {
    type FT = f64;
    type Point = CartesianPoint<f64>;
    type Dimension = D;

    type ConstructPoint = CartesianConstruct<f64, D>;
    type ComputeCoordinate = CartesianCoordinate<f64>;
    type PointDimension = CartesianDimension<f64>;
    type EqualPoints = FilteredPredicate<
        CartesianEqual<Interval>,
        CartesianEqual<Exact>,
        ToInterval<f64>,
        ToExact<f64>,
    >;
    type CoordinateRange = CartesianRange<f64>;
}

impl<D: Dimension> FilteringKernel for FilteredCartesian<D> {
    type ExactFT = Exact;
    type FastFT = Interval;

    type Exact = Cartesian<Exact, D>;
    type Fast = Cartesian<Interval, D>;

    type ToExact = ToExact<f64>;
    type ToFast = ToInterval<f64>;
    type FromExact = FromExact<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{functor, Const, ConstructPointTag, EqualPoints, EqualPointsTag, GetType};
    use crate::kernel::{ConstructPoint, FtTag};
    use crate::number::NumberConverter;

    type K = FilteredCartesian<Const<3>>;

    #[test]
    fn test_filtered_equality_decides_near_misses() {
        let construct = functor::<K, ConstructPointTag>();
        let p = construct.from_coords([0.1 + 0.2, 1.0, 2.0]).expect("3d");
        let q = construct.from_coords([0.3, 1.0, 2.0]).expect("3d");
        let equal = functor::<K, EqualPointsTag>();
        assert!(equal.call(&p, &p));
        assert!(!equal.call(&p, &q));
    }

    #[test]
    fn test_converters_round_trip() {
        let x: GetType<K, FtTag> = 0.1;
        let exact = <K as FilteringKernel>::ToExact::default().convert(&x);
        let back = <K as FilteringKernel>::FromExact::default().convert(&exact);
        assert_eq!(back, x);
        assert!(<K as FilteringKernel>::ToFast::default().convert(&x).contains(x));
    }

    #[test]
    fn test_default_certification_epsilon() {
        assert_eq!(<K as FilteringKernel>::CERTIFICATION_EPSILON, 1e-5);
    }
}
