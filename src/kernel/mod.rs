//! Kernel capability registry.
//!
//! A kernel is a zero-sized type that names, for every operation the
//! crate relies on, the representation type and the functor implementing
//! it. Everything is resolved through associated types, so generic code
//! written against [`Kernel`] is monomorphised per kernel with no dynamic
//! dispatch.
//!
//! Lookup by tag mirrors the associated types:
//!
//! ```
//! use certum::kernel::{functor, Cartesian, Const, EqualPoints, EqualPointsTag, GetType, PointTag};
//!
//! type K = Cartesian<f64, Const<2>>;
//! let p: GetType<K, PointTag> = certum::kernel::CartesianPoint::from_vec(vec![1.0, 2.0]);
//! assert!(functor::<K, EqualPointsTag>().call(&p, &p));
//! ```

mod cartesian;
mod dimension;
mod filtered;

pub use cartesian::{
    Cartesian, CartesianConstruct, CartesianCoordinate, CartesianDimension, CartesianEqual,
    CartesianPoint, CartesianRange,
};
pub use dimension::{Const, Dimension, Dynamic};
pub use filtered::FilteredCartesian;

use crate::error::Result;
use crate::number::{Committed, Number, NumberConverter, Tentative};
use std::fmt;

/// Builds points from coordinates or from the origin.
pub trait ConstructPoint<FT, P>: Default + Copy {
    /// Consumes the coordinates and returns an owned point.
    ///
    /// Fails with [`CertumError::DimensionMismatch`](crate::CertumError)
    /// if the count disagrees with the kernel's ambient dimension.
    fn from_coords<I>(&self, coords: I) -> Result<P>
    where
        I: IntoIterator<Item = FT>;

    /// The all-zero point of the given dimension.
    fn origin(&self, dimension: usize) -> P;
}

/// Reads the i-th Cartesian coordinate.
pub trait ComputeCoordinate<FT, P>: Default + Copy {
    /// Fails with `IndexOutOfRange` if `index >= dimension`.
    fn call(&self, point: &P, index: usize) -> Result<FT>;
}

/// Reports a point's dimension.
pub trait PointDimension<P>: Default + Copy {
    fn call(&self, point: &P) -> usize;
}

/// Compares two points for geometric equality.
pub trait EqualPoints<P>: Default + Copy {
    /// `bool` for committed kernels, `Uncertain<bool>` for interval ones.
    type Output;

    fn call(&self, p: &P, q: &P) -> Self::Output;
}

/// Index bounds of coordinate iteration.
pub trait CoordinateRange<P>: Default + Copy {
    /// First index.
    #[inline]
    fn begin(&self, _point: &P) -> usize {
        0
    }

    /// One past the last index.
    fn end(&self, point: &P) -> usize;
}

/// The minimal capability set every kernel supplies.
pub trait Kernel: Sized {
    /// Field number type.
    type FT: Number;
    /// Point representation.
    type Point: Clone + fmt::Debug;
    /// Ambient dimension.
    type Dimension: Dimension;

    type ConstructPoint: ConstructPoint<Self::FT, Self::Point>;
    type ComputeCoordinate: ComputeCoordinate<Self::FT, Self::Point>;
    type PointDimension: PointDimension<Self::Point>;
    type EqualPoints: EqualPoints<Self::Point>;
    type CoordinateRange: CoordinateRange<Self::Point>;
}

/// A kernel whose operations are filtered through an interval kernel and
/// an exact kernel.
pub trait FilteringKernel: Kernel {
    /// Number type of the exact kernel.
    type ExactFT: Number<Logic = Committed>;
    /// Number type of the fast kernel.
    type FastFT: Number<Logic = Tentative>;

    /// Kernel used when the fast path cannot decide.
    type Exact: Kernel<FT = Self::ExactFT>;
    /// Kernel used for the first, cheap attempt.
    type Fast: Kernel<FT = Self::FastFT>;

    type ToExact: NumberConverter<Source = Self::FT, Target = Self::ExactFT>;
    type ToFast: NumberConverter<Source = Self::FT, Target = Self::FastFT>;
    type FromExact: NumberConverter<Source = Self::ExactFT, Target = Self::FT>;

    /// Tolerance on squared distances used to certify approximate
    /// constructions.
    const CERTIFICATION_EPSILON: f64 = crate::filtered::DEFAULT_CERTIFICATION_EPSILON;
}

/// Tag naming a representation type of a kernel.
pub trait TypeTag<K: Kernel> {
    type Type;
}

/// Tag naming a functor of a kernel.
pub trait FunctorTag<K: Kernel> {
    type Functor: Default + Copy;
}

/// Representation type registered for tag `T` in kernel `K`.
pub type GetType<K, T> = <T as TypeTag<K>>::Type;

/// Functor registered for tag `T` in kernel `K`.
pub type GetFunctor<K, T> = <T as FunctorTag<K>>::Functor;

/// Instantiates the functor registered for tag `T` in kernel `K`.
#[inline]
pub fn functor<K: Kernel, T: FunctorTag<K>>() -> GetFunctor<K, T> {
    Default::default()
}

macro_rules! tags {
    ($($(#[$meta:meta])* $tag:ident => $kind:ident :: $assoc:ident = $target:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $tag;

            impl<K: Kernel> $kind<K> for $tag {
                type $assoc = K::$target;
            }
        )+
    };
}

tags! {
    /// The field number type.
    FtTag => TypeTag::Type = FT;
    /// The point representation.
    PointTag => TypeTag::Type = Point;
    /// Point construction.
    ConstructPointTag => FunctorTag::Functor = ConstructPoint;
    /// Coordinate access.
    ComputeCoordinateTag => FunctorTag::Functor = ComputeCoordinate;
    /// Point dimension.
    PointDimensionTag => FunctorTag::Functor = PointDimension;
    /// Point equality.
    EqualPointsTag => FunctorTag::Functor = EqualPoints;
    /// Coordinate iteration bounds.
    CoordinateRangeTag => FunctorTag::Functor = CoordinateRange;
}
