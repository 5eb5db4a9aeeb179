//! Kernel-parameterised point of arbitrary dimension.

use crate::error::Result;
use crate::kernel::{
    functor, ComputeCoordinate, ComputeCoordinateTag, Const, ConstructPoint, ConstructPointTag,
    CoordinateRange, CoordinateRangeTag, Dimension, EqualPoints, EqualPointsTag, Kernel,
    PointDimension, PointDimensionTag,
};
use std::fmt;
use std::iter::FusedIterator;

/// Marker requesting the all-zero point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Origin;

/// A point whose storage and semantics are supplied by kernel `K`.
///
/// Every operation goes through the kernel's registered functors.
/// Equality in particular uses the kernel's equal-points predicate, so
/// points built along different paths compare by the position they denote.
pub struct PointD<K: Kernel> {
    rep: K::Point,
}

impl<K: Kernel> PointD<K> {
    /// Builds a point from its coordinates.
    ///
    /// Fails if the kernel rejects the coordinates, e.g. on a dimension
    /// mismatch.
    pub fn new<I>(coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = K::FT>,
    {
        let rep = functor::<K, ConstructPointTag>().from_coords(coords)?;
        Ok(Self { rep })
    }

    /// The origin of the given dimension, built by the kernel's zero-point
    /// operation.
    pub fn origin_in(dimension: usize) -> Result<Self> {
        K::Dimension::check(dimension)?;
        Ok(Self {
            rep: functor::<K, ConstructPointTag>().origin(dimension),
        })
    }

    /// Wraps a representation computed elsewhere.
    ///
    /// Use sparingly: this bypasses the kernel's construction checks.
    #[inline]
    pub fn from_rep(rep: K::Point) -> Self {
        Self { rep }
    }

    /// Applies `f` to `args` now and wraps the representation it returns.
    #[inline]
    pub fn from_eval<F, A>(f: F, args: A) -> Self
    where
        F: FnOnce(A) -> K::Point,
    {
        Self { rep: f(args) }
    }

    /// The underlying representation.
    #[inline]
    pub fn rep(&self) -> &K::Point {
        &self.rep
    }

    #[inline]
    pub fn into_rep(self) -> K::Point {
        self.rep
    }

    /// The `index`-th Cartesian coordinate, counting from zero.
    #[inline]
    pub fn coordinate(&self, index: usize) -> Result<K::FT> {
        functor::<K, ComputeCoordinateTag>().call(&self.rep, index)
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        functor::<K, PointDimensionTag>().call(&self.rep)
    }

    /// Coordinates in index order.
    pub fn coordinates(&self) -> Coordinates<'_, K> {
        let range = functor::<K, CoordinateRangeTag>();
        Coordinates {
            point: &self.rep,
            next: range.begin(&self.rep),
            end: range.end(&self.rep),
        }
    }
}

impl<K: Kernel, const N: usize> From<Origin> for PointD<K>
where
    K: Kernel<Dimension = Const<N>>,
{
    #[inline]
    fn from(_: Origin) -> Self {
        Self {
            rep: functor::<K, ConstructPointTag>().origin(N),
        }
    }
}

impl<K: Kernel> Clone for PointD<K> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            rep: self.rep.clone(),
        }
    }
}

impl<K: Kernel> fmt::Debug for PointD<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointD").field(&self.rep).finish()
    }
}

impl<K: Kernel> PartialEq for PointD<K>
where
    K::EqualPoints: EqualPoints<K::Point, Output = bool>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        functor::<K, EqualPointsTag>().call(&self.rep, &other.rep)
    }
}

impl<K: Kernel> Eq for PointD<K> where K::EqualPoints: EqualPoints<K::Point, Output = bool> {}

/// Iterator over a point's coordinates.
pub struct Coordinates<'a, K: Kernel> {
    point: &'a K::Point,
    next: usize,
    end: usize,
}

impl<K: Kernel> Iterator for Coordinates<'_, K> {
    type Item = K::FT;

    fn next(&mut self) -> Option<K::FT> {
        if self.next >= self.end {
            return None;
        }
        let coord = functor::<K, ComputeCoordinateTag>()
            .call(self.point, self.next)
            .ok()?;
        self.next += 1;
        Some(coord)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<K: Kernel> ExactSizeIterator for Coordinates<'_, K> {}

impl<K: Kernel> FusedIterator for Coordinates<'_, K> {}

impl<'a, K: Kernel> IntoIterator for &'a PointD<K> {
    type Item = K::FT;
    type IntoIter = Coordinates<'a, K>;

    #[inline]
    fn into_iter(self) -> Coordinates<'a, K> {
        self.coordinates()
    }
}
