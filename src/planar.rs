//! Planar predicate and construction bundles.
//!
//! Offset and sweep algorithms are written once against [`PlanarKernel`].
//! Plain kernels answer directly through [`Unfiltered`]; filtering kernels
//! route every predicate through a [`FilteredPredicate`] and every
//! construction through an [`ExceptionlessFilteredConstruction`] via
//! [`Filtered`].

use crate::constructions::ConstructOffsetPoint;
use crate::filtered::{
    Construction, ExceptionlessFilteredConstruction, FilteredPredicate, Predicate,
};
use crate::kernel::{Cartesian, Dimension, FilteredCartesian, FilteringKernel, Kernel};
use crate::number::{zero_sized, Committed, Identity, Number};
use crate::predicates::{
    ClassifyTriedge, CompareOffsetAgainstEventTime, CompareXy, Orient2, Orientation,
};
use crate::primitives::{Point2, Segment2, SortedTriedge, Triedge, TriedgeCollinearity};
use std::cmp::Ordering;

/// Predicates and constructions needed by offset builders.
pub trait PlanarTraits: Default + Copy {
    type FT: Number;

    /// Orientation of `(p, q, r)`.
    fn orientation(
        &self,
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
        r: &Point2<Self::FT>,
    ) -> Orientation;

    #[inline]
    fn are_collinear(
        &self,
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
        r: &Point2<Self::FT>,
    ) -> bool {
        self.orientation(p, q, r) == Orientation::Collinear
    }

    /// Lexicographic order, `x` first.
    fn compare_xy(&self, p: &Point2<Self::FT>, q: &Point2<Self::FT>) -> Ordering;

    /// Which edges of `triedge` share a supporting line.
    fn triedge_collinearity(&self, triedge: &Triedge<Self::FT>) -> TriedgeCollinearity;

    /// Classifies `triedge` and moves its collinear pair, if any, first.
    #[inline]
    fn construct_sorted_triedge(&self, triedge: &Triedge<Self::FT>) -> SortedTriedge<Self::FT> {
        triedge.clone().sorted(self.triedge_collinearity(triedge))
    }

    /// Orders the offset distance `t` against the time at which the offset
    /// lines of `event` meet; `None` if they never meet.
    fn compare_offset_against_event_time(
        &self,
        t: &Self::FT,
        event: &SortedTriedge<Self::FT>,
    ) -> Option<Ordering>;

    /// Point at offset `t` from both `e0` and `e1`; `None` if degenerate.
    fn construct_offset_point(
        &self,
        t: &Self::FT,
        e0: &Segment2<Self::FT>,
        e1: &Segment2<Self::FT>,
    ) -> Option<Point2<Self::FT>>;
}

/// A kernel with a planar trait bundle.
pub trait PlanarKernel: Kernel {
    type Traits: PlanarTraits<FT = Self::FT>;
}

zero_sized!(
    /// Direct evaluation on the kernel's own number type.
    Unfiltered<K>
);
zero_sized!(
    /// Filtered evaluation through the kernel's fast and exact kernels.
    Filtered<K>
);

impl<K> PlanarTraits for Unfiltered<K>
where
    K: Kernel,
    K::FT: Number<Logic = Committed>,
{
    type FT = K::FT;

    #[inline]
    fn orientation(&self, p: &Point2<K::FT>, q: &Point2<K::FT>, r: &Point2<K::FT>) -> Orientation {
        Orient2::<K::FT>::default().eval(&(p.clone(), q.clone(), r.clone()))
    }

    #[inline]
    fn compare_xy(&self, p: &Point2<K::FT>, q: &Point2<K::FT>) -> Ordering {
        CompareXy::<K::FT>::default().eval(&(p.clone(), q.clone()))
    }

    #[inline]
    fn triedge_collinearity(&self, triedge: &Triedge<K::FT>) -> TriedgeCollinearity {
        ClassifyTriedge::<K::FT>::default().eval(triedge)
    }

    #[inline]
    fn compare_offset_against_event_time(
        &self,
        t: &K::FT,
        event: &SortedTriedge<K::FT>,
    ) -> Option<Ordering> {
        CompareOffsetAgainstEventTime::<K::FT>::default().eval(&(t.clone(), event.clone()))
    }

    /// No certification: the kernel's arithmetic is taken as is.
    fn construct_offset_point(
        &self,
        t: &K::FT,
        e0: &Segment2<K::FT>,
        e1: &Segment2<K::FT>,
    ) -> Option<Point2<K::FT>> {
        ConstructOffsetPoint::<K::FT>::default().construct(&(t.clone(), e0.clone(), e1.clone()))
    }
}

type FilteredOrient<K> = FilteredPredicate<
    Orient2<<K as FilteringKernel>::FastFT>,
    Orient2<<K as FilteringKernel>::ExactFT>,
    <K as FilteringKernel>::ToFast,
    <K as FilteringKernel>::ToExact,
>;

type FilteredCompareXy<K> = FilteredPredicate<
    CompareXy<<K as FilteringKernel>::FastFT>,
    CompareXy<<K as FilteringKernel>::ExactFT>,
    <K as FilteringKernel>::ToFast,
    <K as FilteringKernel>::ToExact,
>;

type FilteredClassifyTriedge<K> = FilteredPredicate<
    ClassifyTriedge<<K as FilteringKernel>::FastFT>,
    ClassifyTriedge<<K as FilteringKernel>::ExactFT>,
    <K as FilteringKernel>::ToFast,
    <K as FilteringKernel>::ToExact,
>;

type FilteredCompareEventTime<K> = FilteredPredicate<
    CompareOffsetAgainstEventTime<<K as FilteringKernel>::FastFT>,
    CompareOffsetAgainstEventTime<<K as FilteringKernel>::ExactFT>,
    <K as FilteringKernel>::ToFast,
    <K as FilteringKernel>::ToExact,
>;

type FilteredOffsetPoint<K> = ExceptionlessFilteredConstruction<
    ConstructOffsetPoint<<K as Kernel>::FT>,
    ConstructOffsetPoint<<K as FilteringKernel>::ExactFT>,
    Identity<<K as Kernel>::FT>,
    <K as FilteringKernel>::ToExact,
    Identity<<K as Kernel>::FT>,
    <K as FilteringKernel>::FromExact,
>;

impl<K> PlanarTraits for Filtered<K>
where
    K: FilteringKernel,
    K::FT: Number<Logic = Committed>,
{
    type FT = K::FT;

    #[inline]
    fn orientation(&self, p: &Point2<K::FT>, q: &Point2<K::FT>, r: &Point2<K::FT>) -> Orientation {
        FilteredOrient::<K>::default().eval(&(p.clone(), q.clone(), r.clone()))
    }

    #[inline]
    fn compare_xy(&self, p: &Point2<K::FT>, q: &Point2<K::FT>) -> Ordering {
        FilteredCompareXy::<K>::default().eval(&(p.clone(), q.clone()))
    }

    #[inline]
    fn triedge_collinearity(&self, triedge: &Triedge<K::FT>) -> TriedgeCollinearity {
        FilteredClassifyTriedge::<K>::default().eval(triedge)
    }

    #[inline]
    fn compare_offset_against_event_time(
        &self,
        t: &K::FT,
        event: &SortedTriedge<K::FT>,
    ) -> Option<Ordering> {
        FilteredCompareEventTime::<K>::default().eval(&(t.clone(), event.clone()))
    }

    fn construct_offset_point(
        &self,
        t: &K::FT,
        e0: &Segment2<K::FT>,
        e1: &Segment2<K::FT>,
    ) -> Option<Point2<K::FT>> {
        FilteredOffsetPoint::<K>::with_epsilon(K::CERTIFICATION_EPSILON)
            .construct(&(t.clone(), e0.clone(), e1.clone()))
    }
}

impl<T, D> PlanarKernel for Cartesian<T, D>
where
    T: Number<Logic = Committed>,
    D: Dimension,
{
    type Traits = Unfiltered<Self>;
}

impl<D: Dimension> PlanarKernel for FilteredCartesian<D> {
    type Traits = Filtered<Self>;
}

/// Offsets every vertex of a closed polygon by `t` towards the left of its
/// edges (the interior, for counter-clockwise input).
///
/// Each entry is the intersection of the offset lines of the two edges
/// meeting at that vertex, or `None` where they are parallel or an edge
/// is degenerate.
pub fn offset_vertices<K: PlanarKernel>(
    vertices: &[Point2<K::FT>],
    t: &K::FT,
) -> Vec<Option<Point2<K::FT>>> {
    let traits = K::Traits::default();
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let prev = &vertices[(i + n - 1) % n];
            let curr = &vertices[i];
            let next = &vertices[(i + 1) % n];
            let incoming = Segment2::new(prev.clone(), curr.clone());
            let outgoing = Segment2::new(curr.clone(), next.clone());
            traits.construct_offset_point(t, &incoming, &outgoing)
        })
        .collect()
}

/// Returns the vertex of `vertices` that is smallest in `compare_xy` order.
pub fn lowest_vertex<K: PlanarKernel>(vertices: &[Point2<K::FT>]) -> Option<&Point2<K::FT>> {
    let traits = K::Traits::default();
    vertices
        .iter()
        .min_by(|a, b| traits.compare_xy(a, b))
}
