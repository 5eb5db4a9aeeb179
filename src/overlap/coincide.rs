//! Detecting coincident segments and recording their overlap.

use super::{NodeId, OverlapHierarchy};
use crate::error::{CertumError, Result};
use crate::planar::PlanarTraits;
use crate::primitives::{Point2, Segment2};
use std::cmp::Ordering;

/// Endpoints of `segment` in `compare_xy` order.
fn sorted_ends<T: PlanarTraits>(
    traits: &T,
    segment: &Segment2<T::FT>,
) -> (Point2<T::FT>, Point2<T::FT>) {
    match traits.compare_xy(&segment.start, &segment.end) {
        Ordering::Greater => (segment.end.clone(), segment.start.clone()),
        _ => (segment.start.clone(), segment.end.clone()),
    }
}

/// The common part of two segments, if they are collinear and share more
/// than a single point.
pub fn overlapping_part<T: PlanarTraits>(
    traits: &T,
    a: &Segment2<T::FT>,
    b: &Segment2<T::FT>,
) -> Option<Segment2<T::FT>> {
    if !traits.are_collinear(&a.start, &a.end, &b.start)
        || !traits.are_collinear(&a.start, &a.end, &b.end)
    {
        return None;
    }
    let (a_lo, a_hi) = sorted_ends(traits, a);
    let (b_lo, b_hi) = sorted_ends(traits, b);
    let lo = match traits.compare_xy(&a_lo, &b_lo) {
        Ordering::Less => b_lo,
        _ => a_lo,
    };
    let hi = match traits.compare_xy(&a_hi, &b_hi) {
        Ordering::Greater => b_hi,
        _ => a_hi,
    };
    match traits.compare_xy(&lo, &hi) {
        Ordering::Less => Some(Segment2::new(lo, hi)),
        _ => None,
    }
}

/// Merges `first` and `second` if their segments overlap.
///
/// Returns the new node, carrying the overlapping part, or `None` when the
/// segments do not coincide along a stretch of positive length.
pub fn record_overlap<T: PlanarTraits>(
    hierarchy: &mut OverlapHierarchy<Segment2<T::FT>>,
    first: NodeId,
    second: NodeId,
    traits: &T,
) -> Result<Option<NodeId>> {
    let curve_of = |id: NodeId| {
        hierarchy
            .curve(id)
            .ok_or_else(|| CertumError::UnknownNode { index: id.index() })
    };
    let overlap = overlapping_part(traits, curve_of(first)?, curve_of(second)?);
    match overlap {
        Some(part) => hierarchy.merge(part, first, second).map(Some),
        None => Ok(None),
    }
}
