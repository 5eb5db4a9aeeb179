//! Time at which the offset lines of three edges meet.

use super::offset_point::unit_normal;
use crate::filtered::Construction;
use crate::number::{zero_sized, Committed, Number};
use crate::primitives::{SortedTriedge, Triedge, TriedgeCollinearity};

/// Event time of a sorted triedge as `numerator / denominator`.
///
/// Each edge `i` is offset along its unit left normal `n_i`, giving the
/// line `n_i . p = t + k_i`. With no collinear pair the three lines meet
/// where
///
/// ```text
/// t = -(k0 (n1 x n2) + k1 (n2 x n0) + k2 (n0 x n1)) / (n1 x n2 + n2 x n0 + n0 x n1)
/// ```
///
/// When `e0` and `e1` are collinear the event lies on the normal through
/// the midpoint `q` of their shared vertex, so `t = (n2 . q - k2) / (1 - n2 . n0)`.
///
/// `None` when all three edges are collinear or an edge has zero length.
/// A zero denominator means the offset lines never meet.
pub(crate) fn event_time_ratio<T: Number>(triedge: &SortedTriedge<T>) -> Option<(T, T)> {
    let Triedge { e0, e1, e2 } = triedge.edges();
    match triedge.collinearity() {
        TriedgeCollinearity::All => None,
        TriedgeCollinearity::Collinear01 => {
            let n0 = unit_normal(e0)?;
            let n2 = unit_normal(e2)?;
            let q = e0.end.midpoint(&e1.start);
            let k2 = n2.dot(&e2.start.to_vec());
            Some((n2.dot(&q.to_vec()) - k2, T::one() - n2.dot(&n0)))
        }
        _ => {
            let n0 = unit_normal(e0)?;
            let n1 = unit_normal(e1)?;
            let n2 = unit_normal(e2)?;
            let k0 = n0.dot(&e0.start.to_vec());
            let k1 = n1.dot(&e1.start.to_vec());
            let k2 = n2.dot(&e2.start.to_vec());
            let c12 = n1.cross(&n2);
            let c20 = n2.cross(&n0);
            let c01 = n0.cross(&n1);
            let numerator = -(k0 * c12.clone() + k1 * c20.clone() + k2 * c01.clone());
            Some((numerator, c12 + c20 + c01))
        }
    }
}

zero_sized!(
    /// Offset distance at which the offset lines of a sorted triedge meet.
    ///
    /// `None` if they never meet.
    ConstructEventTime<T>
);

impl<T> Construction<SortedTriedge<T>> for ConstructEventTime<T>
where
    T: Number<Logic = Committed>,
{
    type Output = T;

    fn construct(&self, triedge: &SortedTriedge<T>) -> Option<T> {
        let (numerator, denominator) = event_time_ratio(triedge)?;
        if denominator == T::zero() {
            return None;
        }
        Some(numerator / denominator)
    }
}
