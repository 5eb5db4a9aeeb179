//! Planar predicates, generic over the number type.
//!
//! Each predicate returns `Decision<T, R>`: the bare answer for committed
//! number types, `Uncertain<R>` for intervals. Pair an interval and an
//! exact instantiation in a [`FilteredPredicate`](crate::filtered::FilteredPredicate)
//! to get an always-decided answer.

mod triedge;

pub use triedge::{ClassifyTriedge, CompareOffsetAgainstEventTime};

use crate::filtered::Predicate;
use crate::number::{zero_sized, Decision, Logic, Number};
use crate::primitives::Point2;
use std::cmp::Ordering;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear.
    Collinear,
}

impl From<Ordering> for Orientation {
    /// Maps the sign of twice the signed area.
    #[inline]
    fn from(sign: Ordering) -> Self {
        match sign {
            Ordering::Greater => Orientation::CounterClockwise,
            Ordering::Less => Orientation::Clockwise,
            Ordering::Equal => Orientation::Collinear,
        }
    }
}

zero_sized!(
    /// Orientation of the triangle `(a, b, c)`.
    ///
    /// `CounterClockwise` if `c` lies left of the directed line `a -> b`.
    Orient2<T>
);
zero_sized!(
    /// Lexicographic comparison of points, `x` first.
    CompareXy<T>
);

impl<T: Number> Predicate<(Point2<T>, Point2<T>, Point2<T>)> for Orient2<T> {
    type Output = Decision<T, Orientation>;

    #[inline]
    fn eval(&self, (a, b, c): &(Point2<T>, Point2<T>, Point2<T>)) -> Self::Output {
        // Twice the signed area of abc.
        let ab = b.clone() - a.clone();
        let ac = c.clone() - a.clone();
        <T::Logic as Logic>::map(ab.cross(&ac).sign(), Orientation::from)
    }
}

impl<T: Number> Predicate<(Point2<T>, Point2<T>)> for CompareXy<T> {
    type Output = Decision<T, Ordering>;

    #[inline]
    fn eval(&self, (p, q): &(Point2<T>, Point2<T>)) -> Self::Output {
        <T::Logic as Logic>::and_then(p.x.compare(&q.x), |by_x| match by_x {
            Ordering::Equal => p.y.compare(&q.y),
            decided => <T::Logic as Logic>::certain(decided),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{Exact, Interval, Uncertain};

    #[test]
    fn test_orientation_float() {
        let a = Point2::new(0.0f64, 0.0);
        let b = Point2::new(1.0, 0.0);
        let orient = Orient2::<f64>::default();
        assert_eq!(
            orient.eval(&(a.clone(), b.clone(), Point2::new(0.5, 1.0))),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orient.eval(&(a.clone(), b.clone(), Point2::new(0.5, -1.0))),
            Orientation::Clockwise
        );
        assert_eq!(
            orient.eval(&(a, b, Point2::new(2.0, 0.0))),
            Orientation::Collinear
        );
    }

    #[test]
    fn test_orientation_exact_detects_tiny_area() {
        // Third point above the diagonal by 2^-60.
        let a = Point2::<Exact>::from_f64(0.0, 0.0);
        let b = Point2::from_f64(1.0, 1.0);
        let c = Point2::from_f64(2f64.powi(-60), 2f64.powi(-59));
        assert_eq!(
            Orient2::<Exact>::default().eval(&(a, b, c)),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn test_orientation_interval_can_be_undecided() {
        let a = Point2::new(Interval::point(0.0), Interval::point(0.0));
        let b = Point2::new(Interval::point(1.0), Interval::point(1.0));
        let c = Point2::new(Interval::new(0.4, 0.6), Interval::new(0.4, 0.6));
        assert_eq!(
            Orient2::<Interval>::default().eval(&(a, b, c)),
            Uncertain::Indeterminate
        );
    }

    #[test]
    fn test_compare_xy_breaks_ties_on_y() {
        let cmp = CompareXy::<f64>::default();
        assert_eq!(
            cmp.eval(&(Point2::new(1.0, 5.0), Point2::new(2.0, 0.0))),
            Ordering::Less
        );
        assert_eq!(
            cmp.eval(&(Point2::new(1.0, 5.0), Point2::new(1.0, 0.0))),
            Ordering::Greater
        );
        assert_eq!(
            cmp.eval(&(Point2::new(1.0, 5.0), Point2::new(1.0, 5.0))),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_xy_interval_decides_on_x_alone() {
        let cmp = CompareXy::<Interval>::default();
        let p = Point2::new(Interval::point(0.0), Interval::new(0.0, 10.0));
        let q = Point2::new(Interval::point(1.0), Interval::point(5.0));
        assert_eq!(cmp.eval(&(p, q)), Uncertain::Certain(Ordering::Less));
    }
}
