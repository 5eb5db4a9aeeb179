//! Intersection of two offset lines.

use crate::filtered::{Certify, Construction};
use crate::number::{zero_sized, Committed, Number};
use crate::primitives::{Point2, Segment2, Vec2};

zero_sized!(
    /// The point at distance `t` to the left of both generator segments.
    ///
    /// Arguments are `(t, e0, e1)`. Each segment is offset along its unit
    /// left normal `n`, giving the line `n . p = t + n . start`; the result
    /// is the intersection of the two lines. `None` if either segment has
    /// zero length or the offset lines are parallel.
    ///
    /// Normalising needs a square root, so the exact instantiation
    /// carries the 128-bit truncation of [`Exact`](crate::number::Exact)'s `sqrt`
    /// whenever an edge length is irrational.
    ConstructOffsetPoint<T>
);

/// Unit left normal of a segment, `None` if the segment is degenerate.
pub(super) fn unit_normal<T: Number>(segment: &Segment2<T>) -> Option<Vec2<T>> {
    let direction = segment.direction();
    let length = direction.magnitude();
    if length == T::zero() {
        return None;
    }
    Some(direction.perpendicular().scaled_down(&length))
}

impl<T> Construction<(T, Segment2<T>, Segment2<T>)> for ConstructOffsetPoint<T>
where
    T: Number<Logic = Committed>,
{
    type Output = Point2<T>;

    fn construct(&self, (t, e0, e1): &(T, Segment2<T>, Segment2<T>)) -> Option<Point2<T>> {
        let n0 = unit_normal(e0)?;
        let n1 = unit_normal(e1)?;

        let det = n0.cross(&n1);
        if det == T::zero() {
            return None;
        }

        let r0 = t.clone() + n0.dot(&e0.start.to_vec());
        let r1 = t.clone() + n1.dot(&e1.start.to_vec());

        let x = (r0.clone() * n1.y.clone() - r1.clone() * n0.y.clone()) / det.clone();
        let y = (n0.x * r1 - n1.x * r0) / det;
        Some(Point2::new(x, y))
    }
}

impl<T> Certify<(T, Segment2<T>, Segment2<T>)> for ConstructOffsetPoint<T>
where
    T: Number<Logic = Committed>,
{
    /// Both squared distances to the supporting lines must be `t^2`.
    fn is_accurate(
        &self,
        (t, e0, e1): &(T, Segment2<T>, Segment2<T>),
        point: &Point2<T>,
        epsilon: f64,
    ) -> bool {
        let target = t.square();
        [e0, e1].into_iter().all(|segment| {
            let residual = segment.squared_distance_to_line(point) - target.clone();
            residual.to_f64().abs() < epsilon
        })
    }
}
