//! 2D line segment type.

use super::{Point2, Vec2};
use crate::number::{Convert, Number, NumberConverter};

/// A 2D line segment defined by two endpoints.
///
/// Segments are directed: offset constructions treat the left side of
/// `start -> end` as the interior.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment2<T> {
    pub start: Point2<T>,
    pub end: Point2<T>,
}

impl<T: Number> Segment2<T> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from double coordinate pairs.
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point2::from_f64(x1, y1),
            end: Point2::from_f64(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(&self) -> Vec2<T> {
        self.end.clone() - self.start.clone()
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.start.distance_squared(&self.end)
    }

    /// Squared distance from `p` to the supporting line.
    ///
    /// Division free apart from the final normalisation, so exact types
    /// compute it without rounding. A degenerate segment yields the
    /// squared distance to its start point.
    pub fn squared_distance_to_line(&self, p: &Point2<T>) -> T {
        let d = self.direction();
        let len_sq = d.magnitude_squared();
        let w = p.clone() - self.start.clone();
        if len_sq == T::zero() {
            return w.magnitude_squared();
        }
        d.cross(&w).square() / len_sq
    }
}

impl<T: Number> From<(Point2<T>, Point2<T>)> for Segment2<T> {
    fn from((start, end): (Point2<T>, Point2<T>)) -> Self {
        Self::new(start, end)
    }
}

impl<C: NumberConverter, T: Convert<C>> Convert<C> for Segment2<T> {
    type Output = Segment2<T::Output>;

    fn convert_with(&self, converter: &C) -> Self::Output {
        Segment2 {
            start: self.start.convert_with(converter),
            end: self.end.convert_with(converter),
        }
    }
}
