//! 2D point type.

use super::Vec2;
use crate::number::{Convert, Number, NumberConverter};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates over a kernel number type.
#[derive(Debug, Clone, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Point2<T> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a point from double coordinates.
    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: T::from_f64(x),
            y: T::from_f64(y),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        (other.clone() - self.clone()).magnitude_squared()
    }

    /// The point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        let two = T::one() + T::one();
        self.clone() + (other.clone() - self.clone()).scaled_down(&two)
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(&self) -> Vec2<T> {
        Vec2::new(self.x.clone(), self.y.clone())
    }
}

// Point - Point = Vec2
impl<T: Number> Sub for Point2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<T> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<T: Number> Add<Vec2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<T>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<C: NumberConverter, T: Convert<C>> Convert<C> for Point2<T> {
    type Output = Point2<T::Output>;

    fn convert_with(&self, converter: &C) -> Self::Output {
        Point2 {
            x: self.x.convert_with(converter),
            y: self.y.convert_with(converter),
        }
    }
}
