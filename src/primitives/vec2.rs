//! 2D vector type for directions and offsets.

use crate::number::{Convert, Number, NumberConverter};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector representing a direction or offset.
///
/// Generic over any kernel [`Number`]. Operations borrow, since exact
/// numbers are not `Copy`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Vec2<T> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x.clone() * other.x.clone() + self.y.clone() * other.y.clone()
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns the magnitude. Rounds for non-square exact values.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Returns the vector rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self {
            x: -self.y.clone(),
            y: self.x.clone(),
        }
    }

    /// Divides both components by `scalar`.
    #[inline]
    pub fn scaled_down(&self, scalar: &T) -> Self {
        Self {
            x: self.x.clone() / scalar.clone(),
            y: self.y.clone() / scalar.clone(),
        }
    }
}

impl<T: Number> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Number> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Number> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self {
            x: self.x * scalar.clone(),
            y: self.y * scalar,
        }
    }
}

impl<T: Number> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<C: NumberConverter, T: Convert<C>> Convert<C> for Vec2<T> {
    type Output = Vec2<T::Output>;

    fn convert_with(&self, converter: &C) -> Self::Output {
        Vec2 {
            x: self.x.convert_with(converter),
            y: self.y.convert_with(converter),
        }
    }
}
