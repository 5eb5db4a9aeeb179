//! Closed `f64` intervals with outward rounding.

use super::{Exact, Number, Tentative, Uncertain};
use num_traits::{One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A closed interval `[lo, hi]` guaranteed to contain the real value it
/// approximates.
///
/// Every operation rounds its bounds one ulp outward, so the enclosure
/// survives any sequence of operations. Comparisons are decided only when
/// the intervals are disjoint (or both are the same single point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// The interval `[value, value]`.
    #[inline]
    pub fn point(value: f64) -> Self {
        Self { lo: value, hi: value }
    }

    /// Creates `[lo, hi]`. Bounds are swapped if given out of order.
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Self {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    /// The whole real line.
    #[inline]
    pub fn entire() -> Self {
        Self {
            lo: f64::NEG_INFINITY,
            hi: f64::INFINITY,
        }
    }

    /// Smallest interval with `f64` bounds enclosing an exact rational.
    pub fn enclosing(value: &Exact) -> Self {
        let nearest = ToPrimitive::to_f64(value).unwrap_or(f64::NAN);
        if nearest.is_nan() {
            return Self::entire();
        }
        match Exact::from_float(nearest) {
            Some(back) if back == *value => Self::point(nearest),
            _ => Self {
                lo: next_down(nearest),
                hi: next_up(nearest),
            },
        }
    }

    /// Lower bound.
    #[inline]
    pub fn lo(self) -> f64 {
        self.lo
    }

    /// Upper bound.
    #[inline]
    pub fn hi(self) -> f64 {
        self.hi
    }

    /// Width of the enclosure.
    #[inline]
    pub fn width(self) -> f64 {
        self.hi - self.lo
    }

    /// Returns `true` if `value` lies inside the interval.
    #[inline]
    pub fn contains(self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Returns `true` if the interval is a single point.
    #[inline]
    pub fn is_point(self) -> bool {
        self.lo == self.hi
    }

    #[inline]
    fn widened(lo: f64, hi: f64) -> Self {
        if lo.is_nan() || hi.is_nan() {
            return Self::entire();
        }
        Self {
            lo: next_down(lo),
            hi: next_up(hi),
        }
    }

    fn hull4(values: [f64; 4]) -> Self {
        if values.iter().any(|v| v.is_nan()) {
            return Self::entire();
        }
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::widened(lo, hi)
    }
}

/// Next representable double towards +∞.
pub(crate) fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Next representable double towards -∞.
pub(crate) fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

impl Add for Interval {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::widened(self.lo + rhs.lo, self.hi + rhs.hi)
    }
}

impl Sub for Interval {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::widened(self.lo - rhs.hi, self.hi - rhs.lo)
    }
}

impl Mul for Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::hull4([
            self.lo * rhs.lo,
            self.lo * rhs.hi,
            self.hi * rhs.lo,
            self.hi * rhs.hi,
        ])
    }
}

impl Div for Interval {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        if rhs.lo <= 0.0 && rhs.hi >= 0.0 {
            return Self::entire();
        }
        Self::hull4([
            self.lo / rhs.lo,
            self.lo / rhs.hi,
            self.hi / rhs.lo,
            self.hi / rhs.hi,
        ])
    }
}

impl Neg for Interval {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Zero for Interval {
    #[inline]
    fn zero() -> Self {
        Self::point(0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.lo == 0.0 && self.hi == 0.0
    }
}

impl One for Interval {
    #[inline]
    fn one() -> Self {
        Self::point(1.0)
    }
}

impl Number for Interval {
    type Logic = Tentative;

    const IS_EXACT: bool = false;

    #[inline]
    fn from_f64(value: f64) -> Self {
        Self::point(value)
    }

    /// Midpoint of the enclosure.
    fn to_f64(&self) -> f64 {
        if self.is_point() {
            self.lo
        } else {
            self.lo * 0.5 + self.hi * 0.5
        }
    }

    /// Exact value of the midpoint; lossy for non-point intervals.
    fn to_exact(&self) -> Exact {
        Number::to_exact(&Number::to_f64(self))
    }

    #[inline]
    fn from_exact(value: &Exact) -> Self {
        Self::enclosing(value)
    }

    #[inline]
    fn to_interval(&self) -> Interval {
        *self
    }

    fn compare(&self, other: &Self) -> Uncertain<Ordering> {
        if self.hi < other.lo {
            Uncertain::Certain(Ordering::Less)
        } else if self.lo > other.hi {
            Uncertain::Certain(Ordering::Greater)
        } else if self.is_point() && other.is_point() && self.lo == other.lo {
            Uncertain::Certain(Ordering::Equal)
        } else {
            Uncertain::Indeterminate
        }
    }

    fn sqrt(&self) -> Self {
        let lo = if self.lo <= 0.0 {
            0.0
        } else {
            next_down(self.lo.sqrt())
        };
        let hi = next_up(self.hi.max(0.0).sqrt());
        Self { lo, hi }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
