//! Arbitrary precision rationals as the exact number type.

use super::{Committed, Interval, Number};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

/// Exact field element used on fallback paths.
pub type Exact = BigRational;

/// Fractional bits kept by [`Number::sqrt`] when the root is irrational.
const SQRT_FRACTION_BITS: usize = 128;

impl Number for BigRational {
    type Logic = Committed;

    const IS_EXACT: bool = true;

    fn from_f64(value: f64) -> Self {
        debug_assert!(value.is_finite(), "non-finite value has no exact form");
        BigRational::from_float(value).unwrap_or_else(BigRational::zero)
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    #[inline]
    fn to_exact(&self) -> Exact {
        self.clone()
    }

    #[inline]
    fn from_exact(value: &Exact) -> Self {
        value.clone()
    }

    #[inline]
    fn to_interval(&self) -> Interval {
        Interval::enclosing(self)
    }

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Exact on perfect squares. Otherwise the root is truncated to
    /// 128 fractional bits, the only rounding this type ever performs.
    fn sqrt(&self) -> Self {
        debug_assert!(!self.is_negative(), "square root of a negative value");
        if !self.is_positive() {
            return BigRational::zero();
        }
        // sqrt(n/d) = sqrt(n*d)/d with d > 0
        let denom = self.denom().clone();
        let radicand = self.numer() * &denom;
        let root = radicand.sqrt();
        if &root * &root == radicand {
            return BigRational::new(root, denom);
        }
        let scaled: BigInt = radicand << (2 * SQRT_FRACTION_BITS);
        BigRational::new(scaled.sqrt(), denom << SQRT_FRACTION_BITS)
    }
}
