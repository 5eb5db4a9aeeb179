//! Number types and the arithmetic contract kernels are built on.
//!
//! Three families are provided:
//! - `f32`/`f64`: fast, inexact, comparisons always commit.
//! - [`Interval`]: enclosures with outward rounding; comparisons may be
//!   [`Uncertain::Indeterminate`].
//! - [`Exact`]: arbitrary precision rationals.

mod convert;
mod exact;
mod interval;
mod logic;

pub(crate) use convert::zero_sized;
pub use convert::{Cast, Convert, FromExact, Identity, NumberConverter, ToExact, ToInterval};
pub use exact::Exact;
pub use interval::Interval;
pub use logic::{Committed, Logic, Tentative, Uncertain};

use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Div, Neg, Sub};

/// Decision of type `R` produced by number type `T`.
pub type Decision<T, R> = <<T as Number>::Logic as Logic>::Of<R>;

/// Arithmetic contract required from every kernel number type.
pub trait Number:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Sub<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Shape of comparison results.
    type Logic: Logic;

    /// `true` when ring and field operations incur no rounding.
    const IS_EXACT: bool;

    /// Converts from a double.
    fn from_f64(value: f64) -> Self;

    /// Nearest double.
    fn to_f64(&self) -> f64;

    /// Converts into an exact rational.
    fn to_exact(&self) -> Exact;

    /// Rounds an exact rational into this type.
    fn from_exact(value: &Exact) -> Self;

    /// Smallest interval enclosing this value.
    fn to_interval(&self) -> Interval;

    /// Three-way comparison.
    fn compare(&self, other: &Self) -> Decision<Self, Ordering>;

    /// Square root of a non-negative value.
    fn sqrt(&self) -> Self;

    /// Sign relative to zero.
    #[inline]
    fn sign(&self) -> Decision<Self, Ordering> {
        self.compare(&Self::zero())
    }

    /// `self * self`.
    #[inline]
    fn square(&self) -> Self {
        self.clone() * self.clone()
    }
}

macro_rules! impl_float_number {
    ($t:ty) => {
        impl Number for $t {
            type Logic = Committed;

            const IS_EXACT: bool = false;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(&self) -> f64 {
                f64::from(*self)
            }

            fn to_exact(&self) -> Exact {
                debug_assert!(self.is_finite(), "non-finite value has no exact form");
                BigRational::from_float(*self).unwrap_or_else(BigRational::zero)
            }

            fn from_exact(value: &Exact) -> Self {
                ToPrimitive::to_f64(value).unwrap_or(f64::NAN) as $t
            }

            #[inline]
            fn to_interval(&self) -> Interval {
                Interval::point(f64::from(*self))
            }

            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                self.partial_cmp(other)
                    .unwrap_or_else(|| self.total_cmp(other))
            }

            #[inline]
            fn sqrt(&self) -> Self {
                <$t>::sqrt(*self)
            }
        }
    };
}

impl_float_number!(f32);
impl_float_number!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_compare_zero_signs() {
        assert_eq!((-0.0f64).compare(&0.0), Ordering::Equal);
        assert_eq!(1.0f64.compare(&2.0), Ordering::Less);
    }

    #[test]
    fn test_float_to_exact_is_lossless() {
        let x = 0.1f64;
        let e = x.to_exact();
        assert_eq!(f64::from_exact(&e), x);
        assert_ne!(e, Exact::new(1.into(), 10.into()));
    }

    #[test]
    fn test_f32_widens_exactly() {
        let x = 0.3f32;
        assert_eq!(Number::to_f64(&x), f64::from(x));
        assert_eq!(f32::from_exact(&x.to_exact()), x);
    }

    #[test]
    fn test_exactness_flags() {
        assert!(!<f64 as Number>::IS_EXACT);
        assert!(!<Interval as Number>::IS_EXACT);
        assert!(<Exact as Number>::IS_EXACT);
    }
}
