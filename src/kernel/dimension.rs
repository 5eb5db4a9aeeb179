//! Ambient dimension tags.

use crate::error::{CertumError, Result};
use std::fmt;

/// Compile-time description of a kernel's ambient dimension.
pub trait Dimension: Copy + Default + fmt::Debug + 'static {
    /// The fixed dimension, or `None` when chosen per point.
    fn ambient() -> Option<usize>;

    /// Checks a coordinate count against the ambient dimension.
    #[inline]
    fn check(found: usize) -> Result<()> {
        match Self::ambient() {
            Some(expected) if expected != found => {
                Err(CertumError::DimensionMismatch { expected, found })
            }
            _ => Ok(()),
        }
    }
}

/// A dimension fixed at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

/// A dimension chosen at run time by each point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dynamic;

impl<const N: usize> Dimension for Const<N> {
    #[inline]
    fn ambient() -> Option<usize> {
        Some(N)
    }
}

impl Dimension for Dynamic {
    #[inline]
    fn ambient() -> Option<usize> {
        None
    }
}
