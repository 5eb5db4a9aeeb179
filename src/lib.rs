//! certum - Certified geometric computation
//!
//! Floating-point arithmetic is fast but decides degenerate configurations
//! wrongly; exact arithmetic is right but slow. This library evaluates
//! predicates on intervals first and only falls back to exact rationals
//! when the interval answer is ambiguous, and certifies constructions
//! computed in floating point against a tolerance before trusting them.
//!
//! - [`number`]: the number types (`f32`, `f64`, [`Interval`], [`Exact`])
//!   and the converters between them
//! - [`kernel`]: kernels bundling a number type with point types and
//!   functors, looked up by tag
//! - [`filtered`]: filtered predicates and certified constructions
//! - [`primitives`]: [`PointD`] over any kernel, plus planar helpers
//! - [`planar`]: predicate bundles for offset and sweep algorithms
//! - [`overlap`]: provenance of overlapping curves
//! - [`io`]: text and binary point formats
//!
//! # Example
//!
//! ```
//! use certum::kernel::{Const, FilteredCartesian};
//! use certum::planar::{Filtered, PlanarTraits};
//! use certum::{Orientation, Point2};
//!
//! let traits = Filtered::<FilteredCartesian<Const<2>>>::default();
//! let p = Point2::new(0.1, 0.1);
//! let q = Point2::new(0.2, 0.2);
//! let r = Point2::new(0.3, 0.3);
//! // The interval test is inconclusive; exact arithmetic decides.
//! assert_eq!(traits.orientation(&p, &q, &r), Orientation::Collinear);
//! ```

pub mod constructions;
pub mod error;
pub mod filtered;
pub mod io;
pub mod kernel;
pub mod number;
pub mod overlap;
pub mod planar;
pub mod predicates;
pub mod primitives;
#[cfg(feature = "simd")]
pub mod simd;

pub use error::{CertumError, Result};
pub use kernel::{Cartesian, FilteredCartesian, FilteringKernel, Kernel};
pub use number::{Exact, Interval};
pub use overlap::{NodeId, OverlapHierarchy};
pub use predicates::Orientation;
pub use primitives::{Point2, PointD, Segment2, Vec2};
