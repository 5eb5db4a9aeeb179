//! Geometric primitives over kernel number types.
//!
//! [`PointD`] delegates everything to a kernel. The planar types
//! ([`Point2`], [`Vec2`], [`Segment2`], [`Triedge`]) are plain generic
//! structs used as arguments of predicates and constructions.

mod point2;
mod point_d;
mod segment2;
mod triedge;
mod vec2;

pub use point2::Point2;
pub use point_d::{Coordinates, Origin, PointD};
pub use segment2::Segment2;
pub use triedge::{SortedTriedge, Triedge, TriedgeCollinearity};
pub use vec2::Vec2;
