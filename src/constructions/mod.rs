//! Geometric constructions usable inside filtered evaluators.

mod event_time;
mod offset_point;

pub(crate) use event_time::event_time_ratio;
pub use event_time::ConstructEventTime;
pub use offset_point::ConstructOffsetPoint;
