//! Point serialization.
//!
//! Provides the text and binary wire formats for [`PointD`](crate::PointD).

mod wire;

pub use wire::{read_binary, read_text, write_binary, write_text, WireNumber};
