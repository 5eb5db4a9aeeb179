//! Batched predicate filtering.
//!
//! Enable with the `simd` feature flag:
//! ```toml
//! certum = { version = "0.1", features = ["simd"] }
//! ```

mod orient;

pub use orient::{orient2d_batch, OrientBatchStats};
