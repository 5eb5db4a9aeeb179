//! Overlap hierarchies.
//!
//! When a sweep finds two curves coinciding over some stretch, the
//! overlapping part becomes a new node whose two origins are the
//! contributing curves. Origins may themselves be merged curves, so each
//! node roots a binary provenance tree whose leaves are input curves.
//!
//! # Example
//!
//! ```
//! use certum::overlap::OverlapHierarchy;
//!
//! let mut h = OverlapHierarchy::new();
//! let a = h.add_leaf("a");
//! let b = h.add_leaf("b");
//! let ab = h.merge("a+b", a, b).unwrap();
//!
//! let root = h.view(ab).unwrap();
//! assert_eq!(root.all_leaves().collect::<Vec<_>>(), vec![a, b]);
//! assert_eq!(root.overlap_depth(), 2);
//! ```

mod coincide;
mod hierarchy;

pub use coincide::{overlapping_part, record_overlap};
pub use hierarchy::{NodeId, NodeRef, OverlapHierarchy, OverlapNode};
