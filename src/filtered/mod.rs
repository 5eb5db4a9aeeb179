//! Filtered evaluation of predicates and constructions.
//!
//! Both evaluators try a cheap representation first and fall back to exact
//! arithmetic only when the cheap answer cannot be trusted:
//!
//! - [`FilteredPredicate`]: an interval evaluation that is undecided
//!   triggers the exact one. Callers only ever see a decided answer.
//! - [`ExceptionlessFilteredConstruction`]: an approximate construction is
//!   certified against its defining equations; a failed certificate
//!   triggers the exact construction. Degenerate inputs yield `None`
//!   on either path.

mod construction;
mod predicate;

pub use construction::{
    Certify, Construction, ExceptionlessFilteredConstruction, DEFAULT_CERTIFICATION_EPSILON,
};
pub use predicate::{AssumeCertain, FilteredPredicate, Predicate, Resolution};
