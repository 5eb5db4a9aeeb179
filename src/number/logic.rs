//! Certainty of comparison results.
//!
//! Number types with committed comparisons (floats, exact rationals) report
//! plain values. Interval-like types may be unable to decide and report
//! [`Uncertain::Indeterminate`] instead. The [`Logic`] family lets a
//! predicate be written once and produce the right result shape for
//! whichever number type it is instantiated with.

/// A result that may not have been decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uncertain<T> {
    /// The value is known.
    Certain(T),
    /// The approximation was too coarse to decide.
    Indeterminate,
}

impl<T> Uncertain<T> {
    /// Returns `true` if the value is known.
    #[inline]
    pub fn is_certain(&self) -> bool {
        matches!(self, Uncertain::Certain(_))
    }

    /// Converts into an `Option`, discarding the indeterminate state.
    #[inline]
    pub fn certain(self) -> Option<T> {
        match self {
            Uncertain::Certain(value) => Some(value),
            Uncertain::Indeterminate => None,
        }
    }

    /// Maps the known value.
    #[inline]
    pub fn map<S>(self, f: impl FnOnce(T) -> S) -> Uncertain<S> {
        match self {
            Uncertain::Certain(value) => Uncertain::Certain(f(value)),
            Uncertain::Indeterminate => Uncertain::Indeterminate,
        }
    }

    /// Chains a computation that may itself be undecided.
    #[inline]
    pub fn and_then<S>(self, f: impl FnOnce(T) -> Uncertain<S>) -> Uncertain<S> {
        match self {
            Uncertain::Certain(value) => f(value),
            Uncertain::Indeterminate => Uncertain::Indeterminate,
        }
    }
}

impl<T> From<T> for Uncertain<T> {
    #[inline]
    fn from(value: T) -> Self {
        Uncertain::Certain(value)
    }
}

/// Shape of decisions produced by a number type.
///
/// Only ever used at the type level; implementors are uninhabited.
pub trait Logic {
    /// A decision about a value of type `R`.
    type Of<R>;

    /// Wraps a known value.
    fn certain<R>(value: R) -> Self::Of<R>;

    /// Maps a decision.
    fn map<R, S>(value: Self::Of<R>, f: impl FnOnce(R) -> S) -> Self::Of<S>;

    /// Chains a dependent decision.
    fn and_then<R, S>(value: Self::Of<R>, f: impl FnOnce(R) -> Self::Of<S>) -> Self::Of<S>;

    /// Conjunction. A certain `false` anywhere decides the result.
    fn all<I>(values: I) -> Self::Of<bool>
    where
        I: IntoIterator<Item = Self::Of<bool>>;

    /// Views a decision as a possibly undecided value.
    fn loosen<R>(value: Self::Of<R>) -> Uncertain<R>;
}

/// Decisions are always available.
#[derive(Debug)]
pub enum Committed {}

/// Decisions may be [`Uncertain::Indeterminate`].
#[derive(Debug)]
pub enum Tentative {}

impl Logic for Committed {
    type Of<R> = R;

    #[inline]
    fn certain<R>(value: R) -> R {
        value
    }

    #[inline]
    fn map<R, S>(value: R, f: impl FnOnce(R) -> S) -> S {
        f(value)
    }

    #[inline]
    fn and_then<R, S>(value: R, f: impl FnOnce(R) -> S) -> S {
        f(value)
    }

    #[inline]
    fn all<I>(values: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        values.into_iter().all(|v| v)
    }

    #[inline]
    fn loosen<R>(value: R) -> Uncertain<R> {
        Uncertain::Certain(value)
    }
}

impl Logic for Tentative {
    type Of<R> = Uncertain<R>;

    #[inline]
    fn certain<R>(value: R) -> Uncertain<R> {
        Uncertain::Certain(value)
    }

    #[inline]
    fn map<R, S>(value: Uncertain<R>, f: impl FnOnce(R) -> S) -> Uncertain<S> {
        value.map(f)
    }

    #[inline]
    fn and_then<R, S>(value: Uncertain<R>, f: impl FnOnce(R) -> Uncertain<S>) -> Uncertain<S> {
        value.and_then(f)
    }

    fn all<I>(values: I) -> Uncertain<bool>
    where
        I: IntoIterator<Item = Uncertain<bool>>,
    {
        let mut undecided = false;
        for value in values {
            match value {
                Uncertain::Certain(false) => return Uncertain::Certain(false),
                Uncertain::Certain(true) => {}
                Uncertain::Indeterminate => undecided = true,
            }
        }
        if undecided {
            Uncertain::Indeterminate
        } else {
            Uncertain::Certain(true)
        }
    }

    #[inline]
    fn loosen<R>(value: Uncertain<R>) -> Uncertain<R> {
        value
    }
}
