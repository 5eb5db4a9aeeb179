//! Three contour edges whose offset lines meet at a skeleton event.

use super::Segment2;
use crate::number::{Convert, NumberConverter};

/// Which of the three edges of a [`Triedge`] lie on a common line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriedgeCollinearity {
    /// No two edges are collinear.
    None,
    /// `e0` and `e1` are collinear.
    Collinear01,
    /// `e1` and `e2` are collinear.
    Collinear12,
    /// `e0` and `e2` are collinear.
    Collinear02,
    /// All three edges are on one line.
    All,
}

/// Three edges, in contour order.
#[derive(Debug, Clone, PartialEq)]
pub struct Triedge<T> {
    pub e0: Segment2<T>,
    pub e1: Segment2<T>,
    pub e2: Segment2<T>,
}

impl<T> Triedge<T> {
    #[inline]
    pub fn new(e0: Segment2<T>, e1: Segment2<T>, e2: Segment2<T>) -> Self {
        Self { e0, e1, e2 }
    }

    /// Reorders the edges so that a collinear pair, if any, comes first.
    ///
    /// The pair keeps its contour order: for `Collinear02` the edges become
    /// `(e2, e0, e1)`, for `Collinear12` they become `(e1, e2, e0)`.
    pub fn sorted(self, collinearity: TriedgeCollinearity) -> SortedTriedge<T> {
        let Triedge { e0, e1, e2 } = self;
        let (edges, collinearity) = match collinearity {
            TriedgeCollinearity::Collinear12 => {
                (Triedge::new(e1, e2, e0), TriedgeCollinearity::Collinear01)
            }
            TriedgeCollinearity::Collinear02 => {
                (Triedge::new(e2, e0, e1), TriedgeCollinearity::Collinear01)
            }
            other => (Triedge::new(e0, e1, e2), other),
        };
        SortedTriedge {
            edges,
            collinearity,
        }
    }
}

/// A triedge whose collinear pair, if any, is `(e0, e1)`.
///
/// Built by [`Triedge::sorted`]; the collinearity is one of `None`,
/// `Collinear01` or `All`.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedTriedge<T> {
    edges: Triedge<T>,
    collinearity: TriedgeCollinearity,
}

impl<T> SortedTriedge<T> {
    #[inline]
    pub fn edges(&self) -> &Triedge<T> {
        &self.edges
    }

    #[inline]
    pub fn collinearity(&self) -> TriedgeCollinearity {
        self.collinearity
    }
}

impl<C: NumberConverter, T: Convert<C>> Convert<C> for Triedge<T> {
    type Output = Triedge<T::Output>;

    fn convert_with(&self, converter: &C) -> Self::Output {
        Triedge {
            e0: self.e0.convert_with(converter),
            e1: self.e1.convert_with(converter),
            e2: self.e2.convert_with(converter),
        }
    }
}

impl<C: NumberConverter, T: Convert<C>> Convert<C> for SortedTriedge<T> {
    type Output = SortedTriedge<T::Output>;

    fn convert_with(&self, converter: &C) -> Self::Output {
        SortedTriedge {
            edges: self.edges.convert_with(converter),
            collinearity: self.collinearity,
        }
    }
}
