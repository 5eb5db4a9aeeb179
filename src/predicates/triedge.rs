//! Predicates over triedges.

use super::{Orient2, Orientation};
use crate::constructions::event_time_ratio;
use crate::filtered::Predicate;
use crate::number::{zero_sized, Decision, Logic, Number};
use crate::primitives::{Point2, Segment2, SortedTriedge, Triedge, TriedgeCollinearity};
use std::cmp::Ordering;

zero_sized!(
    /// Which edges of a triedge lie on a common line.
    ClassifyTriedge<T>
);
zero_sized!(
    /// Orders an offset distance `t` against the event time of a sorted
    /// triedge.
    ///
    /// `None` if the offset lines of the triedge never meet.
    CompareOffsetAgainstEventTime<T>
);

/// `true` if both endpoints of `b` are on the supporting line of `a`.
fn edges_collinear<T: Number>(a: &Segment2<T>, b: &Segment2<T>) -> Decision<T, bool> {
    let orient = Orient2::<T>::default();
    let on_line = |p: &Point2<T>| {
        <T::Logic as Logic>::map(
            orient.eval(&(a.start.clone(), a.end.clone(), p.clone())),
            |o: Orientation| o == Orientation::Collinear,
        )
    };
    <T::Logic as Logic>::all([on_line(&b.start), on_line(&b.end)])
}

fn classify(c01: bool, c12: bool, c02: bool) -> TriedgeCollinearity {
    match (c01, c12, c02) {
        (true, true, _) | (true, _, true) | (_, true, true) => TriedgeCollinearity::All,
        (true, _, _) => TriedgeCollinearity::Collinear01,
        (_, true, _) => TriedgeCollinearity::Collinear12,
        (_, _, true) => TriedgeCollinearity::Collinear02,
        _ => TriedgeCollinearity::None,
    }
}

impl<T: Number> Predicate<Triedge<T>> for ClassifyTriedge<T> {
    type Output = Decision<T, TriedgeCollinearity>;

    fn eval(&self, Triedge { e0, e1, e2 }: &Triedge<T>) -> Self::Output {
        <T::Logic as Logic>::and_then(edges_collinear(e0, e1), |c01: bool| {
            <T::Logic as Logic>::and_then(edges_collinear(e1, e2), |c12: bool| {
                <T::Logic as Logic>::map(edges_collinear(e0, e2), |c02: bool| {
                    classify(c01, c12, c02)
                })
            })
        })
    }
}

impl<T: Number> Predicate<(T, SortedTriedge<T>)> for CompareOffsetAgainstEventTime<T> {
    type Output = Decision<T, Option<Ordering>>;

    /// Compares `t * d` with `n` for the event time `n / d`, flipping the
    /// order when `d` is negative.
    fn eval(&self, (t, triedge): &(T, SortedTriedge<T>)) -> Self::Output {
        let Some((numerator, denominator)) = event_time_ratio(triedge) else {
            return <T::Logic as Logic>::certain(None);
        };
        let scaled = t.clone() * denominator.clone();
        let decided = |order: Decision<T, Ordering>| {
            <T::Logic as Logic>::map(order, |o: Ordering| Some(o))
        };
        <T::Logic as Logic>::and_then(denominator.sign(), |sign: Ordering| match sign {
            Ordering::Equal => <T::Logic as Logic>::certain(None),
            Ordering::Greater => decided(scaled.compare(&numerator)),
            Ordering::Less => decided(numerator.compare(&scaled)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{Exact, Interval, Uncertain};

    fn triedge<T: Number>(edges: [(f64, f64, f64, f64); 3]) -> Triedge<T> {
        let [a, b, c] = edges.map(|(x1, y1, x2, y2)| Segment2::from_coords(x1, y1, x2, y2));
        Triedge::new(a, b, c)
    }

    const SQUARE: [(f64, f64, f64, f64); 3] = [
        (0.0, 0.0, 2.0, 0.0),
        (2.0, 0.0, 2.0, 2.0),
        (2.0, 2.0, 0.0, 2.0),
    ];

    #[test]
    fn test_classify() {
        let classify = ClassifyTriedge::<f64>::default();
        assert_eq!(classify.eval(&triedge(SQUARE)), TriedgeCollinearity::None);

        let pair = [(0.0, 0.0, 1.0, 0.0), (1.0, 0.0, 1.0, 1.0), (3.0, 0.0, 5.0, 0.0)];
        assert_eq!(classify.eval(&triedge(pair)), TriedgeCollinearity::Collinear02);

        let line = [(0.0, 0.0, 1.0, 1.0), (1.0, 1.0, 2.0, 2.0), (2.0, 2.0, 3.0, 3.0)];
        assert_eq!(classify.eval(&triedge(line)), TriedgeCollinearity::All);
    }

    #[test]
    fn test_classify_interval_near_collinear_is_undecided() {
        let edges = [(0.1, 0.1, 0.2, 0.2), (0.2, 0.2, 0.3, 0.3), (0.3, 0.3, 0.3, 1.0)];
        assert_eq!(
            ClassifyTriedge::<Interval>::default().eval(&triedge(edges)),
            Uncertain::Indeterminate
        );
        assert_eq!(
            ClassifyTriedge::<Exact>::default().eval(&triedge(edges)),
            TriedgeCollinearity::Collinear01
        );
    }

    #[test]
    fn test_compare_offset_against_square_event() {
        let compare = CompareOffsetAgainstEventTime::<Exact>::default();
        let sorted = triedge(SQUARE).sorted(TriedgeCollinearity::None);
        let at = |t: f64| compare.eval(&(Exact::from_f64(t), sorted.clone()));
        assert_eq!(at(0.5), Some(Ordering::Less));
        assert_eq!(at(1.0), Some(Ordering::Equal));
        assert_eq!(at(1.5), Some(Ordering::Greater));
    }

    #[test]
    fn test_compare_interval_at_event_time_is_undecided() {
        let compare = CompareOffsetAgainstEventTime::<Interval>::default();
        let sorted = triedge(SQUARE).sorted(TriedgeCollinearity::None);
        assert_eq!(
            compare.eval(&(Interval::point(1.0), sorted.clone())),
            Uncertain::Indeterminate
        );
        assert_eq!(
            compare.eval(&(Interval::point(0.5), sorted)),
            Uncertain::Certain(Some(Ordering::Less))
        );
    }

    #[test]
    fn test_compare_without_event() {
        let compare = CompareOffsetAgainstEventTime::<f64>::default();
        let stairs = [(0.0, 0.0, 1.0, 0.0), (1.0, 0.0, 1.0, 1.0), (1.0, 1.0, 2.0, 1.0)];
        let sorted = triedge(stairs).sorted(TriedgeCollinearity::None);
        assert_eq!(compare.eval(&(0.5, sorted)), None);

        let line = [(0.0, 0.0, 1.0, 0.0), (1.0, 0.0, 2.0, 0.0), (2.0, 0.0, 3.0, 0.0)];
        let sorted = triedge(line).sorted(TriedgeCollinearity::All);
        assert_eq!(compare.eval(&(0.5, sorted)), None);
    }
}
