//! Four-lane orientation with a static error bound.

use wide::f64x4;

use crate::filtered::Predicate;
use crate::number::Exact;
use crate::predicates::{Orient2, Orientation};
use crate::primitives::Point2;

/// Relative bound on the rounding error of the 2x2 orientation
/// determinant, `(3 + 16u) * u` with `u = 2^-53`.
const ORIENT_ERROR_BOUND: f64 = (3.0 + 16.0 * f64::EPSILON / 2.0) * (f64::EPSILON / 2.0);

/// How a batch was decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrientBatchStats {
    /// Lanes certified by the floating-point filter.
    pub filtered: usize,
    /// Lanes re-evaluated in exact arithmetic.
    pub exact: usize,
}

type Triple = (Point2<f64>, Point2<f64>, Point2<f64>);

/// Orientation of every `(a, b, c)` triple, four at a time.
///
/// Each lane whose determinant lies within the forward error bound is
/// recomputed exactly, so the result always matches exact evaluation.
pub fn orient2d_batch(triples: &[Triple]) -> (Vec<Orientation>, OrientBatchStats) {
    let mut out = Vec::with_capacity(triples.len());
    let mut stats = OrientBatchStats::default();

    let mut chunks = triples.chunks_exact(4);
    for chunk in &mut chunks {
        let lanes = [&chunk[0], &chunk[1], &chunk[2], &chunk[3]];
        orient_lanes(lanes, 4, &mut out, &mut stats);
    }
    let rest = chunks.remainder();
    if let Some(last) = rest.last() {
        // Pad with the last triple; padded lanes are not reported.
        let lane = |i: usize| rest.get(i).unwrap_or(last);
        orient_lanes([lane(0), lane(1), lane(2), lane(3)], rest.len(), &mut out, &mut stats);
    }

    if stats.exact > 0 {
        tracing::trace!(
            exact = stats.exact,
            total = triples.len(),
            "batched orientation fell back to exact arithmetic"
        );
    }
    (out, stats)
}

fn orient_lanes(
    lanes: [&Triple; 4],
    live: usize,
    out: &mut Vec<Orientation>,
    stats: &mut OrientBatchStats,
) {
    let gather = |f: fn(&Triple) -> f64| {
        f64x4::new([f(lanes[0]), f(lanes[1]), f(lanes[2]), f(lanes[3])])
    };
    let ax = gather(|t| t.0.x);
    let ay = gather(|t| t.0.y);
    let bx = gather(|t| t.1.x);
    let by = gather(|t| t.1.y);
    let cx = gather(|t| t.2.x);
    let cy = gather(|t| t.2.y);

    let left = (ax - cx) * (by - cy);
    let right = (ay - cy) * (bx - cx);
    let det = (left - right).to_array();
    let bound = ((left.abs() + right.abs()) * f64x4::splat(ORIENT_ERROR_BOUND)).to_array();

    for (i, triple) in lanes.iter().take(live).enumerate() {
        if det[i].abs() > bound[i] {
            stats.filtered += 1;
            out.push(Orientation::from(det[i].total_cmp(&0.0)));
        } else {
            stats.exact += 1;
            out.push(orient_exact(triple));
        }
    }
}

fn orient_exact((a, b, c): &Triple) -> Orientation {
    let lift = |p: &Point2<f64>| Point2::<Exact>::from_f64(p.x, p.y);
    Orient2::<Exact>::default().eval(&(lift(a), lift(b), lift(c)))
}
