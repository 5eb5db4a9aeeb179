//! Filtered predicates: interval attempt first, exact fallback.

use crate::kernel::EqualPoints;
use crate::number::{zero_sized, Convert, NumberConverter, Uncertain};

/// A stateless predicate over an argument bundle.
pub trait Predicate<Args>: Default + Copy {
    /// `Uncertain<R>` for interval instantiations, `R` otherwise.
    type Output;

    fn eval(&self, args: &Args) -> Self::Output;
}

/// Which path produced a filtered answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The cheap evaluation was decisive or certified.
    Approximate,
    /// The exact evaluation was needed.
    Exact,
}

zero_sized!(
    /// Evaluates `AP` on arguments converted with `C2A`; if it cannot
    /// decide, evaluates `EP` on arguments converted with `C2E`.
    ///
    /// `AP` must never return a wrong certain answer. The result type is
    /// `EP`'s, so undecided states never reach the caller.
    FilteredPredicate<AP, EP, C2A, C2E>
);

impl<AP, EP, C2A, C2E> FilteredPredicate<AP, EP, C2A, C2E> {
    /// Runs `approx`, falling back to `exact` when it is undecided.
    #[inline]
    pub fn filter<R>(
        &self,
        approx: impl FnOnce() -> Uncertain<R>,
        exact: impl FnOnce() -> R,
    ) -> (R, Resolution) {
        match approx() {
            Uncertain::Certain(value) => (value, Resolution::Approximate),
            Uncertain::Indeterminate => {
                tracing::trace!(
                    predicate = std::any::type_name::<EP>(),
                    "filter failed, evaluating exactly"
                );
                (exact(), Resolution::Exact)
            }
        }
    }

    /// Evaluates and reports which path answered.
    pub fn eval_with_resolution<Args>(&self, args: &Args) -> (EP::Output, Resolution)
    where
        C2A: NumberConverter,
        C2E: NumberConverter,
        Args: Convert<C2A> + Convert<C2E>,
        AP: Predicate<<Args as Convert<C2A>>::Output, Output = Uncertain<EP::Output>>,
        EP: Predicate<<Args as Convert<C2E>>::Output>,
    {
        self.filter(
            || AP::default().eval(&<Args as Convert<C2A>>::convert_with(args, &C2A::default())),
            || EP::default().eval(&<Args as Convert<C2E>>::convert_with(args, &C2E::default())),
        )
    }
}

impl<Args, AP, EP, C2A, C2E> Predicate<Args> for FilteredPredicate<AP, EP, C2A, C2E>
where
    C2A: NumberConverter,
    C2E: NumberConverter,
    Args: Convert<C2A> + Convert<C2E>,
    AP: Predicate<<Args as Convert<C2A>>::Output, Output = Uncertain<EP::Output>>,
    EP: Predicate<<Args as Convert<C2E>>::Output>,
{
    type Output = EP::Output;

    #[inline]
    fn eval(&self, args: &Args) -> EP::Output {
        self.eval_with_resolution(args).0
    }
}

impl<P, AP, EP, C2A, C2E> EqualPoints<P> for FilteredPredicate<AP, EP, C2A, C2E>
where
    C2A: NumberConverter,
    C2E: NumberConverter,
    P: Convert<C2A> + Convert<C2E>,
    AP: EqualPoints<<P as Convert<C2A>>::Output, Output = Uncertain<bool>>,
    EP: EqualPoints<<P as Convert<C2E>>::Output, Output = bool>,
{
    type Output = bool;

    fn call(&self, p: &P, q: &P) -> bool {
        let (to_approx, to_exact) = (C2A::default(), C2E::default());
        self.filter(
            || {
                AP::default().call(
                    &<P as Convert<C2A>>::convert_with(p, &to_approx),
                    &<P as Convert<C2A>>::convert_with(q, &to_approx),
                )
            },
            || {
                EP::default().call(
                    &<P as Convert<C2E>>::convert_with(p, &to_exact),
                    &<P as Convert<C2E>>::convert_with(q, &to_exact),
                )
            },
        )
        .0
    }
}

zero_sized!(
    /// Presents a committed predicate as one that is always decisive.
    ///
    /// Pairing two exact predicates this way exercises the filtering
    /// machinery without ever taking the fallback.
    AssumeCertain<P>
);

impl<Args, P: Predicate<Args>> Predicate<Args> for AssumeCertain<P> {
    type Output = Uncertain<P::Output>;

    #[inline]
    fn eval(&self, args: &Args) -> Self::Output {
        Uncertain::Certain(P::default().eval(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{CartesianEqual, CartesianPoint};
    use crate::number::{Exact, Interval, ToExact, ToInterval};
    use crate::predicates::{Orient2, Orientation};
    use crate::primitives::Point2;
    use proptest::prelude::*;

    type FilteredOrient =
        FilteredPredicate<Orient2<Interval>, Orient2<Exact>, ToInterval<f64>, ToExact<f64>>;

    #[test]
    fn test_clear_orientation_stays_approximate() {
        let args = (
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        let (o, resolution) = FilteredOrient::default().eval_with_resolution(&args);
        assert_eq!(o, Orientation::CounterClockwise);
        assert_eq!(resolution, Resolution::Approximate);
    }

    #[test]
    fn test_collinear_needs_exact() {
        let args = (
            Point2::new(0.1, 0.1),
            Point2::new(0.2, 0.2),
            Point2::new(0.3, 0.3),
        );
        let (o, resolution) = FilteredOrient::default().eval_with_resolution(&args);
        assert_eq!(o, Orientation::Collinear);
        assert_eq!(resolution, Resolution::Exact);
    }

    #[test]
    fn test_filtered_equal_points() {
        let equal = FilteredPredicate::<
            CartesianEqual<Interval>,
            CartesianEqual<Exact>,
            ToInterval<f64>,
            ToExact<f64>,
        >::default();
        let p = CartesianPoint::from_vec(vec![0.1, 0.2, 0.3]);
        let q = CartesianPoint::from_vec(vec![0.1, 0.2, 0.30000000000000004]);
        assert!(equal.call(&p, &p));
        assert!(!equal.call(&p, &q));
    }

    #[test]
    fn test_assume_certain_wraps_exact_answer() {
        let args = (
            Point2::<Exact>::from_f64(0.0, 0.0),
            Point2::from_f64(1.0, 1.0),
            Point2::from_f64(2.0, 2.0),
        );
        let out = AssumeCertain::<Orient2<Exact>>::default().eval(&args);
        assert_eq!(out, Uncertain::Certain(Orientation::Collinear));
    }

    type CertainOrient = FilteredPredicate<
        AssumeCertain<Orient2<Exact>>,
        Orient2<Exact>,
        ToExact<f64>,
        ToExact<f64>,
    >;

    type Triple = (Point2<f64>, Point2<f64>, Point2<f64>);

    fn orient_direct(args: &Triple) -> Orientation {
        Orient2::<Exact>::default().eval(&args.convert_with(&ToExact::<f64>::default()))
    }

    /// Points on `y = x`, the last one nudged upwards by `ulps`.
    fn nearly_collinear(a: f64, b: f64, c: f64, ulps: u64) -> Triple {
        (
            Point2::new(a, a),
            Point2::new(b, b),
            Point2::new(c, f64::from_bits(c.to_bits() + ulps)),
        )
    }

    proptest! {
        #[test]
        fn prop_filtered_orient_matches_direct(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3,
            cx in -1e3f64..1e3, cy in -1e3f64..1e3,
        ) {
            let args = (Point2::new(ax, ay), Point2::new(bx, by), Point2::new(cx, cy));
            let expected = orient_direct(&args);
            let (o, resolution) = CertainOrient::default().eval_with_resolution(&args);
            prop_assert_eq!(o, expected);
            prop_assert_eq!(resolution, Resolution::Approximate);
            prop_assert_eq!(FilteredOrient::default().eval(&args), expected);
        }

        #[test]
        fn prop_filtered_orient_matches_direct_near_collinear(
            a in 1.0f64..1e3,
            b in 1.0f64..1e3,
            c in 1.0f64..1e3,
            ulps in 0u64..4,
        ) {
            let args = nearly_collinear(a, b, c, ulps);
            let expected = orient_direct(&args);
            prop_assert_eq!(CertainOrient::default().eval(&args), expected);
            prop_assert_eq!(FilteredOrient::default().eval(&args), expected);
        }
    }
}
