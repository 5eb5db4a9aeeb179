//! Exceptionless filtered constructions.
//!
//! The approximate construction runs first. A degenerate answer (`None`)
//! is returned as is. Otherwise the candidate is certified against the
//! construction's defining equations, and only if that fails is the
//! construction repeated in exact arithmetic.

use super::Resolution;
use crate::number::{Convert, Number, NumberConverter};
use std::fmt;
use std::marker::PhantomData;

/// Default tolerance on squared distances used by certification.
pub const DEFAULT_CERTIFICATION_EPSILON: f64 = 1e-5;

/// A stateless construction that may have no result.
pub trait Construction<Args>: Default + Copy {
    /// The constructed value.
    type Output;

    /// Returns `None` on geometric degeneracy.
    fn construct(&self, args: &Args) -> Option<Self::Output>;
}

/// A construction that can check its own output.
pub trait Certify<Args>: Construction<Args> {
    /// Returns `true` if `output` satisfies the defining equations of the
    /// construction to within `epsilon`.
    fn is_accurate(&self, args: &Args, output: &Self::Output, epsilon: f64) -> bool;
}

/// Filtered evaluator for constructions.
///
/// - `AC`/`EC`: approximate and exact constructions.
/// - `C2A`/`C2E`: convert the caller's arguments for each of them.
/// - `A2R`/`E2R`: convert each result to the caller's number type.
pub struct ExceptionlessFilteredConstruction<AC, EC, C2A, C2E, A2R, E2R> {
    epsilon: f64,
    _marker: PhantomData<fn() -> (AC, EC, C2A, C2E, A2R, E2R)>,
}

impl<AC, EC, C2A, C2E, A2R, E2R> ExceptionlessFilteredConstruction<AC, EC, C2A, C2E, A2R, E2R> {
    /// Creates an evaluator with the default tolerance.
    #[inline]
    pub fn new() -> Self {
        Self::with_epsilon(DEFAULT_CERTIFICATION_EPSILON)
    }

    /// Creates an evaluator with a custom certification tolerance.
    #[inline]
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon,
            _marker: PhantomData,
        }
    }

    /// Certification tolerance.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Constructs and reports which path produced the result.
    pub fn construct_with_resolution<Args>(
        &self,
        args: &Args,
    ) -> (
        Option<<AC::Output as Convert<A2R>>::Output>,
        Resolution,
    )
    where
        C2A: NumberConverter,
        C2E: NumberConverter,
        A2R: NumberConverter,
        E2R: NumberConverter,
        Args: Convert<C2A> + Convert<C2E>,
        AC: Certify<<Args as Convert<C2A>>::Output>,
        EC: Construction<<Args as Convert<C2E>>::Output>,
        AC::Output: Convert<A2R>,
        EC::Output: Convert<E2R, Output = <AC::Output as Convert<A2R>>::Output>,
    {
        let approx_args = <Args as Convert<C2A>>::convert_with(args, &C2A::default());
        let approx = AC::default();
        let Some(candidate) = approx.construct(&approx_args) else {
            return (None, Resolution::Approximate);
        };

        let certified = <C2A::Target as Number>::IS_EXACT
            || approx.is_accurate(&approx_args, &candidate, self.epsilon);
        if certified {
            let result = <AC::Output as Convert<A2R>>::convert_with(&candidate, &A2R::default());
            return (Some(result), Resolution::Approximate);
        }

        tracing::debug!(
            construction = std::any::type_name::<EC>(),
            epsilon = self.epsilon,
            "certification failed, constructing exactly"
        );
        let exact_args = <Args as Convert<C2E>>::convert_with(args, &C2E::default());
        let result = EC::default()
            .construct(&exact_args)
            .map(|out| <EC::Output as Convert<E2R>>::convert_with(&out, &E2R::default()));
        (result, Resolution::Exact)
    }
}

impl<AC, EC, C2A, C2E, A2R, E2R> Default
    for ExceptionlessFilteredConstruction<AC, EC, C2A, C2E, A2R, E2R>
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<AC, EC, C2A, C2E, A2R, E2R> Clone
    for ExceptionlessFilteredConstruction<AC, EC, C2A, C2E, A2R, E2R>
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<AC, EC, C2A, C2E, A2R, E2R> Copy
    for ExceptionlessFilteredConstruction<AC, EC, C2A, C2E, A2R, E2R>
{
}

impl<AC, EC, C2A, C2E, A2R, E2R> fmt::Debug
    for ExceptionlessFilteredConstruction<AC, EC, C2A, C2E, A2R, E2R>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionlessFilteredConstruction")
            .field("epsilon", &self.epsilon)
            .finish()
    }
}

impl<Args, AC, EC, C2A, C2E, A2R, E2R> Construction<Args>
    for ExceptionlessFilteredConstruction<AC, EC, C2A, C2E, A2R, E2R>
where
    C2A: NumberConverter,
    C2E: NumberConverter,
    A2R: NumberConverter,
    E2R: NumberConverter,
    Args: Convert<C2A> + Convert<C2E>,
    AC: Certify<<Args as Convert<C2A>>::Output>,
    EC: Construction<<Args as Convert<C2E>>::Output>,
    AC::Output: Convert<A2R>,
    EC::Output: Convert<E2R, Output = <AC::Output as Convert<A2R>>::Output>,
{
    type Output = <AC::Output as Convert<A2R>>::Output;

    #[inline]
    fn construct(&self, args: &Args) -> Option<Self::Output> {
        self.construct_with_resolution(args).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructions::ConstructOffsetPoint;
    use crate::number::{Cast, Exact, FromExact, Identity, ToExact};
    use crate::primitives::{Point2, Segment2};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    /// Approximates in single precision so certification can fail.
    type SinglePrecisionOffset = ExceptionlessFilteredConstruction<
        ConstructOffsetPoint<f32>,
        ConstructOffsetPoint<Exact>,
        Cast<f64, f32>,
        ToExact<f64>,
        Cast<f32, f64>,
        FromExact<f64>,
    >;

    type DoubleOffset = ExceptionlessFilteredConstruction<
        ConstructOffsetPoint<f64>,
        ConstructOffsetPoint<Exact>,
        Identity<f64>,
        ToExact<f64>,
        Identity<f64>,
        FromExact<f64>,
    >;

    type ExactOnlyOffset = ExceptionlessFilteredConstruction<
        ConstructOffsetPoint<Exact>,
        ConstructOffsetPoint<Exact>,
        ToExact<f64>,
        ToExact<f64>,
        FromExact<f64>,
        FromExact<f64>,
    >;

    fn corner(base: f64, t: f64) -> (f64, Segment2<f64>, Segment2<f64>) {
        let e0 = Segment2::from_coords(base, base, base + 1.0, base);
        let e1 = Segment2::from_coords(base, base + 1.0, base, base);
        (t, e0, e1)
    }

    fn residual(args: &(f64, Segment2<f64>, Segment2<f64>), p: &Point2<f64>) -> f64 {
        let (t, e0, e1) = args;
        let t2 = t * t;
        (e0.squared_distance_to_line(p) - t2)
            .abs()
            .max((e1.squared_distance_to_line(p) - t2).abs())
    }

    #[test]
    fn test_well_conditioned_stays_approximate() {
        let args = corner(0.0, 0.25);
        let (p, resolution) = DoubleOffset::new().construct_with_resolution(&args);
        let p = p.expect("corner has an offset point");
        assert_eq!(resolution, Resolution::Approximate);
        assert_relative_eq!(p.x, 0.25, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_failed_certification_falls_back_to_exact() {
        let args = corner(10_000.0, 0.3);
        let (p, resolution) = SinglePrecisionOffset::new().construct_with_resolution(&args);
        let p = p.expect("corner has an offset point");
        assert_eq!(resolution, Resolution::Exact);
        assert!(residual(&args, &p) < DEFAULT_CERTIFICATION_EPSILON);
        assert_relative_eq!(p.x, 10_000.3, epsilon = 1e-9);
        assert_relative_eq!(p.y, 10_000.3, epsilon = 1e-9);
    }

    #[test]
    fn test_loose_tolerance_accepts_single_precision() {
        let args = corner(10_000.0, 0.3);
        let (p, resolution) =
            SinglePrecisionOffset::with_epsilon(1e-2).construct_with_resolution(&args);
        assert!(p.is_some());
        assert_eq!(resolution, Resolution::Approximate);
    }

    /// Largest single-precision residual the certification step sees.
    fn single_precision_residual(args: &(f64, Segment2<f64>, Segment2<f64>)) -> f64 {
        let cast = Cast::<f64, f32>::default();
        let (t, e0, e1) = args.convert_with(&cast);
        let p = ConstructOffsetPoint::<f32>::default()
            .construct(&(t, e0.clone(), e1.clone()))
            .expect("corner has an offset point");
        [e0, e1]
            .iter()
            .map(|s| f64::from(s.squared_distance_to_line(&p) - t.square()).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_tolerance_around_residual() {
        let args = corner(10_000.0, 0.3);
        let r = single_precision_residual(&args);
        assert!(r > DEFAULT_CERTIFICATION_EPSILON);

        let (_, resolution) =
            SinglePrecisionOffset::with_epsilon(r * 1.001).construct_with_resolution(&args);
        assert_eq!(resolution, Resolution::Approximate);

        let (p, resolution) =
            SinglePrecisionOffset::with_epsilon(r * 0.999).construct_with_resolution(&args);
        assert_eq!(resolution, Resolution::Exact);
        assert!(residual(&args, &p.expect("corner has an offset point")) < r);
    }

    #[test]
    fn test_degenerate_is_not_a_fallback() {
        // Parallel generators never meet.
        let e0 = Segment2::<f64>::from_coords(0.0, 0.0, 1.0, 0.0);
        let e1 = Segment2::<f64>::from_coords(0.0, 1.0, 1.0, 1.0);
        let (p, resolution) =
            SinglePrecisionOffset::new().construct_with_resolution(&(0.5, e0, e1));
        assert_eq!(p, None);
        assert_eq!(resolution, Resolution::Approximate);
    }

    #[test]
    fn test_exact_approximation_skips_certification() {
        let args = corner(3.0, 0.5);
        let (p, resolution) = ExactOnlyOffset::new().construct_with_resolution(&args);
        assert_eq!(resolution, Resolution::Approximate);
        assert_eq!(p, Some(Point2::new(3.5, 3.5)));
    }

    #[test]
    fn test_epsilon_accessors() {
        assert_eq!(DoubleOffset::default().epsilon(), DEFAULT_CERTIFICATION_EPSILON);
        assert_eq!(DoubleOffset::with_epsilon(0.5).epsilon(), 0.5);
    }

    fn offset_direct(args: &(f64, Segment2<f64>, Segment2<f64>)) -> Option<Point2<f64>> {
        ConstructOffsetPoint::<Exact>::default()
            .construct(&args.convert_with(&ToExact::<f64>::default()))
            .map(|p| p.convert_with(&FromExact::<f64>::default()))
    }

    proptest! {
        #[test]
        fn prop_exact_only_matches_direct(
            t in 0.01f64..10.0,
            (x0, y0, x1, y1) in (-1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3),
            (x2, y2, x3, y3) in (-1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3),
        ) {
            let args = (
                t,
                Segment2::<f64>::from_coords(x0, y0, x1, y1),
                Segment2::from_coords(x2, y2, x3, y3),
            );
            let (p, resolution) = ExactOnlyOffset::new().construct_with_resolution(&args);
            prop_assert_eq!(p, offset_direct(&args));
            prop_assert_eq!(resolution, Resolution::Approximate);
        }

        #[test]
        fn prop_exact_only_matches_direct_near_parallel(
            t in 0.01f64..1.0,
            exponent in 10i32..50,
        ) {
            let rise = 2f64.powi(-exponent);
            let args = (
                t,
                Segment2::<f64>::from_coords(0.0, 0.0, 1.0, 0.0),
                Segment2::from_coords(1.0, 1.0 + rise, 0.0, 1.0),
            );
            let direct = offset_direct(&args);
            prop_assert!(direct.is_some());
            prop_assert_eq!(ExactOnlyOffset::new().construct(&args), direct);
        }
    }
}
