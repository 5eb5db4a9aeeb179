//! Converters between number representations.
//!
//! A converter is a zero-sized function object mapping one number type to
//! another. [`Convert`] lifts a converter over points, segments and
//! argument tuples so filtered functors can move whole argument lists
//! between representations.

use super::{Exact, Interval, Number};

/// Maps values of one number type to another.
pub trait NumberConverter: Default + Copy {
    /// Input number type.
    type Source: Number;
    /// Output number type.
    type Target: Number;

    /// Converts a single value.
    fn convert(&self, value: &Self::Source) -> Self::Target;
}

/// A value (or bundle of values) that can be converted with `C`.
pub trait Convert<C: NumberConverter> {
    /// Same shape, target number type.
    type Output;

    /// Converts every number inside `self`.
    fn convert_with(&self, converter: &C) -> Self::Output;
}

macro_rules! zero_sized {
    ($(#[$meta:meta])* $name:ident<$($p:ident),+>) => {
        $(#[$meta])*
        pub struct $name<$($p),+>(::std::marker::PhantomData<fn() -> ($($p,)+)>);

        impl<$($p),+> Default for $name<$($p),+> {
            #[inline]
            fn default() -> Self {
                Self(::std::marker::PhantomData)
            }
        }

        impl<$($p),+> Clone for $name<$($p),+> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($p),+> Copy for $name<$($p),+> {}

        impl<$($p),+> ::std::fmt::Debug for $name<$($p),+> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

pub(crate) use zero_sized;

zero_sized!(
    /// `T -> T`.
    Identity<T>
);
zero_sized!(
    /// `S -> Exact`, lossless for every finite input.
    ToExact<S>
);
zero_sized!(
    /// `Exact -> T`, rounding to nearest.
    FromExact<T>
);
zero_sized!(
    /// `S -> Interval`, the tightest enclosure.
    ToInterval<S>
);
zero_sized!(
    /// `S -> T` through the nearest `f64`.
    Cast<S, T>
);

impl<T: Number> NumberConverter for Identity<T> {
    type Source = T;
    type Target = T;

    #[inline]
    fn convert(&self, value: &T) -> T {
        value.clone()
    }
}

impl<S: Number> NumberConverter for ToExact<S> {
    type Source = S;
    type Target = Exact;

    #[inline]
    fn convert(&self, value: &S) -> Exact {
        value.to_exact()
    }
}

impl<T: Number> NumberConverter for FromExact<T> {
    type Source = Exact;
    type Target = T;

    #[inline]
    fn convert(&self, value: &Exact) -> T {
        T::from_exact(value)
    }
}

impl<S: Number> NumberConverter for ToInterval<S> {
    type Source = S;
    type Target = Interval;

    #[inline]
    fn convert(&self, value: &S) -> Interval {
        value.to_interval()
    }
}

impl<S: Number, T: Number> NumberConverter for Cast<S, T> {
    type Source = S;
    type Target = T;

    #[inline]
    fn convert(&self, value: &S) -> T {
        T::from_f64(value.to_f64())
    }
}

impl<T: Number, C: NumberConverter<Source = T>> Convert<C> for T {
    type Output = C::Target;

    #[inline]
    fn convert_with(&self, converter: &C) -> C::Target {
        converter.convert(self)
    }
}

impl<C: NumberConverter, A: Convert<C>> Convert<C> for (A,) {
    type Output = (A::Output,);

    fn convert_with(&self, converter: &C) -> Self::Output {
        (self.0.convert_with(converter),)
    }
}

impl<C: NumberConverter, A: Convert<C>, B: Convert<C>> Convert<C> for (A, B) {
    type Output = (A::Output, B::Output);

    fn convert_with(&self, converter: &C) -> Self::Output {
        (self.0.convert_with(converter), self.1.convert_with(converter))
    }
}

impl<C: NumberConverter, A: Convert<C>, B: Convert<C>, D: Convert<C>> Convert<C> for (A, B, D) {
    type Output = (A::Output, B::Output, D::Output);

    fn convert_with(&self, converter: &C) -> Self::Output {
        (
            self.0.convert_with(converter),
            self.1.convert_with(converter),
            self.2.convert_with(converter),
        )
    }
}

impl<C: NumberConverter, A: Convert<C>> Convert<C> for Option<A> {
    type Output = Option<A::Output>;

    fn convert_with(&self, converter: &C) -> Self::Output {
        self.as_ref().map(|a| a.convert_with(converter))
    }
}
