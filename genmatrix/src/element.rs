//! Element capabilities and the type-promotion rules of matrix arithmetic
//!
//! The element type of a matrix produced by a binary operation is whatever the element types'
//! own operator says it is: adding a `Matrix<A>` and a `Matrix<B>` gives a
//! `Matrix<AddOutput<A, B>>`, and so on. Mixed element types therefore work exactly where the
//! elements themselves can be mixed.

use num_traits::{Float, One, Zero};
use std::ops::{Add, Mul, Sub};

/// Element type of `A + B`
pub type AddOutput<A, B> = <A as Add<B>>::Output;

/// Element type of `A - B`
pub type SubOutput<A, B> = <A as Sub<B>>::Output;

/// Element type of `A * B`
pub type MulOutput<A, B> = <A as Mul<B>>::Output;

/// Element type of a sum of products `A * B + A * B`, i.e. of a matrix product
pub type DotOutput<A, B> = AddOutput<MulOutput<A, B>, MulOutput<A, B>>;

/// Element type of a matrix quotient `a / b`, computed as `a * b.inverse()` after both sides are
/// coerced to their real types
pub type DivOutput<A, B> = DotOutput<<A as Element>::Real, <B as Element>::Real>;

/// A scalar that can take part in the elimination-based routines (determinant, rank, inverse)
///
/// The Gauss engine works on a wide `f64` copy of the matrix regardless of the element type, so
/// every element must convert to and from `f64`. Inverses and quotients are computed over
/// [`Element::Real`], which is `f32` for `f32` and `f64` for everything else.
pub trait Element: Clone + PartialEq + Zero + One {
    /// The floating type this element is coerced to for division
    type Real: Element<Real = Self::Real> + Float;

    /// Converts to the wide working type of the Gauss engine
    fn to_wide(&self) -> f64;

    /// Converts back from the wide working type
    ///
    /// Integer types round to the nearest value and saturate at their bounds, so a determinant
    /// that doesn't fit the element type comes back as `MIN` or `MAX`.
    fn from_wide(value: f64) -> Self;

    /// The exact integer value of this element, if it has one
    ///
    /// When every element of a matrix has one, rank and determinant are computed by exact integer
    /// elimination instead of the wide floating engine.
    fn to_exact(&self) -> Option<i128> {
        None
    }

    /// Converts to [`Element::Real`]
    fn to_real(&self) -> Self::Real;
}

macro_rules! impl_element {
    (@int $($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                type Real = f64;

                #[inline]
                fn to_wide(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn from_wide(value: f64) -> Self {
                    value.round() as $t
                }

                #[inline]
                fn to_real(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn to_exact(&self) -> Option<i128> {
                    i128::try_from(*self).ok()
                }
            }
        )*
    };
    (@float $($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                type Real = $t;

                #[inline]
                fn to_wide(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn from_wide(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn to_real(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_element!(@int i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element!(@float f32, f64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integers_round_from_wide() {
        assert_eq!(i32::from_wide(324.999_999_9), 325);
        assert_eq!(i32::from_wide(-2.000_000_1), -2);
        assert_eq!(u8::from_wide(300.0), u8::MAX);
        assert_eq!(i8::from_wide(-1e6), i8::MIN);
    }

    #[test]
    fn exact_values() {
        assert_eq!((-7i16).to_exact(), Some(-7));
        assert_eq!(u128::MAX.to_exact(), None);
        assert_eq!(usize::MAX.to_exact(), Some(usize::MAX as i128));
        assert_eq!(2.0f64.to_exact(), None);
    }

    #[test]
    fn floats_keep_fraction() {
        assert_eq!(f64::from_wide(0.25), 0.25);
        assert_eq!(f32::from_wide(1.5), 1.5f32);
        assert_eq!(7i64.to_real(), 7.0f64);
        assert_eq!(2.5f32.to_real(), 2.5f32);
    }

    #[test]
    fn promotion_aliases() {
        let sum: AddOutput<i64, i64> = 3i64 + 4;
        let prod: DotOutput<f32, f32> = 2.0f32 * 3.0 + 1.0 * 1.0;
        let quot: DivOutput<i32, i16> = 1.0f64;
        assert_eq!(sum, 7);
        assert_eq!(prod, 7.0);
        assert_eq!(quot, 1.0);
    }
}
