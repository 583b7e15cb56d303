//! Element traits for vectors and matrices

use std::fmt::Debug;

use num_traits::{Float, Num};

/// Anything that can live inside a [`Vector`](crate::Vector) or [`Matrix`](crate::Matrix).
///
/// Blanket-implemented, so `f32`, `f64` and the integer types all qualify.
pub trait Scalar: Copy + PartialEq + Debug + Num {
    /// `2`, built from `one()` so it works for every numeric type
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Copy + PartialEq + Debug + Num> Scalar for T {}

/// Floating-point elements.
///
/// Needed by anything that takes a square root, divides by a determinant,
/// or calls into trigonometry.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two() {
        assert_eq!(<f32 as Scalar>::two(), 2.0);
        assert_eq!(<i32 as Scalar>::two(), 2);
    }
}
