//! Scalar helpers shared by the rest of the crate

use std::ops::{Add, Mul};

use crate::scalar::FloatScalar;

/// Degrees to radians, `θ·π/180`
#[inline]
pub fn deg_to_rad<T: FloatScalar>(degrees: T) -> T {
    degrees.to_radians()
}

/// Radians to degrees, `θ·180/π`
#[inline]
pub fn rad_to_deg<T: FloatScalar>(radians: T) -> T {
    radians.to_degrees()
}

/// Linear interpolation for anything that can be scaled and summed.
///
/// Works on plain scalars as well as vectors and matrices.
#[inline]
pub fn lerp<V, T>(a: V, b: V, t: T) -> V
where
    V: Add<Output = V> + Mul<T, Output = V>,
    T: FloatScalar,
{
    a * (T::one() - t) + b * t
}

/// Restrict `value` to `[min, max]`
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// `|a - b| <= epsilon`
#[inline]
pub fn approx_eq<T: FloatScalar>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() <= epsilon
}
