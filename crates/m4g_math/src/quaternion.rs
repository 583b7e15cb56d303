//! Rotation quaternions
//!
//! Stored as a vector part `v = (x, y, z)` and a scalar part `w`. Rotations
//! follow the same right-handed, column-vector convention as
//! [`transform`](crate::transform), so `q.to_matrix()` equals
//! `transform::rotate(axis, angle)` for `q = from_axis_angle(axis, angle)`.

use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::scalar::{FloatScalar, Scalar};
use crate::vector::Vector3;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Scalar + Deserialize<'de>"))]
pub struct Quaternion<T> {
    /// Vector (imaginary) part
    pub v: Vector3<T>,
    /// Scalar (real) part
    pub w: T,
}

impl<T: FloatScalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> Quaternion<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            v: Vector3::new(x, y, z),
            w,
        }
    }

    #[inline]
    pub fn from_parts(v: Vector3<T>, w: T) -> Self {
        Self { v, w }
    }

    /// No rotation
    #[inline]
    pub fn identity() -> Self {
        Self::from_parts(Vector3::zeros(), T::one())
    }

    /// Rotation by `angle` radians about a unit `axis`
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let (s, c) = (angle / T::two()).sin_cos();
        Self::from_parts(*axis * s, c)
    }

    /// Rotation from Euler angles in radians, applied X then Y then Z.
    ///
    /// Matches the rotation part of [`transform`](crate::transform::transform).
    pub fn from_euler(x: T, y: T, z: T) -> Self {
        let qx = Self::from_axis_angle(&Vector3::right(), x);
        let qy = Self::from_axis_angle(&Vector3::up(), y);
        let qz = Self::from_axis_angle(&Vector3::forward(), z);
        qz * qy * qx
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_parts(-self.v, self.w)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.v.dot(&other.v) + self.w * other.w
    }

    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Unit quaternion in the same direction. Components are NaN for zero.
    pub fn normalize(&self) -> Self {
        let inv = T::one() / self.magnitude();
        Self::from_parts(self.v * inv, self.w * inv)
    }

    /// `conjugate / |q|²`; equal to the conjugate for unit quaternions
    pub fn inverse(&self) -> Self {
        let inv = T::one() / self.magnitude_squared();
        Self::from_parts(-self.v * inv, self.w * inv)
    }

    /// Rotate a vector by this (unit) quaternion, `q p q*`
    pub fn rotate(&self, p: &Vector3<T>) -> Vector3<T> {
        let uv = self.v.cross(p);
        let uuv = self.v.cross(&uv);
        *p + (uv * self.w + uuv) * T::two()
    }

    /// Rotation matrix embedded in an N×N identity, N = 3 or 4
    pub fn to_matrix<const N: usize>(&self) -> Matrix<T, N, N> {
        const { assert!(N == 3 || N == 4, "quaternion matrices are 3x3 or 4x4") };
        let two = T::two();
        let one = T::one();
        let (x, y, z, w) = (self.v.x(), self.v.y(), self.v.z(), self.w);

        let mut m = Matrix::identity();
        m.data[0][0] = one - two * (y * y + z * z);
        m.data[0][1] = two * (x * y - z * w);
        m.data[0][2] = two * (x * z + y * w);
        m.data[1][0] = two * (x * y + z * w);
        m.data[1][1] = one - two * (x * x + z * z);
        m.data[1][2] = two * (y * z - x * w);
        m.data[2][0] = two * (x * z - y * w);
        m.data[2][1] = two * (y * z + x * w);
        m.data[2][2] = one - two * (x * x + y * y);
        m
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// Falls back to a normalized lerp when the inputs are nearly parallel.
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let mut cos_theta = self.dot(other);
        let other = if cos_theta < T::zero() {
            cos_theta = -cos_theta;
            -*other
        } else {
            *other
        };

        let (a, b) = if cos_theta > T::one() - T::epsilon().sqrt() {
            (T::one() - t, t)
        } else {
            let theta = cos_theta.acos();
            let sin_theta = theta.sin();
            (
                ((T::one() - t) * theta).sin() / sin_theta,
                (t * theta).sin() / sin_theta,
            )
        };
        Self::from_parts(self.v * a + other.v * b, self.w * a + other.w * b).normalize()
    }
}

/// Hamilton product; `a * b` rotates by `b` first
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_parts(
            rhs.v * self.w + self.v * rhs.w + self.v.cross(&rhs.v),
            self.w * rhs.w - self.v.dot(&rhs.v),
        )
    }
}

impl<T: FloatScalar> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: FloatScalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, p: Vector3<T>) -> Vector3<T> {
        self.rotate(&p)
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_parts(-self.v, -self.w)
    }
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("quaternion")?;
        for c in self.v.iter().chain(std::iter::once(&self.w)) {
            f.write_str(" ")?;
            fmt::Display::fmt(c, f)?;
        }
        Ok(())
    }
}
