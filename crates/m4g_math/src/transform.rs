//! Affine transform helpers
//!
//! Column-vector convention throughout: a point `p` maps to `m * p`,
//! translation sits in the last column, and `a * b` applies `b` first.
//! All angles are in radians.

use serde::{Deserialize, Serialize};

use crate::matrix::{Matrix, Matrix4};
use crate::scalar::{FloatScalar, Scalar};
use crate::vector::{Vector, Vector3};

/// N×N identity
#[inline]
pub fn identity<T: Scalar, const N: usize>() -> Matrix<T, N, N> {
    Matrix::identity()
}

/// Homogeneous translation by a `D`-vector, where `N = D + 1`.
///
/// ```
/// use m4g_math::{transform, Matrix4, Vector3, Vector4};
/// let m: Matrix4<f32> = transform::translate(&Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(m * Vector4::new(0.0, 0.0, 0.0, 1.0), Vector4::new(1.0, 2.0, 3.0, 1.0));
/// ```
pub fn translate<T: Scalar, const D: usize, const N: usize>(v: &Vector<T, D>) -> Matrix<T, N, N> {
    let mut m = Matrix::identity();
    apply_translation(&mut m, v);
    m
}

/// Add `v` to the translation column of `m` in place.
///
/// Same as `translate(v) * m` when the bottom row of `m` is `(0, .., 0, 1)`.
pub fn apply_translation<T: Scalar, const D: usize, const N: usize>(
    m: &mut Matrix<T, N, N>,
    v: &Vector<T, D>,
) {
    const { assert!(D + 1 == N, "homogeneous translation takes an (N-1)-vector") };
    for i in 0..D {
        m.data[i][N - 1] = m.data[i][N - 1] + v[i];
    }
}

/// Rotation about the X axis, embedded in an N×N identity (N ≥ 3)
pub fn rotate_x<T: FloatScalar, const N: usize>(theta: T) -> Matrix<T, N, N> {
    const { assert!(N >= 3, "rotate_x needs at least a 3x3 matrix") };
    let (s, c) = theta.sin_cos();
    let mut m = Matrix::identity();
    m.data[1][1] = c;
    m.data[1][2] = -s;
    m.data[2][1] = s;
    m.data[2][2] = c;
    m
}

/// Rotation about the Y axis, embedded in an N×N identity (N ≥ 3)
pub fn rotate_y<T: FloatScalar, const N: usize>(theta: T) -> Matrix<T, N, N> {
    const { assert!(N >= 3, "rotate_y needs at least a 3x3 matrix") };
    let (s, c) = theta.sin_cos();
    let mut m = Matrix::identity();
    m.data[0][0] = c;
    m.data[0][2] = s;
    m.data[2][0] = -s;
    m.data[2][2] = c;
    m
}

/// Rotation about the Z axis, embedded in an N×N identity (N ≥ 2).
///
/// For N = 2 this is the plain 2D rotation.
pub fn rotate_z<T: FloatScalar, const N: usize>(theta: T) -> Matrix<T, N, N> {
    const { assert!(N >= 2, "rotate_z needs at least a 2x2 matrix") };
    let (s, c) = theta.sin_cos();
    let mut m = Matrix::identity();
    m.data[0][0] = c;
    m.data[0][1] = -s;
    m.data[1][0] = s;
    m.data[1][1] = c;
    m
}

/// Rotation by `theta` about `axis` (Rodrigues' formula).
///
/// `axis` must already be unit length; nothing checks it.
pub fn rotate<T: FloatScalar, const N: usize>(axis: &Vector3<T>, theta: T) -> Matrix<T, N, N> {
    const { assert!(N >= 3, "rotate needs at least a 3x3 matrix") };
    let (s, c) = theta.sin_cos();
    let t = T::one() - c;
    let (x, y, z) = (axis.x(), axis.y(), axis.z());

    let mut m = Matrix::identity();
    m.data[0][0] = c + x * x * t;
    m.data[0][1] = x * y * t - z * s;
    m.data[0][2] = x * z * t + y * s;
    m.data[1][0] = y * x * t + z * s;
    m.data[1][1] = c + y * y * t;
    m.data[1][2] = y * z * t - x * s;
    m.data[2][0] = z * x * t - y * s;
    m.data[2][1] = z * y * t + x * s;
    m.data[2][2] = c + z * z * t;
    m
}

/// Diagonal scale matrix.
///
/// With `D == N` every diagonal entry comes from `v`. With `D + 1 == N` the
/// homogeneous slot stays 1.
pub fn scale<T: Scalar, const D: usize, const N: usize>(v: &Vector<T, D>) -> Matrix<T, N, N> {
    let mut m = Matrix::identity();
    apply_scale(&mut m, v);
    m
}

/// Multiply the first `D` diagonal entries of `m` by `v` in place
pub fn apply_scale<T: Scalar, const D: usize, const N: usize>(
    m: &mut Matrix<T, N, N>,
    v: &Vector<T, D>,
) {
    const { assert!(D == N || D + 1 == N, "scale takes an N- or (N-1)-vector") };
    for i in 0..D {
        m.data[i][i] = m.data[i][i] * v[i];
    }
}

/// `translate · rotate_z · rotate_y · rotate_x · scale` as one 4x4.
///
/// `rotation` holds Euler angles in radians, so X is applied first, then Y,
/// then Z. This order is fixed.
pub fn transform<T: FloatScalar>(
    position: &Vector3<T>,
    rotation: &Vector3<T>,
    scale_by: &Vector3<T>,
) -> Matrix4<T> {
    translate::<T, 3, 4>(position)
        * rotate_z::<T, 4>(rotation.z())
        * rotate_y::<T, 4>(rotation.y())
        * rotate_x::<T, 4>(rotation.x())
        * scale::<T, 3, 4>(scale_by)
}

/// Apply a homogeneous 4x4 to a point (`w = 1`)
#[inline]
pub fn transform_point<T: Scalar>(m: &Matrix4<T>, p: &Vector3<T>) -> Vector3<T> {
    (*m * p.resize_with::<4>(T::one())).resize()
}

/// Apply a homogeneous 4x4 to a direction (`w = 0`), ignoring translation
#[inline]
pub fn transform_direction<T: Scalar>(m: &Matrix4<T>, d: &Vector3<T>) -> Vector3<T> {
    (*m * d.resize::<4>()).resize()
}

/// Position, Euler rotation and per-axis scale of an object in 3D
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Scalar + Deserialize<'de>"))]
pub struct Transform<T> {
    /// Position in world space
    pub position: Vector3<T>,
    /// Euler angles in radians, applied X then Y then Z
    pub rotation: Vector3<T>,
    /// Per-axis scale factor
    pub scale: Vector3<T>,
}

impl<T: FloatScalar> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> Transform<T> {
    /// No translation, no rotation, unit scale
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Vector3::zeros(),
            scale: Vector3::splat(T::one()),
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vector3<T>) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn with_rotation(mut self, rotation: Vector3<T>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vector3<T>) -> Self {
        self.scale = scale;
        self
    }

    /// The composed homogeneous matrix, see [`transform`]
    pub fn to_matrix(&self) -> Matrix4<T> {
        transform(&self.position, &self.rotation, &self.scale)
    }

    /// Inverse matrix, or `None` when a scale component is zero
    pub fn inverse_matrix(&self) -> Option<Matrix4<T>> {
        self.to_matrix().try_inverse()
    }

    /// Transform a point from local space to world space.
    ///
    /// Applies scale, then rotation, then translation.
    pub fn transform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        transform_point(&self.to_matrix(), p)
    }

    /// Transform a direction from local space to world space.
    ///
    /// Applies scale and rotation, but not translation.
    pub fn transform_direction(&self, d: &Vector3<T>) -> Vector3<T> {
        transform_direction(&self.to_matrix(), d)
    }

    /// Move the transform by an offset
    pub fn translate(&mut self, offset: Vector3<T>) {
        self.position += offset;
    }

    /// Set the same scale on every axis
    pub fn set_uniform_scale(&mut self, factor: T) {
        self.scale = Vector3::splat(factor);
    }
}
