//! Game Mathematics Library
//!
//! This crate provides fixed-size vector, matrix and transform types for
//! 2D and 3D game code.
//!
//! ## Core Types
//!
//! - [`Vector`] - N-component vector (aliases [`Vector2`], [`Vector3`], [`Vector4`])
//! - [`Matrix`] - R×C row-major matrix with determinant, adjugate and inverse
//! - [`Quaternion`] - 3D rotation that converts to rotation matrices
//!
//! ## Transforms
//!
//! - [`transform`] - homogeneous translate, rotate and scale matrix builders
//! - [`Transform`] - position, Euler rotation and scale of one object
//!
//! Sizes are const generics, so mismatched shapes fail to compile. Vectors are
//! columns, angles are radians, and translation lives in the last matrix column.

mod common;
mod matrix;
mod quaternion;
mod scalar;
mod serialization;
mod square;
pub mod transform;
mod vector;

pub use common::{approx_eq, clamp, deg_to_rad, lerp, rad_to_deg};
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use quaternion::Quaternion;
pub use scalar::{FloatScalar, Scalar};
pub use transform::Transform;
pub use vector::{Vector, Vector2, Vector3, Vector4};
