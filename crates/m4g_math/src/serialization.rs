//! Serde support
//!
//! A vector serializes as a fixed-length tuple of its components and a matrix
//! as a tuple of rows, so TOML and JSON see `[1.0, 2.0, 3.0]` and
//! `[[1.0, 0.0], [0.0, 1.0]]`. Deserializing rejects the wrong component count.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Borrowed fixed-size row, serialized like a vector
struct Row<'a, T, const N: usize>(&'a [T; N]);

impl<T: Serialize, const N: usize> Serialize for Row<'_, T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for c in self.0 {
            tuple.serialize_element(c)?;
        }
        tuple.end()
    }
}

impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Row(self.as_array()).serialize(serializer)
    }
}

impl<T: Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(R)?;
        for row in &self.data {
            tuple.serialize_element(&Row(row))?;
        }
        tuple.end()
    }
}

/// Fail if the sequence still has elements after the first `expected`
fn ensure_exhausted<'de, A, V>(mut seq: A, expected: usize, visitor: &V) -> Result<(), A::Error>
where
    A: SeqAccess<'de>,
    V: Visitor<'de>,
{
    let mut len = expected;
    while seq.next_element::<IgnoredAny>()?.is_some() {
        len += 1;
    }
    if len == expected {
        Ok(())
    } else {
        Err(de::Error::invalid_length(len, visitor))
    }
}

struct VectorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Visitor<'de> for VectorVisitor<T, N> {
    type Value = Vector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {} components", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut v = Vector::zeros();
        for i in 0..N {
            v[i] = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        ensure_exhausted(seq, N, &self)?;
        Ok(v)
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, VectorVisitor(PhantomData))
    }
}

struct MatrixVisitor<T, const R: usize, const C: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const R: usize, const C: usize> Visitor<'de>
    for MatrixVisitor<T, R, C>
{
    type Value = Matrix<T, R, C>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {} rows with {} components each", R, C)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut m = Matrix::zeros();
        for i in 0..R {
            let row: Vector<T, C> = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
            m.data[i] = row.into_array();
        }
        ensure_exhausted(seq, R, &self)?;
        Ok(m)
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const R: usize, const C: usize> Deserialize<'de>
    for Matrix<T, R, C>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(R, MatrixVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix2;
    use crate::quaternion::Quaternion;
    use crate::transform::Transform;
    use crate::vector::{Vector2, Vector3};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        position: Vector3<f32>,
        grid: Vector2<i32>,
        basis: Matrix2<f64>,
    }

    #[test]
    fn test_toml_roundtrip() {
        let doc = Doc {
            position: Vector3::new(1.0, 2.5, -3.0),
            grid: Vector2::new(4, -7),
            basis: Matrix2::new([[1.0, 2.0], [3.0, 4.0]]),
        };

        let text = toml::to_string(&doc).unwrap();
        assert!(text.contains("position = [1.0, 2.5, -3.0]"), "got:\n{}", text);
        assert!(text.contains("grid = [4, -7]"), "got:\n{}", text);

        let parsed: Doc = toml::from_str(&text).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_matrix_from_nested_arrays() {
        let parsed: Doc = toml::from_str(
            r#"
            position = [0.0, 0.0, 0.0]
            grid = [1, 2]
            basis = [[0.0, -1.0], [1.0, 0.0]]
            "#,
        )
        .unwrap();
        assert_eq!(parsed.basis.at(0, 1), -1.0);
        assert_eq!(parsed.basis.row(1), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let short = toml::from_str::<Doc>(
            r#"
            position = [1.0, 2.0]
            grid = [1, 2]
            basis = [[1.0, 0.0], [0.0, 1.0]]
            "#,
        );
        assert!(short.is_err());

        let long = toml::from_str::<Doc>(
            r#"
            position = [1.0, 2.0, 3.0, 4.0]
            grid = [1, 2]
            basis = [[1.0, 0.0], [0.0, 1.0]]
            "#,
        );
        assert!(long.is_err());

        let ragged = toml::from_str::<Doc>(
            r#"
            position = [1.0, 2.0, 3.0]
            grid = [1, 2]
            basis = [[1.0, 0.0], [0.0]]
            "#,
        );
        assert!(ragged.is_err());
    }

    #[test]
    fn test_transform_and_quaternion() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Object {
            transform: Transform<f32>,
            orientation: Quaternion<f32>,
        }

        let object = Object {
            transform: Transform::from_position(Vector3::new(1.0, 2.0, 3.0)),
            orientation: Quaternion::identity(),
        };
        let text = toml::to_string(&object).unwrap();
        let parsed: Object = toml::from_str(&text).unwrap();
        assert_eq!(parsed, object);
    }
}
