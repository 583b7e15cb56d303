//! Fixed-size N-component vector

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};
use num_traits::Signed;

use crate::scalar::{FloatScalar, Scalar};

/// N-component vector stored inline as `[T; N]`.
///
/// The component count is part of the type, so mixing sizes is a compile error.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

/// 2-component vector
pub type Vector2<T> = Vector<T, 2>;
/// 3-component vector, adds [`cross`](Vector::cross) and [`triple`](Vector::triple)
pub type Vector3<T> = Vector<T, 3>;
/// 4-component vector
pub type Vector4<T> = Vector<T, 4>;

// SAFETY: `repr(transparent)` over `[T; N]`, which is Pod whenever T is.
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}
// SAFETY: all-zero `[T; N]` is valid whenever it is valid for T.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from its components
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Number of components
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Apply `f` to every component
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector::from_array(self.data.map(f))
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The zero vector
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Every component set to `value`
    #[inline]
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Convert to another size, truncating or padding with zero
    #[inline]
    pub fn resize<const M: usize>(&self) -> Vector<T, M> {
        self.resize_with(T::zero())
    }

    /// Convert to another size, truncating or padding with `fill`
    ///
    /// `Vector3::new(x, y, z).resize_with::<4>(1.0)` gives the homogeneous point.
    pub fn resize_with<const M: usize>(&self, fill: T) -> Vector<T, M> {
        let mut data = [fill; M];
        for (dst, src) in data.iter_mut().zip(self.data.iter()) {
            *dst = *src;
        }
        Vector { data }
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i] * other.data[i];
        }
        sum
    }

    /// Squared length, no square root needed
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        (*self - *other).magnitude_squared()
    }

    /// Component-wise multiplication (Hadamard product)
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        let mut out = *self;
        for i in 0..N {
            out.data[i] = self.data[i] * other.data[i];
        }
        out
    }
}

impl<T: Scalar + PartialOrd, const N: usize> Vector<T, N> {
    /// Component-wise minimum
    pub fn min_components(&self, other: &Self) -> Self {
        let mut out = *self;
        for i in 0..N {
            if other.data[i] < out.data[i] {
                out.data[i] = other.data[i];
            }
        }
        out
    }

    /// Component-wise maximum
    pub fn max_components(&self, other: &Self) -> Self {
        let mut out = *self;
        for i in 0..N {
            if other.data[i] > out.data[i] {
                out.data[i] = other.data[i];
            }
        }
        out
    }

    /// Clamp each component between the matching components of `min` and `max`
    pub fn clamp_components(&self, min: &Self, max: &Self) -> Self {
        self.max_components(min).min_components(max)
    }
}

impl<T: Scalar + Signed, const N: usize> Vector<T, N> {
    /// Component-wise absolute value
    #[inline]
    pub fn abs(&self) -> Self {
        self.map(|c| c.abs())
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Length, `sqrt(sum of squares)`
    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Scale to unit length.
    ///
    /// The caller guarantees a non-zero magnitude. The zero vector comes back
    /// as NaN components; use [`try_normalize`](Self::try_normalize) when that
    /// is possible.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Unit vector, or `None` for the zero vector
    pub fn try_normalize(&self) -> Option<Self> {
        let mag = self.magnitude();
        if mag == T::zero() {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Euclidean distance between two points
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    /// Component of `self` along `onto`.
    ///
    /// Undefined (NaN) when `onto` is the zero vector.
    #[inline]
    pub fn project(&self, onto: &Self) -> Self {
        *onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Component of `self` perpendicular to `onto`, `self - project(onto)`.
    ///
    /// Undefined (NaN) when `onto` is the zero vector.
    #[inline]
    pub fn reject(&self, onto: &Self) -> Self {
        *self - self.project(onto)
    }

    /// Linear interpolation, `t = 0` gives `self` and `t = 1` gives `other`
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self * (T::one() - t) + *other * t
    }
}

// Size-specific constructors, accessors and named axes

impl<T> Vector<T, 2> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }
}

impl<T> Vector<T, 3> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }
}

impl<T> Vector<T, 4> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }
}

macro_rules! impl_accessors {
    ($n:literal => $($name:ident: $idx:literal),+) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[inline]
                pub const fn $name(&self) -> T {
                    self.data[$idx]
                }
            )+
        }
    };
}

impl_accessors!(2 => x: 0, y: 1);
impl_accessors!(3 => x: 0, y: 1, z: 2);
impl_accessors!(4 => x: 0, y: 1, z: 2, w: 3);

impl<T: Scalar> Vector<T, 2> {
    /// `(0, 1)`
    #[inline]
    pub fn up() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// `(1, 0)`
    #[inline]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// `(0, 1, 0)`
    #[inline]
    pub fn up() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// `(1, 0, 0)`
    #[inline]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// `(0, 0, 1)`
    #[inline]
    pub fn forward() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Cross product
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Scalar triple product `self · (b × c)`, the signed volume of the parallelepiped
    #[inline]
    pub fn triple(&self, b: &Self, c: &Self) -> T {
        self.dot(&b.cross(c))
    }
}

macro_rules! impl_float_consts {
    ($($t:ty),*) => {
        $(
            impl Vector<$t, 2> {
                pub const ZERO: Self = Self::new(0.0, 0.0);
                pub const ONE: Self = Self::new(1.0, 1.0);
                pub const UP: Self = Self::new(0.0, 1.0);
                pub const RIGHT: Self = Self::new(1.0, 0.0);
            }

            impl Vector<$t, 3> {
                pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
                pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
                pub const UP: Self = Self::new(0.0, 1.0, 0.0);
                pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
                pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
            }

            impl Vector<$t, 4> {
                pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
                pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
            }
        )*
    };
}

impl_float_consts!(f32, f64);

// Conversions

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Component access

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        assert!(i < N, "index {} out of range for vector<{}>", i, N);
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        assert!(i < N, "index {} out of range for vector<{}>", i, N);
        &mut self.data[i]
    }
}

// Operator overloads

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        for i in 0..N {
            self.data[i] = self.data[i] + other.data[i];
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        for i in 0..N {
            self.data[i] = self.data[i] - other.data[i];
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        for c in self.data.iter_mut() {
            *c = *c * scalar;
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn div(mut self, scalar: T) -> Self {
        self /= scalar;
        self
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        for c in self.data.iter_mut() {
            *c = *c / scalar;
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| T::zero() - c)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;
                #[inline]
                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, i64);

/// `vector<N>` followed by the components on one line.
///
/// Precision and other format flags are forwarded to each component.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector<{}>", N)?;
        for c in &self.data {
            f.write_str(" ")?;
            fmt::Display::fmt(c, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq<const N: usize>(a: Vector<f32, N>, b: Vector<f32, N>) -> bool {
        (0..N).all(|i| approx_eq(a[i], b[i]))
    }

    #[test]
    fn test_construction() {
        let z: Vector<f32, 3> = Vector::zeros();
        assert_eq!(z, Vector3::<f32>::ZERO);
        assert_eq!(Vector::<i32, 4>::default(), Vector4::new(0, 0, 0, 0));

        let s = Vector::<f64, 2>::splat(7.0);
        assert_eq!(s, Vector2::new(7.0, 7.0));

        let v = Vector::from_array([1, 2, 3, 4, 5]);
        assert_eq!(v.len(), 5);
        assert_eq!(v[4], 5);

        let w: Vector3<f32> = [1.0, 2.0, 3.0].into();
        assert_eq!(w.x(), 1.0);
        assert_eq!(w.y(), 2.0);
        assert_eq!(w.z(), 3.0);
    }

    #[test]
    fn test_resize() {
        let v = Vector3::new(1.0_f32, 2.0, 3.0);
        let truncated: Vector2<f32> = v.resize();
        assert_eq!(truncated, Vector2::new(1.0, 2.0));

        let padded: Vector<f32, 5> = v.resize();
        assert_eq!(padded.as_array(), &[1.0, 2.0, 3.0, 0.0, 0.0]);

        let homogeneous = v.resize_with::<4>(1.0);
        assert_eq!(homogeneous, Vector4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_index_mut() {
        let mut v = Vector2::new(1, 5);
        v[0] += 1;
        assert_eq!(v, Vector2::new(2, 5));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range() {
        let v = Vector3::new(1.0_f32, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn test_dot() {
        let a = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 70
        assert_eq!(a.dot(&b), 70.0);
        assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn test_magnitude() {
        let v = Vector2::new(3.0_f64, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector3::new(3.0_f32, 0.0, 4.0);
        let n = v.normalize();
        assert!(approx_eq(n.magnitude(), 1.0));
        assert!(vec_approx_eq(n, Vector3::new(0.6, 0.0, 0.8)));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let n = Vector3::<f32>::ZERO.normalize();
        assert!(n.iter().all(|c| c.is_nan()));
        assert!(Vector3::<f32>::ZERO.try_normalize().is_none());
        assert!(Vector3::new(0.0_f32, 2.0, 0.0).try_normalize().is_some());
    }

    #[test]
    fn test_distance() {
        let a = Vector2::new(1.0_f32, 2.0);
        let b = Vector2::new(4.0, 6.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
    }

    #[test]
    fn test_cross() {
        let x = Vector3::<f32>::RIGHT;
        let y = Vector3::<f32>::UP;
        assert_eq!(x.cross(&y), Vector3::<f32>::FORWARD);
        assert_eq!(y.cross(&x), -Vector3::<f32>::FORWARD);
        // Parallel vectors have a zero cross product
        assert_eq!(x.cross(&(x * 3.0)), Vector3::<f32>::ZERO);
    }

    #[test]
    fn test_triple() {
        let a = Vector3::new(1, 0, 0);
        let b = Vector3::new(0, 2, 0);
        let c = Vector3::new(0, 0, 3);
        assert_eq!(a.triple(&b, &c), 6);
        assert_eq!(b.triple(&a, &c), -6);
    }

    #[test]
    fn test_project_reject() {
        let v = Vector2::new(2.0_f32, 3.0);
        let onto = Vector2::new(4.0, 0.0);
        assert!(vec_approx_eq(v.project(&onto), Vector2::new(2.0, 0.0)));
        assert!(vec_approx_eq(v.reject(&onto), Vector2::new(0.0, 3.0)));

        let sum = v.project(&onto) + v.reject(&onto);
        assert!(vec_approx_eq(sum, v));
        assert!(approx_eq(v.reject(&onto).dot(&onto), 0.0));
    }

    #[test]
    fn test_named_axes() {
        assert_eq!(Vector2::<i32>::up(), Vector2::new(0, 1));
        assert_eq!(Vector2::<i32>::right(), Vector2::new(1, 0));
        assert_eq!(Vector3::<f64>::forward(), Vector3::<f64>::FORWARD);
        assert_eq!(Vector2::<f32>::UP + Vector2::<f32>::RIGHT, Vector2::<f32>::ONE);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::splat(3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_compound_assign() {
        let mut v = Vector2::new(1, 2);
        v += Vector2::new(1, 1);
        assert_eq!(v, Vector2::new(2, 3));
        v -= Vector2::new(2, 0);
        assert_eq!(v, Vector2::new(0, 3));
        v *= 4;
        assert_eq!(v, Vector2::new(0, 12));
        v /= 3;
        assert_eq!(v, Vector2::new(0, 4));
    }

    #[test]
    fn test_exact_equality() {
        let a = Vector2::new(0.1_f64 + 0.2, 1.0);
        let b = Vector2::new(0.3_f64, 1.0);
        // No epsilon: 0.1 + 0.2 != 0.3 in binary floating point
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn test_lerp() {
        let a = Vector4::<f32>::ZERO;
        let b = Vector4::splat(10.0);
        assert_eq!(a.lerp(&b, 0.5), Vector4::splat(5.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_min_max_clamp() {
        let a = Vector4::new(1.0_f32, 5.0, 2.0, 8.0);
        let b = Vector4::new(3.0, 2.0, 4.0, 6.0);
        assert_eq!(a.min_components(&b), Vector4::new(1.0, 2.0, 2.0, 6.0));
        assert_eq!(a.max_components(&b), Vector4::new(3.0, 5.0, 4.0, 8.0));

        let v = Vector4::new(-1.0_f32, 5.0, 2.5, 10.0);
        let clamped = v.clamp_components(&Vector4::<f32>::ZERO, &Vector4::splat(3.0));
        assert_eq!(clamped, Vector4::new(0.0, 3.0, 2.5, 3.0));
    }

    #[test]
    fn test_abs_and_component_mul() {
        let v = Vector3::new(-1, 2, -3);
        assert_eq!(v.abs(), Vector3::new(1, 2, 3));
        assert_eq!(v.component_mul(&Vector3::new(2, 2, 2)), Vector3::new(-2, 4, -6));
    }

    #[test]
    fn test_display() {
        let v = Vector3::new(1, 2, 3);
        assert_eq!(v.to_string(), "vector<3> 1 2 3");

        let f = Vector2::new(0.5_f32, 1.0);
        assert_eq!(format!("{:.2}", f), "vector<2> 0.50 1.00");
    }

    #[test]
    fn test_pod_cast() {
        let vs = [Vector2::new(1.0_f32, 2.0), Vector2::new(3.0, 4.0)];
        let flat: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
    }
}
