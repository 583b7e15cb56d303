//! Fixed-size R×C matrix
//!
//! Storage is row-major, `data[row][col]`, and both dimensions are const
//! generics. Matrices multiply column vectors: `m * v` treats `v` as a column
//! and each output component is the dot product of one row with `v`.
//! Square-only algebra (determinant, adjugate, inverse) is implemented
//! in the `square` module.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::scalar::Scalar;
use crate::vector::Vector;

/// R×C matrix of `T`, row-major
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

/// 2x2 matrix
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3x3 matrix
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4x4 matrix, the homogeneous transform size for 3D
pub type Matrix4<T> = Matrix<T, 4, 4>;

// SAFETY: `repr(transparent)` over `[[T; C]; R]`, which is Pod whenever T is.
unsafe impl<T: Pod, const R: usize, const C: usize> Pod for Matrix<T, R, C> {}
// SAFETY: all-zero `[[T; C]; R]` is valid whenever it is valid for T.
unsafe impl<T: Zeroable, const R: usize, const C: usize> Zeroable for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from its rows
    ///
    /// ```
    /// use m4g_math::Matrix;
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.at(1, 0), 3);
    /// ```
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Number of rows
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns
    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// All elements zero
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// All elements set to `value`
    #[inline]
    pub fn splat(value: T) -> Self {
        Self { data: [[value; C]; R] }
    }

    /// Build from a flat list in row-major order.
    ///
    /// # Panics
    /// If `elements` does not hold exactly `R * C` values.
    pub fn from_row_major(elements: &[T]) -> Self {
        assert!(
            elements.len() == R * C,
            "matrix {}x{} needs {} elements, got {}",
            R,
            C,
            R * C,
            elements.len()
        );
        let mut m = Self::zeros();
        for (k, &value) in elements.iter().enumerate() {
            m.data[k / C][k % C] = value;
        }
        m
    }

    /// Build from row vectors
    pub fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        Self {
            data: rows.map(Vector::into_array),
        }
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// If either index is out of range.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }

    /// Copy of row `i`
    pub fn row(&self, i: usize) -> Vector<T, C> {
        assert!(i < R, "row {} out of range for matrix {}x{}", i, R, C);
        Vector::from_array(self.data[i])
    }

    /// Copy of column `j`
    pub fn column(&self, j: usize) -> Vector<T, R> {
        assert!(j < C, "column {} out of range for matrix {}x{}", j, R, C);
        let mut v = Vector::zeros();
        for i in 0..R {
            v[i] = self.data[i][j];
        }
        v
    }

    /// `result(i, j) = self(j, i)`
    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::zeros();
        for i in 0..R {
            for j in 0..C {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Ones on the diagonal, zeros elsewhere
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }

    /// Diagonal matrix with `v` on the diagonal
    pub fn from_diagonal(v: &Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = v[i];
        }
        m
    }

    /// The main diagonal as a vector
    pub fn diagonal(&self) -> Vector<T, N> {
        let mut v = Vector::zeros();
        for i in 0..N {
            v[i] = self.data[i][i];
        }
        v
    }

    /// Sum of the diagonal
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i][i];
        }
        sum
    }
}

macro_rules! impl_matrix_consts {
    ($($t:ty),*) => {
        $(
            impl Matrix<$t, 2, 2> {
                pub const ZERO: Self = Self::new([[0.0; 2]; 2]);
                pub const IDENTITY: Self = Self::new([
                    [1.0, 0.0],
                    [0.0, 1.0],
                ]);
            }

            impl Matrix<$t, 3, 3> {
                pub const ZERO: Self = Self::new([[0.0; 3]; 3]);
                pub const IDENTITY: Self = Self::new([
                    [1.0, 0.0, 0.0],
                    [0.0, 1.0, 0.0],
                    [0.0, 0.0, 1.0],
                ]);
            }

            impl Matrix<$t, 4, 4> {
                pub const ZERO: Self = Self::new([[0.0; 4]; 4]);
                pub const IDENTITY: Self = Self::new([
                    [1.0, 0.0, 0.0, 0.0],
                    [0.0, 1.0, 0.0, 0.0],
                    [0.0, 0.0, 1.0, 0.0],
                    [0.0, 0.0, 0.0, 1.0],
                ]);
            }
        )*
    };
}

impl_matrix_consts!(f32, f64);

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self::new(rows)
    }
}

// Element access by (row, col)

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < R && col < C,
            "index ({}, {}) out of range for matrix {}x{}",
            row,
            col,
            R,
            C
        );
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < R && col < C,
            "index ({}, {}) out of range for matrix {}x{}",
            row,
            col,
            R,
            C
        );
        &mut self.data[row][col]
    }
}

// Element-wise arithmetic

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, other: Self) {
        for i in 0..R {
            for j in 0..C {
                self.data[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, other: Self) {
        for i in 0..R {
            for j in 0..C {
                self.data[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;
    fn neg(mut self) -> Self {
        for row in self.data.iter_mut() {
            for e in row.iter_mut() {
                *e = T::zero() - *e;
            }
        }
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, scalar: T) {
        for row in self.data.iter_mut() {
            for e in row.iter_mut() {
                *e = *e * scalar;
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn div(mut self, scalar: T) -> Self {
        self /= scalar;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    fn div_assign(&mut self, scalar: T) {
        for row in self.data.iter_mut() {
            for e in row.iter_mut() {
                *e = *e / scalar;
            }
        }
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;
                #[inline]
                fn mul(self, m: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    m * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, i64);

// Products

/// (R×C) * (C×P) → R×P
impl<T: Scalar, const R: usize, const C: usize, const P: usize> Mul<Matrix<T, C, P>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, P>;

    fn mul(self, other: Matrix<T, C, P>) -> Matrix<T, R, P> {
        let mut out = Matrix::<T, R, P>::zeros();
        for i in 0..R {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..C {
                    sum = sum + self.data[i][k] * other.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }
        out
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

/// (R×C) * column vector of C → vector of R
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        let mut out = Vector::zeros();
        for i in 0..R {
            let mut sum = T::zero();
            for j in 0..C {
                sum = sum + self.data[i][j] * v[j];
            }
            out[i] = sum;
        }
        out
    }
}

/// Row vector of R * (R×C) → vector of C
impl<T: Scalar, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, m: Matrix<T, R, C>) -> Vector<T, C> {
        let mut out = Vector::zeros();
        for j in 0..C {
            let mut sum = T::zero();
            for i in 0..R {
                sum = sum + self[i] * m.data[i][j];
            }
            out[j] = sum;
        }
        out
    }
}

/// `matrix RxC` on the first line, then one line per row.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix {}x{}", R, C)?;
        for row in &self.data {
            f.write_str("\n")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                fmt::Display::fmt(e, f)?;
            }
        }
        Ok(())
    }
}
