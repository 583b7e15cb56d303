//! Square-matrix algebra: minors, determinant, adjugate, inverse
//!
//! Stable Rust cannot name `Matrix<T, N - 1, N - 1>`, so the determinant does
//! not recurse through types. It recurses over sets of surviving row and
//! column indices into the full matrix storage instead. Sizes 1 to 3 use closed
//! forms; larger sizes expand along the first row (Laplace) until a closed
//! form applies.

use crate::matrix::Matrix;
use crate::scalar::{FloatScalar, Scalar};

/// Ordered subset of `0..N`, stored inline
#[derive(Clone, Copy)]
struct IndexSet<const N: usize> {
    idx: [usize; N],
    len: usize,
}

impl<const N: usize> IndexSet<N> {
    fn full() -> Self {
        let mut idx = [0; N];
        for (k, slot) in idx.iter_mut().enumerate() {
            *slot = k;
        }
        Self { idx, len: N }
    }

    /// Copy with the `k`-th entry removed
    fn without(&self, k: usize) -> Self {
        let mut out = Self { idx: [0; N], len: 0 };
        for (pos, &i) in self.idx[..self.len].iter().enumerate() {
            if pos != k {
                out.idx[out.len] = i;
                out.len += 1;
            }
        }
        out
    }

    #[inline]
    fn get(&self, k: usize) -> usize {
        self.idx[k]
    }
}

/// Determinant of the submatrix picked out by `rows` × `cols`.
///
/// The empty submatrix has determinant 1.
fn sub_determinant<T: Scalar, const N: usize>(
    data: &[[T; N]; N],
    rows: &IndexSet<N>,
    cols: &IndexSet<N>,
) -> T {
    let a = |i: usize, j: usize| data[rows.get(i)][cols.get(j)];

    match rows.len {
        0 => T::one(),
        1 => a(0, 0),
        2 => a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0),
        // Sarrus
        3 => {
            a(0, 0) * a(1, 1) * a(2, 2) + a(0, 1) * a(1, 2) * a(2, 0) + a(0, 2) * a(1, 0) * a(2, 1)
                - a(0, 2) * a(1, 1) * a(2, 0)
                - a(0, 0) * a(1, 2) * a(2, 1)
                - a(0, 1) * a(1, 0) * a(2, 2)
        }
        n => {
            let rest = rows.without(0);
            let mut det = T::zero();
            for i in 0..n {
                let term = a(0, i) * sub_determinant(data, &rest, &cols.without(i));
                det = if i % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// The (N-1)×(N-1) matrix left after deleting `row` and `col`.
    ///
    /// `S` must be `N - 1`; any other size fails to compile.
    ///
    /// ```
    /// use m4g_math::Matrix3;
    /// let m = Matrix3::from_row_major(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// let minor = m.minor::<2>(2, 2);
    /// assert_eq!(minor.as_rows(), &[[1, 2], [4, 5]]);
    /// ```
    ///
    /// # Panics
    /// If `row` or `col` is out of range.
    pub fn minor<const S: usize>(&self, row: usize, col: usize) -> Matrix<T, S, S> {
        const { assert!(S + 1 == N, "minor of an NxN matrix is (N-1)x(N-1)") };
        assert!(
            row < N && col < N,
            "minor ({}, {}) out of range for matrix {}x{}",
            row,
            col,
            N,
            N
        );

        let mut out = Matrix::<T, S, S>::zeros();
        for (di, si) in (0..N).filter(|&i| i != row).enumerate() {
            for (dj, sj) in (0..N).filter(|&j| j != col).enumerate() {
                out.data[di][dj] = self.data[si][sj];
            }
        }
        out
    }

    /// Determinant.
    ///
    /// Closed form up to 3×3, Laplace expansion along the first row above that.
    pub fn determinant(&self) -> T {
        const { assert!(N > 0, "determinant of an empty matrix") };
        if N > 3 {
            log::trace!("Laplace expansion of a {}x{} determinant", N, N);
        }
        let all = IndexSet::<N>::full();
        sub_determinant(&self.data, &all, &all)
    }

    /// `(-1)^(row + col)` times the determinant of the minor at `(row, col)`
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        assert!(
            row < N && col < N,
            "cofactor ({}, {}) out of range for matrix {}x{}",
            row,
            col,
            N,
            N
        );
        let all = IndexSet::<N>::full();
        let minor = sub_determinant(&self.data, &all.without(row), &all.without(col));
        // Subtract rather than multiply by -1 so unsigned elements work
        if (row + col) % 2 == 0 {
            minor
        } else {
            T::zero() - minor
        }
    }

    /// Transpose of the cofactor matrix, `adj(i, j) = cofactor(j, i)`
    pub fn adjugate(&self) -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                out.data[i][j] = self.cofactor(j, i);
            }
        }
        out
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Inverse together with an "invertible" flag.
    ///
    /// A singular matrix (determinant exactly zero) comes back unchanged with
    /// the flag set to `false`.
    pub fn inverse(&self) -> (Self, bool) {
        match self.try_inverse() {
            Some(inv) => (inv, true),
            None => (*self, false),
        }
    }

    /// `adjugate / determinant`, or `None` if the determinant is exactly zero
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::zero() {
            log::debug!("{}x{} matrix is singular, no inverse", N, N);
            return None;
        }
        Some(self.adjugate() / det)
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant() != T::zero()
    }
}
