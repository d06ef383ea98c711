pub mod aliases;
mod ops;
mod square;
mod util;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is row-major: `data[row][col]`.
/// Stack-allocated, no-std compatible. Dimensions are part of the type, so a
/// matrix can never be resized and shape mismatches in products are compile
/// errors rather than runtime failures.
///
/// # Examples
///
/// ```
/// use statekit::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::eye();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (R arrays of C elements each).
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Whether the matrix is square (`R == C`).
    #[inline]
    pub const fn is_square(&self) -> bool {
        R == C
    }

    /// Consume the matrix and return its row-major storage.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// Checked element read.
    ///
    /// Returns [`LinalgError::OutOfRange`] when `row >= R` or `col >= C`.
    ///
    /// ```
    /// use statekit::Matrix;
    /// use statekit::linalg::LinalgError;
    ///
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.get(1, 0), Ok(3.0));
    /// assert_eq!(m.get(2, 0), Err(LinalgError::OutOfRange));
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T, LinalgError> {
        if row >= R || col >= C {
            return Err(LinalgError::OutOfRange);
        }
        Ok(self.data[row][col])
    }

    /// Checked element write.
    ///
    /// Returns [`LinalgError::OutOfRange`] when `row >= R` or `col >= C`;
    /// the matrix is left untouched in that case.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), LinalgError> {
        if row >= R || col >= C {
            return Err(LinalgError::OutOfRange);
        }
        self.data[row][col] = value;
        Ok(())
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

// Index by (row, col) tuple. Panics out of range, like slices; use
// `get`/`set` for the checked variants.
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

pub use aliases::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_eye() {
        let z: Matrix<f64, 3, 3> = Matrix::zeros();
        assert_eq!(z[(0, 0)], 0.0);
        assert_eq!(z[(2, 2)], 0.0);

        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert_eq!(id[(0, 0)], 1.0);
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
    }

    #[test]
    fn default_is_zero() {
        let d: Matrix<f32, 2, 4> = Matrix::default();
        assert_eq!(d, Matrix::zeros());
    }

    #[test]
    fn new_is_row_major() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.into_rows(), [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn index_mut() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    fn non_square() {
        let m: Matrix<f64, 2, 3> = Matrix::zeros();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert!(!m.is_square());
        assert!(Matrix::<f64, 3, 3>::zeros().is_square());
    }

    #[test]
    fn checked_get_boundary() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        // dimension - 1 is valid, dimension itself is not
        assert_eq!(m.get(1, 2), Ok(6.0));
        assert_eq!(m.get(2, 2), Err(LinalgError::OutOfRange));
        assert_eq!(m.get(1, 3), Err(LinalgError::OutOfRange));
    }

    #[test]
    fn checked_set_boundary() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        assert_eq!(m.set(1, 1, 9.0), Ok(()));
        assert_eq!(m[(1, 1)], 9.0);
        assert_eq!(m.set(2, 0, 1.0), Err(LinalgError::OutOfRange));
        assert_eq!(m.set(0, 2, 1.0), Err(LinalgError::OutOfRange));
        assert_eq!(m, Matrix::new([[0.0, 0.0], [0.0, 9.0]]));
    }

    #[test]
    fn integer_matrix() {
        let m: Matrix<i32, 2, 2> = Matrix::eye();
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 1)], 0);
    }
}
