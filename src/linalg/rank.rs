use crate::linalg::inverse::hadamard_bound;
use crate::traits::FloatScalar;
use crate::Matrix;

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Coarse rank estimate.
    ///
    /// - Square: `N` if `|det| > tol · Π‖row_i‖₂`, otherwise `N − 1`.
    /// - Non-square: `min(R, C)`.
    ///
    /// The tolerance is scaled by the Hadamard bound exactly as in
    /// [`Matrix::inverse_with_tolerance`], so a square matrix reports full
    /// rank if and only if it inverts with the same `tol`.
    ///
    /// This is not a true rank computation: it cannot report more than one
    /// rank deficiency, and non-square matrices are assumed full rank. It is
    /// enough to tell whether a square model matrix is invertible.
    ///
    /// ```
    /// use statekit::Matrix;
    ///
    /// let full = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// assert_eq!(full.rank(1e-12), 2);
    ///
    /// let deficient = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
    /// assert_eq!(deficient.rank(1e-12), 1);
    ///
    /// let wide: Matrix<f64, 2, 3> = Matrix::zeros();
    /// assert_eq!(wide.rank(1e-12), 2);
    /// ```
    pub fn rank(&self, tol: T) -> usize {
        if R != C {
            return R.min(C);
        }
        if elimination_det(self).abs() > tol * hadamard_bound(self) {
            R
        } else {
            R - 1
        }
    }
}

/// Determinant via Gaussian elimination with partial pivoting.
///
/// Works for any shape the caller has already checked to be square, which
/// lets [`Matrix::rank`] stay generic over `R` and `C` without a
/// [`Cofactor`](crate::linalg::Cofactor) bound. `O(N³)`.
fn elimination_det<T: FloatScalar, const R: usize, const C: usize>(m: &Matrix<T, R, C>) -> T {
    debug_assert_eq!(R, C);
    let n = R;
    let mut a = m.data;
    let mut sign = T::one();

    for col in 0..n {
        // Partial pivoting: find row with largest magnitude
        let mut max_row = col;
        let mut max_val = a[col][col].abs();
        for (row, r) in a.iter().enumerate().skip(col + 1) {
            let val = r[col].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val == T::zero() {
            return T::zero();
        }

        if max_row != col {
            a.swap(col, max_row);
            sign = -sign;
        }

        // Eliminate below pivot
        let pivot = a[col][col];
        for row in (col + 1)..n {
            let factor = a[row][col] / pivot;
            for j in (col + 1)..n {
                a[row][j] = a[row][j] - factor * a[col][j];
            }
            a[row][col] = T::zero();
        }
    }

    let mut det = sign;
    for (i, r) in a.iter().enumerate() {
        det = det * r[i];
    }
    det
}
