use crate::linalg::LinalgError;
use crate::traits::FloatScalar;
use crate::Matrix;

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Cholesky factor: lower-triangular `L` with `L · Lᵀ = self`.
    ///
    /// Canonical recurrence, column by column:
    ///
    /// - `L[j][j] = sqrt(m[j][j] − Σ_{k<j} L[j][k]²)`
    /// - `L[i][j] = (m[i][j] − Σ_{k<j} L[i][k] · L[j][k]) / L[j][j]` for `i > j`
    ///
    /// Only the lower triangle of `self` is read; the matrix is assumed
    /// symmetric. Returns [`LinalgError::NotPositiveDefinite`] when a pivot
    /// is not strictly positive.
    ///
    /// ```
    /// use statekit::Matrix;
    ///
    /// let spd = Matrix::new([[4.0_f64, 2.0], [2.0, 3.0]]);
    /// let l = spd.lower_triangular().unwrap();
    /// assert!((l * l.transpose()).approx_eq(&spd, 1e-12));
    /// assert_eq!(l[(0, 1)], 0.0);
    /// ```
    pub fn lower_triangular(&self) -> Result<Self, LinalgError> {
        let mut l = Self::zeros();
        for j in 0..N {
            let mut diag = self.data[j][j];
            for k in 0..j {
                diag = diag - l.data[j][k] * l.data[j][k];
            }
            // Negated test so NaN also fails
            if !(diag > T::zero()) {
                return Err(LinalgError::NotPositiveDefinite);
            }
            let ljj = diag.sqrt();
            l.data[j][j] = ljj;

            for i in (j + 1)..N {
                let mut sum = self.data[i][j];
                for k in 0..j {
                    sum = sum - l.data[i][k] * l.data[j][k];
                }
                l.data[i][j] = sum / ljj;
            }
        }
        Ok(l)
    }

    /// Transposed Cholesky factor: upper-triangular `U = Lᵀ` with
    /// `Uᵀ · U = self`.
    pub fn upper_triangular(&self) -> Result<Self, LinalgError> {
        Ok(self.lower_triangular()?.transpose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spd_3x3() -> Matrix<f64, 3, 3> {
        Matrix::new([[4.0, 2.0, 1.0], [2.0, 10.0, 3.5], [1.0, 3.5, 4.5]])
    }

    #[test]
    fn cholesky_1x1() {
        let m = Matrix::new([[9.0_f64]]);
        assert_eq!(m.lower_triangular(), Ok(Matrix::new([[3.0]])));
    }

    #[test]
    fn cholesky_known_factor() {
        let m = Matrix::new([[4.0_f64, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]]);
        let l = m.lower_triangular().unwrap();
        let expected = Matrix::new([[2.0, 0.0, 0.0], [6.0, 1.0, 0.0], [-8.0, 5.0, 3.0]]);
        assert!(l.approx_eq(&expected, 1e-12));
    }

    #[test]
    fn cholesky_reconstructs() {
        let a = spd_3x3();
        let l = a.lower_triangular().unwrap();
        assert!((l * l.transpose()).approx_eq(&a, 1e-12));
        for i in 0..3 {
            for j in (i + 1)..3 {
                assert_eq!(l[(i, j)], 0.0, "upper entry ({},{})", i, j);
            }
        }
    }

    #[test]
    fn upper_is_transpose_of_lower() {
        let a = spd_3x3();
        let u = a.upper_triangular().unwrap();
        assert_eq!(u, a.lower_triangular().unwrap().transpose());
        assert!((u.transpose() * u).approx_eq(&a, 1e-12));
    }

    #[test]
    fn not_positive_definite() {
        let a = Matrix::new([[1.0_f64, 5.0], [5.0, 1.0]]);
        assert_eq!(a.lower_triangular(), Err(LinalgError::NotPositiveDefinite));

        let neg = Matrix::new([[-1.0_f64]]);
        assert_eq!(neg.upper_triangular(), Err(LinalgError::NotPositiveDefinite));
    }

    #[test]
    fn identity_factor_is_identity() {
        let id: Matrix<f64, 4, 4> = Matrix::eye();
        assert_eq!(id.lower_triangular(), Ok(id));
    }
}
