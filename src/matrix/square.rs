use crate::matrix::vector::ColumnVector;
use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i][i];
        }
        sum
    }

    /// Extract the diagonal as a column vector.
    pub fn diag(&self) -> ColumnVector<T, N> {
        let mut v = ColumnVector::zeros();
        for i in 0..N {
            v.data[i][0] = self.data[i][i];
        }
        v
    }

    /// Create a diagonal matrix from a column vector.
    ///
    /// Handy for noise covariances with independent components:
    ///
    /// ```
    /// use statekit::{ColumnVector, Matrix};
    /// let q = Matrix::from_diag(&ColumnVector::from_column([0.1, 0.2]));
    /// assert_eq!(q, Matrix::new([[0.1, 0.0], [0.0, 0.2]]));
    /// ```
    pub fn from_diag(v: &ColumnVector<T, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = v.data[i][0];
        }
        m
    }

    /// Integer matrix power via repeated squaring.
    ///
    /// `pow(0)` returns the identity matrix.
    pub fn pow(&self, mut n: u32) -> Self {
        let mut result = Self::eye();
        let mut base = *self;
        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }
        result
    }

    /// Check if the matrix is exactly symmetric (A == Aᵀ).
    pub fn is_symmetric(&self) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                if self.data[i][j] != self.data[j][i] {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_of_covariance() {
        let p = Matrix::new([[0.5, 0.1], [0.1, 2.0]]);
        assert_eq!(p.trace(), 2.5);
        assert_eq!(Matrix::<i64, 4, 4>::eye().trace(), 4);
    }

    #[test]
    fn diag_round_trip() {
        let q = Matrix::from_diag(&ColumnVector::from_column([1e-3, 2e-3, 5e-2]));
        assert_eq!(q[(2, 2)], 5e-2);
        assert_eq!(q[(0, 2)], 0.0);
        assert_eq!(q.diag().to_column(), [1e-3, 2e-3, 5e-2]);
        assert!(q.is_symmetric());
    }

    #[test]
    fn pow_advances_transition() {
        // k steps of a constant-velocity model move position by k·dt·v
        let f = Matrix::new([[1, 2], [0, 1]]);
        assert_eq!(f.pow(0), Matrix::eye());
        assert_eq!(f.pow(1), f);
        assert_eq!(f.pow(4), Matrix::new([[1, 8], [0, 1]]));
        assert_eq!(f.pow(7), f * f * f * f * f * f * f);
    }

    #[test]
    fn symmetry_is_exact() {
        let a = Matrix::new([[1.0, 0.3], [0.3 + 1e-16, 1.0]]);
        assert!(!a.is_symmetric());
        assert!(Matrix::new([[7]]).is_symmetric());
    }
}
