use num_traits::NumCast;

use crate::linalg::{Cofactor, LinalgError};
use crate::traits::FloatScalar;
use crate::Matrix;

/// Hadamard's bound: `|det(m)| ≤ Π_i ‖row_i‖₂`.
///
/// Scales the singularity tolerance of [`Matrix::inverse_with_tolerance`]
/// and [`Matrix::rank`] so it is relative to the magnitude of the matrix
/// rather than an absolute threshold on `det`. Only meaningful for square
/// shapes; callers check `R == C`.
pub(super) fn hadamard_bound<T: FloatScalar, const R: usize, const C: usize>(
    m: &Matrix<T, R, C>,
) -> T {
    let mut bound = T::one();
    for row in m.data.iter() {
        let mut sq = T::zero();
        for &x in row.iter() {
            sq = sq + x * x;
        }
        bound = bound * sq.sqrt();
    }
    bound
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N>
where
    Self: Cofactor<T>,
{
    /// Singularity tolerance used by [`Matrix::inverse`]: `N · ε`.
    pub fn default_tolerance() -> T {
        T::epsilon() * <T as NumCast>::from(N).unwrap_or_else(T::one)
    }

    /// Whether `|det| ≤ tol · hadamard_bound`.
    ///
    /// A tolerance of zero reduces to the exact `det == 0` test.
    pub fn is_singular(&self, tol: T) -> bool {
        self.determinant().abs() <= tol * hadamard_bound(self)
    }

    /// Inverse via `adjugate · (1 / det)` with the default tolerance.
    ///
    /// ```
    /// use statekit::Matrix;
    ///
    /// let a = Matrix::new([[2.0_f64, 1.0], [5.0, 3.0]]);
    /// let inv = a.inverse().unwrap();
    /// assert!(inv.approx_eq(&Matrix::new([[3.0, -1.0], [-5.0, 2.0]]), 1e-12));
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.inverse_with_tolerance(Self::default_tolerance())
    }

    /// Inverse via `adjugate · (1 / det)`.
    ///
    /// Returns [`LinalgError::SingularMatrix`] when `|det| ≤ tol` relative to
    /// the Hadamard bound of the matrix. Pass `T::zero()` for the exact test.
    pub fn inverse_with_tolerance(&self, tol: T) -> Result<Self, LinalgError> {
        let det = self.determinant();
        if det.abs() <= tol * hadamard_bound(self) {
            return Err(LinalgError::SingularMatrix);
        }
        Ok(self.adjugate()? * (T::one() / det))
    }
}

impl<T: FloatScalar, const R: usize, const N: usize> Matrix<T, R, N> {
    /// Right division `self · rhs⁻¹`.
    ///
    /// Propagates [`LinalgError::SingularMatrix`] from the inverse.
    ///
    /// ```
    /// use statekit::Matrix;
    ///
    /// let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::new([[2.0, 0.0], [0.0, 4.0]]);
    /// let q = a.right_divide(&b).unwrap();
    /// assert!((q * b).approx_eq(&a, 1e-12));
    /// ```
    pub fn right_divide(&self, rhs: &Matrix<T, N, N>) -> Result<Self, LinalgError>
    where
        Matrix<T, N, N>: Cofactor<T>,
    {
        Ok(*self * rhs.inverse()?)
    }
}
