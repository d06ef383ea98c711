//! Square-matrix algebra: minors, determinants, cofactor matrices, adjugates,
//! inverses, a coarse rank, and the Cholesky triangular factorization.
//!
//! The cofactor family lives on the [`Cofactor`] trait, implemented for every
//! square size from 1×1 to 10×10. Everything else is available both as a
//! method on [`Matrix`] and as a free function in this module.
//!
//! ```
//! use statekit::Matrix;
//! use statekit::linalg::{self, Cofactor, LinalgError};
//!
//! let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
//! assert_eq!(a.determinant(), 10.0);
//!
//! let inv = linalg::inverse(&a).unwrap();
//! assert!((a * inv).approx_eq(&Matrix::eye(), 1e-12));
//!
//! let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
//! assert_eq!(singular.inverse(), Err(LinalgError::SingularMatrix));
//! ```

mod cholesky;
mod cofactor;
mod inverse;
mod rank;

pub use cofactor::Cofactor;

use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

/// Errors from matrix operations.
///
/// Every failure is local to the operation that produced it; estimators
/// propagate these unchanged to their caller.
///
/// ```
/// use statekit::Matrix;
/// use statekit::linalg::LinalgError;
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::SingularMatrix);
///
/// let not_pd = Matrix::new([[1.0_f64, 5.0], [5.0, 1.0]]);
/// assert_eq!(not_pd.lower_triangular().unwrap_err(), LinalgError::NotPositiveDefinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Row or column index is not below the matrix dimension.
    OutOfRange,
    /// Scalar division by zero.
    DivisionByZero,
    /// Determinant is zero, or within tolerance of zero.
    SingularMatrix,
    /// Matrix is not symmetric positive definite (required for Cholesky).
    NotPositiveDefinite,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::OutOfRange => write!(f, "index out of range"),
            LinalgError::DivisionByZero => write!(f, "division by zero"),
            LinalgError::SingularMatrix => write!(f, "matrix is singular"),
            LinalgError::NotPositiveDefinite => write!(f, "matrix is not positive definite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

// ── Free-function interface ─────────────────────────────────────────

/// `N×N` identity matrix.
#[inline]
pub fn identity<T: Scalar, const N: usize>() -> Matrix<T, N, N> {
    Matrix::eye()
}

/// Remove `row` and `col` from a square matrix. See [`Cofactor::minor`].
#[inline]
pub fn minor<T: Scalar, const N: usize>(
    m: &Matrix<T, N, N>,
    row: usize,
    col: usize,
) -> Result<<Matrix<T, N, N> as Cofactor<T>>::Minor, LinalgError>
where
    Matrix<T, N, N>: Cofactor<T>,
{
    m.minor(row, col)
}

/// Determinant by cofactor expansion. See [`Cofactor::determinant`].
#[inline]
pub fn determinant<T: Scalar, const N: usize>(m: &Matrix<T, N, N>) -> T
where
    Matrix<T, N, N>: Cofactor<T>,
{
    m.determinant()
}

/// Cofactor (complement) matrix.
#[inline]
pub fn complement<T: Scalar, const N: usize>(
    m: &Matrix<T, N, N>,
) -> Result<Matrix<T, N, N>, LinalgError>
where
    Matrix<T, N, N>: Cofactor<T>,
{
    m.complement()
}

/// Adjugate: transpose of the cofactor matrix.
#[inline]
pub fn adjugate<T: Scalar, const N: usize>(
    m: &Matrix<T, N, N>,
) -> Result<Matrix<T, N, N>, LinalgError>
where
    Matrix<T, N, N>: Cofactor<T>,
{
    m.adjugate()
}

/// Inverse with the default singularity tolerance.
#[inline]
pub fn inverse<T: FloatScalar, const N: usize>(
    m: &Matrix<T, N, N>,
) -> Result<Matrix<T, N, N>, LinalgError>
where
    Matrix<T, N, N>: Cofactor<T>,
{
    m.inverse()
}

/// Inverse with a caller-supplied singularity tolerance.
#[inline]
pub fn inverse_with_tolerance<T: FloatScalar, const N: usize>(
    m: &Matrix<T, N, N>,
    tol: T,
) -> Result<Matrix<T, N, N>, LinalgError>
where
    Matrix<T, N, N>: Cofactor<T>,
{
    m.inverse_with_tolerance(tol)
}

/// Lower-triangular Cholesky factor `L` with `L·Lᵀ = m`.
#[inline]
pub fn lower_triangular<T: FloatScalar, const N: usize>(
    m: &Matrix<T, N, N>,
) -> Result<Matrix<T, N, N>, LinalgError> {
    m.lower_triangular()
}

/// Upper-triangular Cholesky factor `U = Lᵀ` with `Uᵀ·U = m`.
#[inline]
pub fn upper_triangular<T: FloatScalar, const N: usize>(
    m: &Matrix<T, N, N>,
) -> Result<Matrix<T, N, N>, LinalgError> {
    m.upper_triangular()
}

/// Coarse rank estimate. See [`Matrix::rank`].
#[inline]
pub fn rank<T: FloatScalar, const R: usize, const C: usize>(m: &Matrix<T, R, C>, tol: T) -> usize {
    m.rank(tol)
}
