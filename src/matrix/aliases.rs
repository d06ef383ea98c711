//! Type aliases for the small sizes typical of estimation and control models.

use crate::matrix::vector::ColumnVector;
use crate::Matrix;

// ── Square ─────────────────────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = Matrix<T, 1, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;
/// 5×5 matrix.
pub type Matrix5<T> = Matrix<T, 5, 5>;
/// 6×6 matrix.
pub type Matrix6<T> = Matrix<T, 6, 6>;

// ── Single-row gains (one input, N states) ─────────────────────────

/// 1×2 matrix.
pub type Matrix1x2<T> = Matrix<T, 1, 2>;
/// 1×3 matrix.
pub type Matrix1x3<T> = Matrix<T, 1, 3>;
/// 1×4 matrix.
pub type Matrix1x4<T> = Matrix<T, 1, 4>;

// ── Column vectors ─────────────────────────────────────────────────

/// 1-element column vector.
pub type ColumnVector1<T> = ColumnVector<T, 1>;
/// 2-element column vector.
pub type ColumnVector2<T> = ColumnVector<T, 2>;
/// 3-element column vector.
pub type ColumnVector3<T> = ColumnVector<T, 3>;
/// 4-element column vector.
pub type ColumnVector4<T> = ColumnVector<T, 4>;
/// 5-element column vector.
pub type ColumnVector5<T> = ColumnVector<T, 5>;
/// 6-element column vector.
pub type ColumnVector6<T> = ColumnVector<T, 6>;
