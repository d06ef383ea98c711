use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

/// A row vector (1×N matrix).
///
/// Supports single-index access (`v[i]`) and dot products.
/// The estimators work on [`ColumnVector`]s; use `.transpose()` to convert.
///
/// ```
/// use statekit::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v), 25.0);
/// ```
pub type Vector<T, const N: usize> = Matrix<T, 1, N>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a row vector from a 1D array.
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::new([data])
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[0][i] * rhs.data[0][i];
        }
        sum
    }
}

// Single-index access: v[i] instead of v[(0, i)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[0][i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[0][i]
    }
}

// ── Column vector ───────────────────────────────────────────────────

/// A column vector (N×1 matrix).
///
/// States, controls and measurements are column vectors, so the model
/// equations read exactly as written: `(S×S) * (S×1) → (S×1)`.
/// Single-element access uses `cv[(i, 0)]`.
pub type ColumnVector<T, const N: usize> = Matrix<T, N, 1>;

impl<T: Scalar, const N: usize> ColumnVector<T, N> {
    /// Create a column vector from a 1D array.
    ///
    /// ```
    /// use statekit::ColumnVector;
    /// let cv = ColumnVector::from_column([1.0, 2.0, 3.0]);
    /// assert_eq!(cv[(0, 0)], 1.0);
    /// assert_eq!(cv[(2, 0)], 3.0);
    /// ```
    #[inline]
    pub fn from_column(data: [T; N]) -> Self {
        Self::new(data.map(|x| [x]))
    }

    /// Copy the column out into a 1D array.
    #[inline]
    pub fn to_column(&self) -> [T; N] {
        core::array::from_fn(|i| self.data[i][0])
    }
}

impl<T: FloatScalar, const N: usize> ColumnVector<T, N> {
    /// Euclidean length.
    #[inline]
    pub fn norm(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i][0] * self.data[i][0];
        }
        sum.sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Returns [`LinalgError::DivisionByZero`] for the zero vector.
    ///
    /// ```
    /// use statekit::ColumnVector;
    /// let v = ColumnVector::from_column([3.0_f64, 0.0, 4.0]);
    /// assert_eq!(v.norm(), 5.0);
    /// assert_eq!(v.normalize().unwrap().to_column(), [0.6, 0.0, 0.8]);
    /// ```
    pub fn normalize(&self) -> Result<Self, LinalgError> {
        self.try_div(self.norm())
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).norm()
    }
}

// ── 3-vectors ───────────────────────────────────────────────────────

impl<T: Scalar> ColumnVector<T, 3> {
    /// Cross product `self × rhs`.
    pub fn cross(&self, rhs: &Self) -> Self {
        let a = &self.data;
        let b = &rhs.data;
        Self::from_column([
            a[1][0] * b[2][0] - a[2][0] * b[1][0],
            a[2][0] * b[0][0] - a[0][0] * b[2][0],
            a[0][0] * b[1][0] - a[1][0] * b[0][0],
        ])
    }
}
