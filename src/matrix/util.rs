use core::fmt::{self, Write as _};

use crate::matrix::vector::{ColumnVector, Vector};
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use statekit::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|i| core::array::from_fn(|j| f(i, j))),
        }
    }

    /// Apply a function to every element, producing a new matrix.
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U, R, C>
    where
        T: Copy,
    {
        Matrix {
            data: core::array::from_fn(|i| core::array::from_fn(|j| f(self.data[i][j]))),
        }
    }
}

// ── Row / column access ─────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Copy row `i` out as a row vector.
    pub fn row(&self, i: usize) -> Vector<T, C> {
        Vector::from_array(self.data[i])
    }

    /// Copy column `j` out as a column vector.
    pub fn col(&self, j: usize) -> ColumnVector<T, R> {
        ColumnVector::from_column(core::array::from_fn(|i| self.data[i][j]))
    }
}

// ── Tolerance comparison ────────────────────────────────────────────

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Largest element-wise absolute difference between two matrices.
    pub fn max_abs_diff(&self, rhs: &Self) -> T {
        let mut max = T::zero();
        for i in 0..R {
            for j in 0..C {
                let d = (self.data[i][j] - rhs.data[i][j]).abs();
                if d > max {
                    max = d;
                }
            }
        }
        max
    }

    /// Whether every element differs from `rhs` by at most `tol`.
    ///
    /// ```
    /// use statekit::Matrix;
    /// let a = Matrix::new([[1.0, 2.0]]);
    /// let b = Matrix::new([[1.0 + 1e-12, 2.0]]);
    /// assert!(a.approx_eq(&b, 1e-9));
    /// assert!(!a.approx_eq(&b, 1e-15));
    /// ```
    pub fn approx_eq(&self, rhs: &Self, tol: T) -> bool {
        self.max_abs_diff(rhs) <= tol
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Right-align each column to its widest entry
        let mut widths = [0usize; C];
        for row in self.data.iter() {
            for (j, x) in row.iter().enumerate() {
                let w = WriteCounting::count(|wc| write!(wc, "{}", x));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for (i, row) in self.data.iter().enumerate() {
            write!(f, "│")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", x, width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < R {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Counts characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
