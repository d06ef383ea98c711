use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::linalg::LinalgError;
use crate::traits::Scalar;
use crate::Matrix;

// ── Element-wise sum ────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, &y) in row.iter_mut().zip(rhs_row.iter()) {
                *x = *x + y;
            }
        }
    }
}

// ── Element-wise difference ─────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, &y) in row.iter_mut().zip(rhs_row.iter()) {
                *x = *x - y;
            }
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zeros() - self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        (*self).neg()
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: &Matrix<T, R, C>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: &Matrix<T, R, C>) {
        self.sub_assign(*rhs);
    }
}

// ── Product: (R×K) * (K×P) → (R×P) ─────────────────────────────────

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<Matrix<T, K, P>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, P>;

    fn mul(self, rhs: Matrix<T, K, P>) -> Matrix<T, R, P> {
        let mut out = Matrix::<T, R, P>::zeros();
        for i in 0..R {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..K {
                    sum = sum + self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }
        out
    }
}

// ── Scale: matrix * scalar ──────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = *x * rhs;
            }
        }
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for the product ──────────────────────────────

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<Matrix<T, K, P>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, P>;
    fn mul(self, rhs: Matrix<T, K, P>) -> Matrix<T, R, P> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<&Matrix<T, K, P>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, P>;
    fn mul(self, rhs: &Matrix<T, K, P>) -> Matrix<T, R, P> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<&Matrix<T, K, P>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, P>;
    fn mul(self, rhs: &Matrix<T, K, P>) -> Matrix<T, R, P> {
        (*self).mul(*rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: T) -> Matrix<T, R, C> {
        (*self).mul(rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }

            impl<const R: usize, const C: usize> Mul<&Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Scalar division ─────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Divide every element by `rhs`.
    ///
    /// Returns [`LinalgError::DivisionByZero`] when `rhs` is zero. There is
    /// deliberately no `Div<T>` operator: division has a failure path and
    /// operators cannot report it.
    ///
    /// ```
    /// use statekit::Matrix;
    /// use statekit::linalg::LinalgError;
    ///
    /// let m = Matrix::new([[2.0, 4.0], [6.0, 8.0]]);
    /// assert_eq!(m.try_div(2.0), Ok(Matrix::new([[1.0, 2.0], [3.0, 4.0]])));
    /// assert_eq!(m.try_div(0.0), Err(LinalgError::DivisionByZero));
    /// ```
    pub fn try_div(&self, rhs: T) -> Result<Self, LinalgError> {
        if rhs == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        let mut out = *self;
        for row in out.data.iter_mut() {
            for x in row.iter_mut() {
                *x = *x / rhs;
            }
        }
        Ok(out)
    }
}

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Transpose: (R×C) → (C×R).
    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::zeros();
        for i in 0..R {
            for j in 0..C {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }
}
