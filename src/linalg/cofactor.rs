use crate::linalg::LinalgError;
use crate::traits::Scalar;
use crate::Matrix;

/// Minors and determinants of fixed-size square matrices.
///
/// Stable const generics cannot name `Matrix<T, N - 1, N - 1>`, so the
/// minor's type is an associated type and the trait is implemented for each
/// square size from 1×1 to 10×10.
///
/// The determinant uses first-row cofactor expansion, which costs `O(N!)`.
/// That is fine for the state dimensions of embedded control loops (≤ 6–8);
/// do not use this path for larger systems.
///
/// ```
/// use statekit::Matrix;
/// use statekit::linalg::Cofactor;
///
/// let m = Matrix::new([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
/// assert_eq!(m.determinant(), -306.0);
/// assert_eq!(m.minor(0, 0).unwrap(), Matrix::new([[-2.0, 5.0], [8.0, 7.0]]));
/// ```
pub trait Cofactor<T: Scalar>: Sized {
    /// The `(N-1)×(N-1)` matrix left after striking one row and column.
    /// For `N == 1` this is the 1×1 matrix itself.
    type Minor: Cofactor<T>;

    /// Remove `row` and `col`.
    ///
    /// Returns [`LinalgError::OutOfRange`] if `row >= N` or `col >= N`.
    /// For a 1×1 matrix the input is returned unchanged.
    fn minor(&self, row: usize, col: usize) -> Result<Self::Minor, LinalgError>;

    /// Determinant: the element itself for 1×1, `ad − bc` for 2×2, and
    /// first-row cofactor expansion `Σ (−1)^i · m[0,i] · det(minor(0,i))`
    /// above that.
    fn determinant(&self) -> T;
}

/// Copy `m` without row `row` and column `col` into a `K×K` matrix.
///
/// Callers guarantee `K + 1 == N` and that `row`, `col` are in range.
fn strike<T: Scalar, const N: usize, const K: usize>(
    m: &Matrix<T, N, N>,
    row: usize,
    col: usize,
) -> Matrix<T, K, K> {
    debug_assert_eq!(K + 1, N);
    let mut out = Matrix::<T, K, K>::zeros();
    let mut r = 0;
    for i in (0..N).filter(|&i| i != row) {
        let mut c = 0;
        for j in (0..N).filter(|&j| j != col) {
            out.data[r][c] = m.data[i][j];
            c += 1;
        }
        r += 1;
    }
    out
}

impl<T: Scalar> Cofactor<T> for Matrix<T, 1, 1> {
    type Minor = Self;

    #[inline]
    fn minor(&self, row: usize, col: usize) -> Result<Self, LinalgError> {
        if row >= 1 || col >= 1 {
            return Err(LinalgError::OutOfRange);
        }
        Ok(*self)
    }

    #[inline]
    fn determinant(&self) -> T {
        self.data[0][0]
    }
}

macro_rules! impl_cofactor {
    ($($n:literal => $k:literal),* $(,)?) => {
        $(
            impl<T: Scalar> Cofactor<T> for Matrix<T, $n, $n> {
                type Minor = Matrix<T, $k, $k>;

                #[inline]
                fn minor(&self, row: usize, col: usize) -> Result<Self::Minor, LinalgError> {
                    if row >= $n || col >= $n {
                        return Err(LinalgError::OutOfRange);
                    }
                    Ok(strike(self, row, col))
                }

                fn determinant(&self) -> T {
                    let d = &self.data;
                    if $n == 2 {
                        return d[0][0] * d[1][1] - d[1][0] * d[0][1];
                    }
                    let mut det = T::zero();
                    for i in 0..$n {
                        let term = d[0][i] * strike::<T, $n, $k>(self, 0, i).determinant();
                        det = if i % 2 == 0 { det + term } else { det - term };
                    }
                    det
                }
            }
        )*
    };
}

impl_cofactor!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7, 9 => 8, 10 => 9);

impl<T: Scalar, const N: usize> Matrix<T, N, N>
where
    Self: Cofactor<T>,
{
    /// Signed minor `(−1)^(row+col) · det(minor(row, col))`.
    ///
    /// The cofactor of a 1×1 matrix is 1 (the determinant of the empty
    /// matrix), which keeps `adjugate · (1/det)` a correct inverse there.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T, LinalgError> {
        let minor = self.minor(row, col)?;
        if N == 1 {
            return Ok(T::one());
        }
        let det = minor.determinant();
        Ok(if (row + col) % 2 == 0 { det } else { T::zero() - det })
    }

    /// Cofactor (complement) matrix: entry `(i, j)` is [`Matrix::cofactor`].
    pub fn complement(&self) -> Result<Self, LinalgError> {
        let mut out = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                out.data[i][j] = self.cofactor(i, j)?;
            }
        }
        Ok(out)
    }

    /// Adjugate: transpose of the complement.
    pub fn adjugate(&self) -> Result<Self, LinalgError> {
        Ok(self.complement()?.transpose())
    }
}
