use core::ops::{Add, Mul, Neg, Sub};

use crate::linalg::LinalgError;
use crate::matrix::aliases::{ColumnVector3, Matrix3};
use crate::traits::FloatScalar;

/// Quaternion for 3D attitude, scalar-first `(w, x, y, z)`.
///
/// Unit quaternions represent rotations. Composition is the Hamilton
/// product: `(a * b)` rotates by `b` first, then by `a`, matching the
/// order of the equivalent rotation matrices `A · B`.
///
/// ```
/// use core::f64::consts::FRAC_PI_2;
/// use statekit::{ColumnVector, Quaternion};
///
/// let yaw = Quaternion::from_axis_angle(&ColumnVector::from_column([0.0, 0.0, 1.0]), FRAC_PI_2);
/// let v = yaw.rotate(&ColumnVector::from_column([1.0, 0.0, 0.0]));
/// assert!(v.approx_eq(&ColumnVector::from_column([0.0, 1.0, 0.0]), 1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: FloatScalar> Quaternion<T> {
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// No rotation: `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Rotation of `angle` radians about a unit `axis`.
    pub fn from_axis_angle(axis: &ColumnVector3<T>, angle: T) -> Self {
        let (s, c) = (angle / (T::one() + T::one())).sin_cos();
        Self::new(c, axis[(0, 0)] * s, axis[(1, 0)] * s, axis[(2, 0)] * s)
    }

    /// Unit quaternion of a proper rotation matrix.
    ///
    /// Branches on the largest of trace and diagonal entries (Shepperd) so
    /// the square root argument stays well away from zero.
    pub fn from_rotation_matrix(m: &Matrix3<T>) -> Self {
        let one = T::one();
        let half = one / (one + one);
        let quarter = half * half;
        let trace = m.trace();

        if trace > T::zero() {
            let s = (trace + one).sqrt();
            let k = half / s;
            Self::new(
                s * half,
                (m[(2, 1)] - m[(1, 2)]) * k,
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(1, 0)] - m[(0, 1)]) * k,
            )
        } else if m[(0, 0)] >= m[(1, 1)] && m[(0, 0)] >= m[(2, 2)] {
            let x = ((one + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]) * quarter).sqrt();
            let k = quarter / x;
            Self::new(
                (m[(2, 1)] - m[(1, 2)]) * k,
                x,
                (m[(0, 1)] + m[(1, 0)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
            )
        } else if m[(1, 1)] >= m[(2, 2)] {
            let y = ((one - m[(0, 0)] + m[(1, 1)] - m[(2, 2)]) * quarter).sqrt();
            let k = quarter / y;
            Self::new(
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(0, 1)] + m[(1, 0)]) * k,
                y,
                (m[(1, 2)] + m[(2, 1)]) * k,
            )
        } else {
            let z = ((one - m[(0, 0)] - m[(1, 1)] + m[(2, 2)]) * quarter).sqrt();
            let k = quarter / z;
            Self::new(
                (m[(1, 0)] - m[(0, 1)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
                (m[(1, 2)] + m[(2, 1)]) * k,
                z,
            )
        }
    }

    /// `(w, −x, −y, −z)`; the inverse rotation for unit quaternions.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Magnitude `sqrt(w² + x² + y² + z²)`.
    #[inline]
    pub fn norm(&self) -> T {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale to unit magnitude.
    ///
    /// Returns [`LinalgError::DivisionByZero`] for the zero quaternion.
    pub fn normalize(&self) -> Result<Self, LinalgError> {
        self.try_div(self.norm())
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    ///
    /// Returns [`LinalgError::DivisionByZero`] for the zero quaternion.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let n = self.norm();
        self.conjugate().try_div(n * n)
    }

    /// Divide every component by `rhs`.
    ///
    /// Returns [`LinalgError::DivisionByZero`] when `rhs` is zero.
    pub fn try_div(&self, rhs: T) -> Result<Self, LinalgError> {
        if rhs == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs))
    }

    /// Rotate `v` by this (unit) quaternion: `q v q*`.
    ///
    /// Expanded as `v + 2w (u × v) + 2 u × (u × v)` with `u = (x, y, z)`.
    pub fn rotate(&self, v: &ColumnVector3<T>) -> ColumnVector3<T> {
        let two = T::one() + T::one();
        let u = ColumnVector3::from_column([self.x, self.y, self.z]);
        let uv = u.cross(v);
        let uuv = u.cross(&uv);
        *v + uv * (two * self.w) + uuv * two
    }

    /// Equivalent 3×3 rotation matrix (for a unit quaternion).
    pub fn to_rotation_matrix(&self) -> Matrix3<T> {
        let one = T::one();
        let two = one + one;
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        Matrix3::new([
            [
                one - two * (y * y + z * z),
                two * (x * y - w * z),
                two * (x * z + w * y),
            ],
            [
                two * (x * y + w * z),
                one - two * (x * x + z * z),
                two * (y * z - w * x),
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                one - two * (x * x + y * y),
            ],
        ])
    }
}

// ── Operators ───────────────────────────────────────────────────────

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: FloatScalar> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

// Hamilton product
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}

impl<T: FloatScalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: FloatScalar> Mul<ColumnVector3<T>> for Quaternion<T> {
    type Output = ColumnVector3<T>;

    #[inline]
    fn mul(self, v: ColumnVector3<T>) -> ColumnVector3<T> {
        self.rotate(&v)
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};
    use std::format;

    const EPS: f64 = 1e-12;

    fn col(x: f64, y: f64, z: f64) -> ColumnVector3<f64> {
        ColumnVector3::from_column([x, y, z])
    }

    fn quat_near(a: &Quaternion<f64>, b: &Quaternion<f64>) -> bool {
        (a.w - b.w).abs() < EPS
            && (a.x - b.x).abs() < EPS
            && (a.y - b.y).abs() < EPS
            && (a.z - b.z).abs() < EPS
    }

    #[test]
    fn identity_is_neutral() {
        let q = Quaternion::new(0.5, -1.0, 2.0, 0.25);
        let id = Quaternion::identity();
        assert_eq!(q * id, q);
        assert_eq!(id * q, q);
        assert_eq!(id.rotate(&col(1.0, 2.0, 3.0)), col(1.0, 2.0, 3.0));
    }

    #[test]
    fn hamilton_basis() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);
        assert_eq!(i * i, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * j * k, minus_one);
    }

    #[test]
    fn hamilton_associative() {
        let a = Quaternion::new(1.0, 2.0, -1.0, 0.5);
        let b = Quaternion::new(-0.5, 0.0, 3.0, 1.0);
        let c = Quaternion::new(2.0, -1.0, 1.0, -2.0);
        assert!(quat_near(&((a * b) * c), &(a * (b * c))));
    }

    #[test]
    fn conjugate_and_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(1.0, -2.0, -3.0, -4.0));
        assert!(quat_near(&(q * q.inverse().unwrap()), &Quaternion::identity()));
        assert_eq!(
            Quaternion::new(0.0, 0.0, 0.0, 0.0).inverse(),
            Err(LinalgError::DivisionByZero)
        );
    }

    #[test]
    fn normalize() {
        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(q.norm(), 2.0);
        assert_eq!(q.normalize(), Ok(Quaternion::new(0.5, 0.5, 0.5, 0.5)));
        assert_eq!(
            Quaternion::<f64>::new(0.0, 0.0, 0.0, 0.0).normalize(),
            Err(LinalgError::DivisionByZero)
        );
    }

    #[test]
    fn scale_add_sub_divide() {
        let a = Quaternion::new(1.0, -2.0, 3.0, 0.5);
        let b = Quaternion::new(0.5, 1.0, -1.0, 2.0);
        assert_eq!(a + b, Quaternion::new(1.5, -1.0, 2.0, 2.5));
        assert_eq!(a - b, Quaternion::new(0.5, -3.0, 4.0, -1.5));
        assert_eq!(a * 2.0, Quaternion::new(2.0, -4.0, 6.0, 1.0));
        assert_eq!(a.try_div(2.0), Ok(Quaternion::new(0.5, -1.0, 1.5, 0.25)));
        assert_eq!(a.try_div(0.0), Err(LinalgError::DivisionByZero));
    }

    #[test]
    fn rotate_quarter_turns() {
        let z90 = Quaternion::from_axis_angle(&col(0.0, 0.0, 1.0), FRAC_PI_2);
        assert!(z90.rotate(&col(1.0, 0.0, 0.0)).approx_eq(&col(0.0, 1.0, 0.0), EPS));

        let x90 = Quaternion::from_axis_angle(&col(1.0, 0.0, 0.0), FRAC_PI_2);
        assert!((x90 * col(0.0, 1.0, 0.0)).approx_eq(&col(0.0, 0.0, 1.0), EPS));

        let y180 = Quaternion::from_axis_angle(&col(0.0, 1.0, 0.0), PI);
        assert!(y180.rotate(&col(1.0, 2.0, 3.0)).approx_eq(&col(-1.0, 2.0, -3.0), EPS));
    }

    #[test]
    fn rotation_preserves_length() {
        let axis = col(1.0, -2.0, 2.0).normalize().unwrap();
        let q = Quaternion::from_axis_angle(&axis, 0.7);
        let v = col(3.0, -1.0, 0.5);
        assert!((q.rotate(&v).norm() - v.norm()).abs() < EPS);
        // The axis itself is fixed
        assert!(q.rotate(&axis).approx_eq(&axis, EPS));
    }

    #[test]
    fn rotation_matrix_matches_rotate() {
        let axis = col(0.0, 3.0, 4.0).normalize().unwrap();
        let q = Quaternion::from_axis_angle(&axis, FRAC_PI_3);
        let r = q.to_rotation_matrix();
        let v = col(-1.0, 0.5, 2.0);
        assert!((r * v).approx_eq(&q.rotate(&v), EPS));

        // Orthonormal with unit determinant
        assert!((r * r.transpose()).approx_eq(&Matrix3::eye(), EPS));
        assert!((crate::linalg::determinant(&r) - 1.0).abs() < EPS);
    }

    #[test]
    fn composition_matches_matrix_product() {
        let a = Quaternion::from_axis_angle(&col(0.0, 0.0, 1.0), 0.4);
        let b = Quaternion::from_axis_angle(&col(1.0, 0.0, 0.0), -1.1);
        let composed = (a * b).to_rotation_matrix();
        let product = a.to_rotation_matrix() * b.to_rotation_matrix();
        assert!(composed.approx_eq(&product, EPS));

        let v = col(0.3, -0.7, 1.2);
        assert!((a * b).rotate(&v).approx_eq(&a.rotate(&b.rotate(&v)), EPS));
    }

    #[test]
    fn rotation_matrix_round_trip_all_branches() {
        let cases = [
            // trace > 0
            Quaternion::from_axis_angle(&col(0.0, 0.0, 1.0), 0.3),
            // 180° turns hit each diagonal branch
            Quaternion::from_axis_angle(&col(1.0, 0.0, 0.0), PI),
            Quaternion::from_axis_angle(&col(0.0, 1.0, 0.0), PI),
            Quaternion::from_axis_angle(&col(0.0, 0.0, 1.0), PI),
            Quaternion::from_axis_angle(&col(1.0, 1.0, 1.0).normalize().unwrap(), 2.5),
        ];
        for q in cases.iter() {
            let back = Quaternion::from_rotation_matrix(&q.to_rotation_matrix());
            // q and −q are the same rotation
            assert!(quat_near(&back, q) || quat_near(&back, &-*q), "{} vs {}", back, q);
        }
    }

    #[test]
    fn display() {
        let q = Quaternion::new(1.0, 2.0, -3.0, 0.5);
        assert_eq!(format!("{}", q), "(1 + 2i + -3j + 0.5k)");
    }
}
