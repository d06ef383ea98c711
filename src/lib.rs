//! # statekit
//!
//! Fixed-dimension matrix algebra and discrete-time state estimation for
//! embedded control loops. No heap allocation; `no_std` with the `std`
//! feature turned off.
//!
//! ## Quick start
//!
//! ```
//! use statekit::control::StateRegulator;
//! use statekit::estimate::{Kalman, KalmanModel};
//! use statekit::{ColumnVector, Matrix};
//!
//! // Track a constant level from noisy readings, then regulate it to zero
//! let model = KalmanModel {
//!     state_transition: Matrix::new([[1.0_f64]]),
//!     control_transition: Matrix::new([[1.0]]),
//!     measurement_transition: Matrix::new([[1.0]]),
//!     process_noise: Matrix::new([[1e-4]]),
//!     measurement_noise: Matrix::new([[0.04]]),
//! };
//! let mut kf = Kalman::new(model, ColumnVector::zeros(), Matrix::new([[1.0]]));
//! let reg = StateRegulator::new(Matrix::new([[0.5]]));
//!
//! let mut u = ColumnVector::zeros();
//! for z in [2.1, 1.9, 2.0, 2.2, 1.8] {
//!     let x = kf.step(&u, &ColumnVector::from_column([z]))?;
//!     u = reg.compute(&ColumnVector::zeros(), &x);
//! }
//! # Ok::<(), statekit::LinalgError>(())
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — `Matrix<T, R, C>` with const-generic dimensions, row-major
//!   `[[T; C]; R]` storage, `Copy` value semantics. Arithmetic operators,
//!   checked element access, transpose, and the usual constructors.
//!   [`Vector<T, N>`] and [`ColumnVector<T, N>`] are 1-row and 1-column
//!   aliases.
//!
//! - [`linalg`] — Minors, determinants, cofactor and adjugate matrices, the
//!   inverse with a scale-relative singularity test, a coarse rank, and the
//!   Cholesky factorization. Errors are reported as [`LinalgError`].
//!
//! - [`estimate`] — Linear [`Kalman`](estimate::Kalman) filter and
//!   Luenberger [`StateObserver`](estimate::StateObserver).
//!
//! - [`control`] — Full-state feedback
//!   [`StateRegulator`](control::StateRegulator).
//!
//! - [`quaternion`] — [`Quaternion`] attitude with Hamilton product, vector
//!   rotation, and conversion to and from 3×3 rotation matrices.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by inversion and the estimators
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` for [`LinalgError`] |
//! | `libm`  | baseline | Pure-Rust software float fallback |
//! | `log`   | no       | `log` facade records for singular corrections and filter ticks |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod control;
pub mod estimate;
pub mod linalg;
pub mod matrix;
pub mod quaternion;
pub mod traits;

pub use matrix::aliases::{
    ColumnVector1, ColumnVector2, ColumnVector3, ColumnVector4, ColumnVector5, ColumnVector6,
    Matrix1, Matrix1x2, Matrix1x3, Matrix1x4, Matrix2, Matrix3, Matrix4, Matrix5, Matrix6,
};
pub use matrix::vector::{ColumnVector, Vector};
pub use matrix::Matrix;

pub use control::StateRegulator;
pub use estimate::{Kalman, KalmanModel, ObserverModel, StateObserver};
pub use linalg::{Cofactor, LinalgError};
pub use quaternion::Quaternion;
pub use traits::{FloatScalar, Scalar};
