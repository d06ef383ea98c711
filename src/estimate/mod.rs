//! State estimation: linear Kalman filter and Luenberger observer.
//!
//! Both estimators use const-generic state (`S`), control (`C`) and
//! measurement (`M`) dimensions, keep their model matrices fixed for their
//! whole lifetime, and only mutate the state estimate (plus covariance, for
//! the Kalman filter). Everything is stack-allocated and no-std compatible.
//!
//! Neither type synchronizes internally: `predict`/`correct` take `&mut self`,
//! so an instance shared between an interrupt handler and a main loop has to
//! sit behind the caller's critical section.
//!
//! # Kalman filter
//!
//! ```
//! use statekit::estimate::{Kalman, KalmanModel};
//! use statekit::{ColumnVector, Matrix};
//!
//! // 1-D constant value observed directly
//! let model = KalmanModel {
//!     state_transition: Matrix::new([[1.0_f64]]),
//!     control_transition: Matrix::new([[0.0]]),
//!     measurement_transition: Matrix::new([[1.0]]),
//!     process_noise: Matrix::new([[0.001]]),
//!     measurement_noise: Matrix::new([[0.1]]),
//! };
//! let mut kf = Kalman::new(model, ColumnVector::from_column([0.0]), Matrix::new([[1.0]]));
//!
//! let u = ColumnVector::from_column([0.0]);
//! for _ in 0..50 {
//!     kf.step(&u, &ColumnVector::from_column([5.0])).unwrap();
//! }
//! assert!((kf.state()[(0, 0)] - 5.0).abs() < 0.01);
//! ```
//!
//! # Observer
//!
//! ```
//! use statekit::estimate::{ObserverModel, StateObserver};
//! use statekit::{ColumnVector, Matrix};
//!
//! let model = ObserverModel {
//!     state_transition: Matrix::new([[1.0_f64, 0.1], [0.0, 1.0]]),
//!     control_transition: Matrix::new([[0.0], [0.1]]),
//!     measurement_transition: Matrix::new([[1.0, 0.0]]),
//!     state_gain: Matrix::new([[0.6], [0.9]]),
//! };
//! let mut obs = StateObserver::new(model, ColumnVector::zeros());
//! obs.predict(&ColumnVector::from_column([1.0]));
//! obs.correct(&ColumnVector::from_column([0.02]));
//! ```

mod kalman;
mod observer;


pub use kalman::{CovarianceUpdate, Kalman, KalmanModel};
pub use observer::{ObserverModel, StateObserver};
