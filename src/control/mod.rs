//! State-feedback control.
//!
//! [`StateRegulator`] closes the loop around an estimator from
//! [`estimate`](crate::estimate): each tick the filter produces a state
//! estimate and the regulator maps it to the next control input.
//!
//! ```
//! use statekit::control::StateRegulator;
//! use statekit::{ColumnVector, Matrix};
//!
//! // Two inputs driven from a three-element state
//! let reg = StateRegulator::new(Matrix::new([
//!     [1.0_f64, 0.0, 0.5],
//!     [0.0, 2.0, 0.0],
//! ]));
//! let u = reg.compute(
//!     &ColumnVector::from_column([1.0, 1.0]),
//!     &ColumnVector::from_column([0.2, 0.1, 0.4]),
//! );
//! assert_eq!(u.to_column(), [0.6, 0.8]);
//! ```

mod regulator;

#[cfg(test)]
mod tests;

pub use regulator::StateRegulator;
