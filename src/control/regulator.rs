use crate::matrix::vector::ColumnVector;
use crate::traits::Scalar;
use crate::Matrix;

/// Full-state feedback regulator.
///
/// Holds a fixed gain `K` (I×S) and turns a reference input and a state
/// estimate into the next control input, `u = r − K x`. The gain is usually
/// designed offline (LQR, pole placement) and the state comes from a
/// [`Kalman`](crate::estimate::Kalman) filter or
/// [`StateObserver`](crate::estimate::StateObserver).
///
/// # Example
///
/// ```
/// use statekit::control::StateRegulator;
/// use statekit::{ColumnVector, Matrix};
///
/// let reg = StateRegulator::new(Matrix::new([[3.0_f64]]));
/// let u = reg.compute(&ColumnVector::from_column([10.0]), &ColumnVector::from_column([2.0]));
/// assert_eq!(u[(0, 0)], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRegulator<T, const S: usize, const I: usize> {
    state_gain: Matrix<T, I, S>,
}

impl<T: Scalar, const S: usize, const I: usize> StateRegulator<T, S, I> {
    /// Create a regulator with feedback gain `K` (I×S).
    pub fn new(state_gain: Matrix<T, I, S>) -> Self {
        Self { state_gain }
    }

    /// Feedback gain `K`.
    #[inline]
    pub fn gain(&self) -> &Matrix<T, I, S> {
        &self.state_gain
    }

    /// `u = input − K · state`.
    #[inline]
    pub fn compute(&self, input: &ColumnVector<T, I>, state: &ColumnVector<T, S>) -> ColumnVector<T, I> {
        *input - self.state_gain * *state
    }
}
