use crate::matrix::vector::ColumnVector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Model and fixed gain of a Luenberger observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverModel<T, const S: usize, const C: usize, const M: usize> {
    /// State transition `F` (S×S).
    pub state_transition: Matrix<T, S, S>,
    /// Control transition `B` (S×C).
    pub control_transition: Matrix<T, S, C>,
    /// Measurement transition `H` (M×S).
    pub measurement_transition: Matrix<T, M, S>,
    /// Observer gain `L` (S×M), chosen offline (e.g. by pole placement).
    pub state_gain: Matrix<T, S, M>,
}

/// Luenberger state observer.
///
/// Same recursion shape as [`Kalman`](super::Kalman), but the correction
/// weight is a constant gain supplied up front instead of being computed
/// from covariances each tick. No covariance is tracked and nothing is
/// inverted at runtime, so no operation can fail.
///
/// ```
/// use statekit::estimate::{ObserverModel, StateObserver};
/// use statekit::{ColumnVector, Matrix};
///
/// let model = ObserverModel {
///     state_transition: Matrix::new([[1.0_f64]]),
///     control_transition: Matrix::new([[0.0]]),
///     measurement_transition: Matrix::new([[1.0]]),
///     state_gain: Matrix::new([[0.5]]),
/// };
/// let mut obs = StateObserver::new(model, ColumnVector::from_column([0.0]));
/// let x = obs.step(&ColumnVector::from_column([0.0]), &ColumnVector::from_column([4.0]));
/// assert_eq!(x[(0, 0)], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateObserver<T, const S: usize, const C: usize, const M: usize> {
    model: ObserverModel<T, S, C, M>,
    state: ColumnVector<T, S>,
}

impl<T: FloatScalar, const S: usize, const C: usize, const M: usize> StateObserver<T, S, C, M> {
    /// Create an observer from its model and initial state.
    pub fn new(model: ObserverModel<T, S, C, M>, state: ColumnVector<T, S>) -> Self {
        Self { model, state }
    }

    /// Current state estimate.
    #[inline]
    pub fn state(&self) -> &ColumnVector<T, S> {
        &self.state
    }

    /// The model the observer was built with.
    #[inline]
    pub fn model(&self) -> &ObserverModel<T, S, C, M> {
        &self.model
    }

    /// Overwrite the state estimate.
    pub fn reset(&mut self, state: ColumnVector<T, S>) {
        self.state = state;
    }

    /// `x = F x + B u`.
    pub fn predict(&mut self, control: &ColumnVector<T, C>) {
        self.state =
            self.model.state_transition * self.state + self.model.control_transition * *control;
    }

    /// `x = x + L (z − H x)`.
    pub fn correct(&mut self, measurement: &ColumnVector<T, M>) {
        let innovation = *measurement - self.model.measurement_transition * self.state;
        self.state = self.state + self.model.state_gain * innovation;
    }

    /// Predict then correct; returns the new state estimate.
    pub fn step(
        &mut self,
        control: &ColumnVector<T, C>,
        measurement: &ColumnVector<T, M>,
    ) -> ColumnVector<T, S> {
        self.predict(control);
        self.correct(measurement);
        #[cfg(feature = "log")]
        log::trace!("observer step: state = {:?}", self.state);
        self.state
    }
}
