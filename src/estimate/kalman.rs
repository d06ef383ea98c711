use crate::linalg::{Cofactor, LinalgError};
use crate::matrix::vector::ColumnVector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Linear model of a discrete-time system, fixed at construction.
///
/// `S` states, `C` control inputs, `M` measurements:
///
/// - `x_{k+1} = F x_k + B u_k + w`, `w ~ N(0, Q)`
/// - `z_k = H x_k + v`, `v ~ N(0, R)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalmanModel<T, const S: usize, const C: usize, const M: usize> {
    /// State transition `F` (S×S).
    pub state_transition: Matrix<T, S, S>,
    /// Control transition `B` (S×C).
    pub control_transition: Matrix<T, S, C>,
    /// Measurement transition `H` (M×S).
    pub measurement_transition: Matrix<T, M, S>,
    /// Process noise covariance `Q` (S×S).
    pub process_noise: Matrix<T, S, S>,
    /// Measurement noise covariance `R` (M×M).
    pub measurement_noise: Matrix<T, M, M>,
}

/// Form of the posterior covariance update in [`Kalman::correct`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CovarianceUpdate {
    /// `P = (I − K H) P`.
    #[default]
    Simple,
    /// Joseph form `P = (I − K H) P (I − K H)ᵀ + K R Kᵀ`.
    ///
    /// Costs two extra products but keeps `P` symmetric positive
    /// semi-definite under rounding.
    Joseph,
}

/// Discrete linear Kalman filter with const-generic dimensions.
///
/// `S` is the state dimension, `C` the control dimension, `M` the
/// measurement dimension. The model matrices are read-only after
/// construction; only the state estimate and its covariance evolve.
///
/// All operations are stack-allocated — no heap, fully no-std compatible.
/// Callers must run [`predict`](Self::predict) before
/// [`correct`](Self::correct) on each tick (or use [`step`](Self::step));
/// the filter does not enforce the order.
///
/// # Example
///
/// ```
/// use statekit::estimate::{Kalman, KalmanModel};
/// use statekit::{ColumnVector, Matrix};
///
/// // Constant-velocity model: state = [position, velocity]
/// let dt = 0.1;
/// let model = KalmanModel {
///     state_transition: Matrix::new([[1.0_f64, dt], [0.0, 1.0]]),
///     control_transition: Matrix::new([[0.5 * dt * dt], [dt]]),
///     measurement_transition: Matrix::new([[1.0, 0.0]]),
///     process_noise: Matrix::new([[0.01, 0.0], [0.0, 0.01]]),
///     measurement_noise: Matrix::new([[0.5]]),
/// };
/// let mut kf = Kalman::new(model, ColumnVector::from_column([0.0, 1.0]), Matrix::eye());
///
/// let accel = ColumnVector::from_column([0.0]);
/// let position = ColumnVector::from_column([0.12]);
/// let x = kf.step(&accel, &position).unwrap();
/// assert!(x[(0, 0)] > 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct Kalman<T, const S: usize, const C: usize, const M: usize> {
    model: KalmanModel<T, S, C, M>,
    state: ColumnVector<T, S>,
    state_covariance: Matrix<T, S, S>,
    innovation: ColumnVector<T, M>,
    gain: Matrix<T, S, M>,
    tolerance: Option<T>,
    covariance_update: CovarianceUpdate,
}

impl<T: FloatScalar, const S: usize, const C: usize, const M: usize> Kalman<T, S, C, M> {
    /// Create a filter from its model, initial state and initial covariance.
    pub fn new(
        model: KalmanModel<T, S, C, M>,
        state: ColumnVector<T, S>,
        state_covariance: Matrix<T, S, S>,
    ) -> Self {
        Self {
            model,
            state,
            state_covariance,
            innovation: ColumnVector::zeros(),
            gain: Matrix::zeros(),
            tolerance: None,
            covariance_update: CovarianceUpdate::Simple,
        }
    }

    /// Singularity tolerance for inverting the residual covariance.
    ///
    /// Defaults to [`Matrix::default_tolerance`]; zero gives the exact test.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Choose the posterior covariance update form.
    pub fn with_covariance_update(mut self, update: CovarianceUpdate) -> Self {
        self.covariance_update = update;
        self
    }

    /// Current state estimate.
    #[inline]
    pub fn state(&self) -> &ColumnVector<T, S> {
        &self.state
    }

    /// Current state covariance.
    #[inline]
    pub fn covariance(&self) -> &Matrix<T, S, S> {
        &self.state_covariance
    }

    /// The model the filter was built with.
    #[inline]
    pub fn model(&self) -> &KalmanModel<T, S, C, M> {
        &self.model
    }

    /// Innovation `z − H x` of the last successful correction.
    #[inline]
    pub fn innovation(&self) -> &ColumnVector<T, M> {
        &self.innovation
    }

    /// Kalman gain of the last successful correction.
    #[inline]
    pub fn gain(&self) -> &Matrix<T, S, M> {
        &self.gain
    }

    /// Replace the state estimate and covariance, e.g. after a divergence.
    pub fn reset(&mut self, state: ColumnVector<T, S>, state_covariance: Matrix<T, S, S>) {
        self.state = state;
        self.state_covariance = state_covariance;
        self.innovation = ColumnVector::zeros();
        self.gain = Matrix::zeros();
    }

    /// Time update.
    ///
    /// `x = F x + B u`, `P = F P Fᵀ + Q`. Cannot fail.
    pub fn predict(&mut self, control: &ColumnVector<T, C>) {
        let f = self.model.state_transition;
        self.state = f * self.state + self.model.control_transition * *control;
        self.state_covariance = f * self.state_covariance * f.transpose() + self.model.process_noise;
    }
}

impl<T: FloatScalar, const S: usize, const C: usize, const M: usize> Kalman<T, S, C, M>
where
    Matrix<T, M, M>: Cofactor<T>,
{
    /// Measurement update.
    ///
    /// - innovation `y = z − H x`
    /// - residual covariance `S = H P Hᵀ + R`
    /// - gain `K = P Hᵀ S⁻¹`
    /// - `x = x + K y`, `P = (I − K H) P` (or Joseph form)
    ///
    /// Returns [`LinalgError::SingularMatrix`] when `S` is singular. The
    /// filter is left exactly as it was; whether to hold the prior, reset or
    /// stop is up to the caller.
    pub fn correct(&mut self, measurement: &ColumnVector<T, M>) -> Result<(), LinalgError> {
        let h = self.model.measurement_transition;
        let h_t = h.transpose();

        let innovation = *measurement - h * self.state;
        let residual_covariance = h * self.state_covariance * h_t + self.model.measurement_noise;

        let tolerance = self.tolerance.unwrap_or_else(Matrix::<T, M, M>::default_tolerance);
        let residual_inv = residual_covariance
            .inverse_with_tolerance(tolerance)
            .map_err(|e| {
                #[cfg(feature = "log")]
                log::warn!("kalman correct: residual covariance is {}, keeping prior", e);
                e
            })?;

        let gain = self.state_covariance * h_t * residual_inv;
        self.state = self.state + gain * innovation;

        let i_kh = Matrix::<T, S, S>::eye() - gain * h;
        self.state_covariance = match self.covariance_update {
            CovarianceUpdate::Simple => i_kh * self.state_covariance,
            CovarianceUpdate::Joseph => {
                i_kh * self.state_covariance * i_kh.transpose()
                    + gain * self.model.measurement_noise * gain.transpose()
            }
        };

        self.innovation = innovation;
        self.gain = gain;
        Ok(())
    }

    /// One control-loop tick: [`predict`](Self::predict) then
    /// [`correct`](Self::correct). Returns the new state estimate.
    ///
    /// If the correction fails the predicted state is kept and the error is
    /// returned unchanged.
    pub fn step(
        &mut self,
        control: &ColumnVector<T, C>,
        measurement: &ColumnVector<T, M>,
    ) -> Result<ColumnVector<T, S>, LinalgError> {
        self.predict(control);
        self.correct(measurement)?;
        #[cfg(feature = "log")]
        log::trace!("kalman step: state = {:?}", self.state);
        Ok(self.state)
    }
}
