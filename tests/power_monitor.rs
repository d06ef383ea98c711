//! Power monitor: a supply reports current, voltage and power every tick.
//! A 3-state Kalman filter smooths the readings and a regulator turns the
//! filtered power into a throttle command.

use statekit::estimate::{CovarianceUpdate, Kalman, KalmanModel};
use statekit::{ColumnVector, ColumnVector1, ColumnVector3, Matrix, StateRegulator};

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

fn monitor_model() -> KalmanModel<f64, 3, 1, 3> {
    KalmanModel {
        state_transition: Matrix::eye(),
        control_transition: Matrix::zeros(),
        measurement_transition: Matrix::eye(),
        process_noise: Matrix::from_diag(&ColumnVector::from_column([1e-3, 1e-3, 1e-2])),
        measurement_noise: Matrix::from_diag(&ColumnVector::from_column([0.04, 0.25, 1.0])),
    }
}

/// Deterministic sensor noise, one distinct tone per channel.
fn reading(k: usize, current: f64, voltage: f64) -> ColumnVector3<f64> {
    let t = k as f64;
    ColumnVector::from_column([
        current + 0.2 * (1.7 * t).sin(),
        voltage + 0.5 * (2.3 * t + 1.0).sin(),
        current * voltage + 0.8 * (0.9 * t + 2.0).sin(),
    ])
}

fn run(
    kf: &mut Kalman<f64, 3, 1, 3>,
    ticks: std::ops::Range<usize>,
    current: f64,
    voltage: f64,
) -> ColumnVector3<f64> {
    let idle: ColumnVector1<f64> = ColumnVector::zeros();
    let mut x = *kf.state();
    for k in ticks {
        x = kf.step(&idle, &reading(k, current, voltage)).unwrap();
    }
    x
}

#[test]
fn filters_noisy_readings() {
    let mut kf = Kalman::new(
        monitor_model(),
        ColumnVector::zeros(),
        Matrix::from_diag(&ColumnVector::from_column([100.0, 100.0, 100.0])),
    );

    let x = run(&mut kf, 0..300, 2.0, 12.0);
    assert_near(x[(0, 0)], 2.0, 0.05, "current");
    assert_near(x[(1, 0)], 12.0, 0.1, "voltage");
    assert_near(x[(2, 0)], 24.0, 0.25, "power");

    // Independent channels keep a diagonal, positive covariance
    let p = kf.covariance();
    assert!(p.is_symmetric());
    for i in 0..3 {
        assert!(p[(i, i)] > 0.0);
        assert!(p[(i, i)] < monitor_model().measurement_noise[(i, i)]);
    }
    assert!(p.lower_triangular().is_ok());
}

#[test]
fn follows_load_step() {
    let mut kf = Kalman::new(
        monitor_model(),
        ColumnVector::zeros(),
        Matrix::from_diag(&ColumnVector::from_column([100.0, 100.0, 100.0])),
    )
    .with_covariance_update(CovarianceUpdate::Joseph);

    run(&mut kf, 0..300, 2.0, 12.0);
    let x = run(&mut kf, 300..600, 3.0, 11.5);

    assert_near(x[(0, 0)], 3.0, 0.05, "current after step");
    assert_near(x[(1, 0)], 11.5, 0.1, "voltage after step");
    assert_near(x[(2, 0)], 34.5, 0.25, "power after step");
}

#[test]
fn regulator_throttles_on_filtered_power() {
    let mut kf = Kalman::new(
        monitor_model(),
        ColumnVector::zeros(),
        Matrix::from_diag(&ColumnVector::from_column([100.0, 100.0, 100.0])),
    );
    // Throttle backs off 0.05 per watt from a nominal command of 2
    let reg: StateRegulator<f64, 3, 1> = StateRegulator::new(Matrix::new([[0.0, 0.0, 0.05]]));
    let nominal = ColumnVector::from_column([2.0]);

    let x = run(&mut kf, 0..300, 3.0, 12.0);
    let u = reg.compute(&nominal, &x);
    assert_near(u[(0, 0)], 2.0 - 0.05 * 36.0, 0.05 * 0.25, "throttle");

    // The filtered command is steadier than one computed on a raw reading
    let raw = reg.compute(&nominal, &reading(300, 3.0, 12.0));
    let filtered = reg.compute(&nominal, &run(&mut kf, 300..301, 3.0, 12.0));
    assert!((filtered[(0, 0)] - 0.2).abs() <= (raw[(0, 0)] - 0.2).abs() + 0.01);
}
