use super::*;
use crate::estimate::{ObserverModel, StateObserver};
use crate::matrix::vector::ColumnVector;
use crate::Matrix;

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

#[test]
fn scalar_compute() {
    let reg = StateRegulator::new(Matrix::new([[3.0_f64]]));
    let u = reg.compute(&ColumnVector::from_column([10.0]), &ColumnVector::from_column([2.0]));
    assert_eq!(u[(0, 0)], 4.0);
}

#[test]
fn integer_gain() {
    let reg: StateRegulator<i32, 2, 1> = StateRegulator::new(Matrix::new([[2, -1]]));
    let u = reg.compute(&ColumnVector::from_column([5]), &ColumnVector::from_column([3, 4]));
    assert_eq!(u[(0, 0)], 3);
}

#[test]
fn zero_gain_passes_input_through() {
    let reg: StateRegulator<f64, 3, 2> = StateRegulator::new(Matrix::zeros());
    let r = ColumnVector::from_column([1.5, -2.0]);
    let u = reg.compute(&r, &ColumnVector::from_column([9.0, 9.0, 9.0]));
    assert_eq!(u, r);
}

#[test]
fn gain_accessor() {
    let k = Matrix::new([[0.1_f64, 0.2], [0.3, 0.4]]);
    let reg = StateRegulator::new(k);
    assert_eq!(*reg.gain(), k);
}

#[test]
fn closed_loop_drives_plant_to_reference() {
    // x' = 0.9 x + 0.1 u, regulated with u = r − k x.
    // Closed loop pole 0.9 − 0.1 k; steady state x = 0.1 r / (0.1 + 0.1 k).
    let k = 4.0;
    let reg = StateRegulator::new(Matrix::new([[k]]));
    let observer = ObserverModel {
        state_transition: Matrix::new([[0.9]]),
        control_transition: Matrix::new([[0.1]]),
        measurement_transition: Matrix::new([[1.0]]),
        state_gain: Matrix::new([[0.8]]),
    };
    let mut obs = StateObserver::new(observer, ColumnVector::from_column([0.0]));

    let r = ColumnVector::from_column([5.0]);
    let mut plant = 2.0;
    let mut u = ColumnVector::from_column([0.0]);
    for _ in 0..200 {
        plant = 0.9 * plant + 0.1 * u[(0, 0)];
        let x = obs.step(&u, &ColumnVector::from_column([plant]));
        u = reg.compute(&r, &x);
    }

    let expected = 0.1 * 5.0 / (0.1 + 0.1 * k);
    assert_near(plant, expected, 1e-9, "plant steady state");
    assert_near(obs.state()[(0, 0)], expected, 1e-9, "estimate steady state");
}
