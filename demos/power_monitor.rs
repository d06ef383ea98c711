// Supply monitor: current, voltage and power readings smoothed by a 3-state
// Kalman filter, with a regulator throttling on the filtered power.
// Prints JSON with 400 ticks; the load steps up at tick 200:
//   {"k":[...], "raw_power":[...], "power":[...], "throttle":[...]}

use statekit::estimate::{Kalman, KalmanModel};
use statekit::{ColumnVector, Matrix, StateRegulator};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    let model: KalmanModel<f64, 3, 1, 3> = KalmanModel {
        state_transition: Matrix::eye(),
        control_transition: Matrix::zeros(),
        measurement_transition: Matrix::eye(),
        process_noise: Matrix::from_diag(&ColumnVector::from_column([1e-3, 1e-3, 1e-2])),
        measurement_noise: Matrix::from_diag(&ColumnVector::from_column([0.04, 0.25, 1.0])),
    };
    let mut kf = Kalman::new(model, ColumnVector::zeros(), Matrix::eye() * 100.0);
    let reg = StateRegulator::new(Matrix::new([[0.0, 0.0, 0.05]]));
    let nominal = ColumnVector::from_column([2.0]);

    const N: usize = 400;
    let mut k_vals = vec![0.0_f64; N];
    let mut raw_vals = vec![0.0_f64; N];
    let mut power_vals = vec![0.0_f64; N];
    let mut throttle_vals = vec![0.0_f64; N];

    let idle = ColumnVector::zeros();
    for k in 0..N {
        let (current, voltage) = if k < N / 2 { (2.0, 12.0) } else { (3.0, 11.5) };
        let t = k as f64;
        let z = ColumnVector::from_column([
            current + 0.2 * (1.7 * t).sin(),
            voltage + 0.5 * (2.3 * t + 1.0).sin(),
            current * voltage + 0.8 * (0.9 * t + 2.0).sin(),
        ]);

        let x = kf.step(&idle, &z).expect("residual covariance is never singular here");
        let throttle = reg.compute(&nominal, &x);

        k_vals[k] = t;
        raw_vals[k] = z[(2, 0)];
        power_vals[k] = x[(2, 0)];
        throttle_vals[k] = throttle[(0, 0)];
    }

    println!(
        "{{\"k\":{},\"raw_power\":{},\"power\":{},\"throttle\":{}}}",
        fmt_arr(&k_vals),
        fmt_arr(&raw_vals),
        fmt_arr(&power_vals),
        fmt_arr(&throttle_vals)
    );
}
