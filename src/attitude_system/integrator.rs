use nalgebra::SVector;

/// One classical fourth-order Runge-Kutta step of size `h` for `ẋ = f(x)`.
///
/// Anything `f` needs besides the state (body frame, torque, a sampled rate)
/// is captured by the closure and therefore held fixed over all four stages.
pub fn rk4_step<const D: usize, F>(f: F, x0: &SVector<f64, D>, h: f64) -> SVector<f64, D>
where
    F: Fn(&SVector<f64, D>) -> SVector<f64, D>,
{
    let k1 = f(x0);
    let k2 = f(&(x0 + k1 * (h / 2.0)));
    let k3 = f(&(x0 + k2 * (h / 2.0)));
    let k4 = f(&(x0 + k3 * h));

    x0 + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}
