use std::f64::consts::E;

/// Logistic sigmoid: `1 / (1 + e^-x)`.
///
/// Not clamped. Very negative inputs overflow `e^-x` to infinity and the
/// result collapses to `0.0`; very positive inputs round to `1.0`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid evaluated at the raw pre-activation `x`.
///
/// Takes `z`, not the cached activation, so it can be checked against
/// `sigmoid` independently.
pub fn sigmoid_derivative(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}
