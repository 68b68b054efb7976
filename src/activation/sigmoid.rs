use std::f64::consts::E;

/// Logistic sigmoid, `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Sigmoid derivative written in terms of the activation `a = sigmoid(x)`.
///
/// Backpropagation only ever has the cached activation at hand, so the
/// derivative is taken from it rather than from the weighted sum.
pub fn derivative_from_output(a: f64) -> f64 {
    a * (1.0 - a)
}
