use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::sigmoid;
use crate::error::{check_width, Result};

/// A single sigmoid unit.
///
/// `weights` and `weight_delta` are sized once at construction and never
/// resized. `weight_delta` doubles as momentum memory: it survives across
/// training examples and is only zeroed when the neuron is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub weight_delta: Vec<f64>,
    #[serde(default)]
    pub bias_delta: f64,
    // Per-pass scratch values, meaningless outside a single forward/backward pass.
    #[serde(skip)]
    pub weighted_sum: f64,
    #[serde(skip)]
    pub activation: f64,
    #[serde(skip)]
    pub error_term: f64,
}

impl Neuron {
    /// Builds a neuron with `input_size` connections.
    ///
    /// Each weight is `initial_weight_scale * (0.1 + 0.8 * u)` with `u` uniform
    /// on `[0, 1)`. The bias starts at zero.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        initial_weight_scale: f64,
        rng: &mut R,
    ) -> Neuron {
        let weights = (0..input_size)
            .map(|_| initial_weight_scale * (0.1 + 0.8 * rng.gen::<f64>()))
            .collect();

        Neuron {
            weights,
            bias: 0.0,
            weight_delta: vec![0.0; input_size],
            bias_delta: 0.0,
            weighted_sum: 0.0,
            activation: 0.0,
            error_term: 0.0,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// Computes `sigmoid(bias + w · input)`, caching the weighted sum and activation.
    pub fn activate(&mut self, input: &[f64]) -> Result<f64> {
        check_width(self.weights.len(), input.len())?;

        self.weighted_sum = self.bias
            + self.weights.iter().zip(input).map(|(w, x)| w * x).sum::<f64>();
        self.activation = sigmoid::sigmoid(self.weighted_sum);

        Ok(self.activation)
    }

    /// Blends the stored deltas with a fresh gradient step:
    /// `delta[i] = momentum * delta[i] + (1 - momentum) * learning_rate * error_term * prior[i]`.
    ///
    /// When `train_bias` is set the bias delta follows the same rule with a
    /// constant prior output of 1.
    pub fn update_delta(
        &mut self,
        prior_output: &[f64],
        momentum: f64,
        learning_rate: f64,
        train_bias: bool,
    ) {
        debug_assert_eq!(prior_output.len(), self.weight_delta.len());
        let step = (1.0 - momentum) * learning_rate * self.error_term;

        self.weight_delta
            .iter_mut()
            .zip(prior_output)
            .for_each(|(d, x)| *d = momentum * *d + step * x);

        if train_bias {
            self.bias_delta = momentum * self.bias_delta + step;
        }
    }

    /// Subtracts the accumulated deltas from the weights (and the bias when trained).
    pub fn apply_delta(&mut self, train_bias: bool) {
        self.weights
            .iter_mut()
            .zip(&self.weight_delta)
            .for_each(|(w, d)| *w -= d);

        if train_bias {
            self.bias -= self.bias_delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use rand::{rngs::StdRng, SeedableRng};

    fn fixed(weights: Vec<f64>) -> Neuron {
        let n = weights.len();
        Neuron {
            weights,
            bias: 0.0,
            weight_delta: vec![0.0; n],
            bias_delta: 0.0,
            weighted_sum: 0.0,
            activation: 0.0,
            error_term: 0.0,
        }
    }

    #[test]
    fn initial_weights_fall_in_scaled_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let neuron = Neuron::new(64, 2.0, &mut rng);

        assert_eq!(neuron.weights.len(), 64);
        assert_eq!(neuron.weight_delta, vec![0.0; 64]);
        assert_eq!(neuron.bias, 0.0);
        for w in &neuron.weights {
            assert!(*w >= 0.2 && *w < 1.8, "weight {w} out of range");
        }
    }

    #[test]
    fn activate_caches_sum_and_output() {
        let mut neuron = fixed(vec![0.5, -0.25]);
        let a = neuron.activate(&[2.0, 4.0]).unwrap();

        assert_eq!(neuron.weighted_sum, 0.0);
        assert_eq!(a, 0.5);
        assert_eq!(neuron.activation, 0.5);
    }

    #[test]
    fn activate_rejects_wrong_width() {
        let mut neuron = fixed(vec![1.0, 1.0]);
        assert_eq!(
            neuron.activate(&[1.0]),
            Err(NetworkError::InvalidInput {
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn delta_blends_previous_value_with_fresh_step() {
        let mut neuron = fixed(vec![0.0]);
        neuron.error_term = 0.2;

        neuron.update_delta(&[1.0], 0.5, 1.0, false);
        assert!((neuron.weight_delta[0] - 0.1).abs() < 1e-12);

        // Second step remembers half of the first.
        neuron.update_delta(&[1.0], 0.5, 1.0, false);
        assert!((neuron.weight_delta[0] - 0.15).abs() < 1e-12);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn delta_update_refuses_a_prior_of_the_wrong_width() {
        let mut neuron = fixed(vec![1.0, 1.0]);
        neuron.error_term = 0.5;
        neuron.update_delta(&[1.0], 0.0, 1.0, false);
    }

    #[test]
    fn bias_only_moves_when_trained() {
        let mut neuron = fixed(vec![1.0]);
        neuron.error_term = 0.5;

        neuron.update_delta(&[1.0], 0.0, 1.0, false);
        neuron.apply_delta(false);
        assert_eq!(neuron.bias, 0.0);
        assert_eq!(neuron.weights[0], 0.5);

        neuron.update_delta(&[1.0], 0.0, 1.0, true);
        neuron.apply_delta(true);
        assert_eq!(neuron.bias, -0.5);
    }
}
