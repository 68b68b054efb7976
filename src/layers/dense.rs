use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{check_width, Result};
use crate::layers::neuron::Neuron;

/// A fully-connected layer of sigmoid neurons sharing one input width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub input_size: usize,
    pub neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        size: usize,
        initial_weight_scale: f64,
        rng: &mut R,
    ) -> Layer {
        let neurons = (0..size)
            .map(|_| Neuron::new(input_size, initial_weight_scale, rng))
            .collect();

        Layer { input_size, neurons }
    }

    /// Number of neurons, i.e. the width of this layer's output.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Activates every neuron on `input` and returns the activations in neuron order.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        check_width(self.input_size, input.len())?;
        self.neurons.iter_mut().map(|n| n.activate(input)).collect()
    }

    /// Cached activations from the most recent forward pass.
    pub fn activations(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.activation).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn every_neuron_gets_the_layer_input_width() {
        let mut rng = StdRng::seed_from_u64(1);
        let layer = Layer::new(5, 3, 1.0, &mut rng);

        assert_eq!(layer.size(), 3);
        assert!(layer.neurons.iter().all(|n| n.input_size() == 5));
    }

    #[test]
    fn forward_returns_one_activation_per_neuron() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut layer = Layer::new(2, 4, 0.5, &mut rng);
        let out = layer.forward(&[1.0, -1.0]).unwrap();

        assert_eq!(out.len(), 4);
        assert_eq!(out, layer.activations());
    }

    #[test]
    fn forward_rejects_wrong_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut layer = Layer::new(3, 2, 1.0, &mut rng);

        assert_eq!(
            layer.forward(&[1.0, 2.0, 3.0, 4.0]),
            Err(NetworkError::InvalidInput {
                expected: 3,
                actual: 4,
            })
        );
    }
}
