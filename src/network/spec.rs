use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// One labeled training or evaluation sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub input: Vec<f64>,
    pub expected: Vec<f64>,
}

impl Example {
    pub fn new(input: Vec<f64>, expected: Vec<f64>) -> Example {
        Example { input, expected }
    }
}

/// Shape, hyperparameters and training set of a network.
///
/// Built once by a loader (props files or JSON) and read-only afterwards.
///
/// Fields:
/// - `input_width`          — width of the first layer's input
/// - `layer_widths`         — neuron count per layer, input → output
/// - `max_iterations`       — hard cap on training epochs
/// - `initial_weight_scale` — scale applied to the randomized initial weights
/// - `momentum`             — blend factor between the previous and the new weight delta
/// - `learning_rate`        — step size of each weight update
/// - `train_bias`           — also train the per-neuron bias (off by default, the
///                            bias then stays at its initial zero)
/// - `seed`                 — optional seed for weight initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_width: usize,
    pub layer_widths: Vec<usize>,
    pub max_iterations: usize,
    pub initial_weight_scale: f64,
    pub momentum: f64,
    pub learning_rate: f64,
    #[serde(default)]
    pub train_bias: bool,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub training_set: Vec<Example>,
}

impl NetworkSpec {
    /// Width of the final layer, or 0 for a spec with no layers.
    pub fn output_width(&self) -> usize {
        self.layer_widths.last().copied().unwrap_or(0)
    }

    /// Rejects specs the network cannot be built from or trained on.
    pub fn validate(&self) -> Result<()> {
        if self.input_width == 0 {
            return Err(invalid("input width must be positive"));
        }
        if self.layer_widths.is_empty() {
            return Err(invalid("at least one layer is required"));
        }
        if let Some(i) = self.layer_widths.iter().position(|&w| w == 0) {
            return Err(invalid(format!("layer {i} has no neurons")));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max iterations must be positive"));
        }
        for (name, value) in [
            ("initial weight scale", self.initial_weight_scale),
            ("momentum", self.momentum),
            ("learning rate", self.learning_rate),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }

        self.validate_examples(&self.training_set)
    }

    /// Checks that every example matches this spec's input and output widths.
    pub fn validate_examples(&self, examples: &[Example]) -> Result<()> {
        let output_width = self.output_width();
        for (i, example) in examples.iter().enumerate() {
            if example.input.len() != self.input_width {
                return Err(invalid(format!(
                    "example {i} has {} inputs, expected {}",
                    example.input.len(),
                    self.input_width
                )));
            }
            if example.expected.len() != output_width {
                return Err(invalid(format!(
                    "example {i} has {} expected outputs, expected {output_width}",
                    example.expected.len()
                )));
            }
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(std::io::Error::other)
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).map_err(std::io::Error::other)
    }
}

fn invalid(msg: impl Into<String>) -> NetworkError {
    NetworkError::InvalidSpec(msg.into())
}
