use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{check_width, NetworkError, Result};
use crate::layers::dense::Layer;
use crate::network::spec::NetworkSpec;
use crate::train::loop_fn::{self, TrainingOutcome};
use crate::train::observer::{EpochObserver, LogObserver, NoopObserver};
use crate::train::train_config::TrainConfig;

/// A chain of fully-connected sigmoid layers plus the spec it was built from.
///
/// The spec is never mutated; only weights, deltas and per-pass scratch
/// values inside the layers change during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    spec: NetworkSpec,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network, seeding weight initialization from `spec.seed` or,
    /// when absent, from OS entropy.
    pub fn new(spec: NetworkSpec) -> Result<Network> {
        let mut rng = match spec.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Network::with_rng(spec, &mut rng)
    }

    /// Builds a network drawing initial weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(spec: NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;

        let mut input_size = spec.input_width;
        let mut layers = Vec::with_capacity(spec.layer_widths.len());
        for &size in &spec.layer_widths {
            layers.push(Layer::new(input_size, size, spec.initial_weight_scale, rng));
            input_size = size;
        }

        debug!(
            "built network: {} inputs, layers {:?}, {} training examples",
            spec.input_width,
            spec.layer_widths,
            spec.training_set.len()
        );

        Ok(Network { spec, layers })
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_width(&self) -> usize {
        self.spec.input_width
    }

    pub fn output_width(&self) -> usize {
        self.spec.output_width()
    }

    /// Forward pass. Leaves weights untouched but refreshes each neuron's
    /// cached weighted sum and activation.
    pub fn execute(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        check_width(self.spec.input_width, input.len())?;
        let mut outputs = loop_fn::forward_all(&mut self.layers, input)?;
        Ok(outputs.pop().unwrap_or_default())
    }

    /// One online epoch over the training set; returns the error count.
    pub fn train_one_epoch(&mut self) -> Result<usize> {
        let config = TrainConfig::from_spec(&self.spec);
        loop_fn::run_one_epoch(&mut self.layers, &self.spec.training_set, &config)
    }

    /// Trains until an epoch finishes without errors or the epoch counter,
    /// starting at 1, reaches `max_iterations`; at most `max_iterations - 1`
    /// epochs run. Reaching the cap with errors left is reported, not raised.
    ///
    /// With `show_progress` every epoch is logged at `info` level.
    pub fn learn(&mut self, show_progress: bool) -> Result<TrainingOutcome> {
        if show_progress {
            self.learn_with(None, &mut LogObserver)
        } else {
            self.learn_with(None, &mut NoopObserver)
        }
    }

    /// Like [`Network::learn`], reporting to `observer`. `epoch_cap` can lower
    /// `max_iterations` for this call but never raise it.
    pub fn learn_with(
        &mut self,
        epoch_cap: Option<usize>,
        observer: &mut dyn EpochObserver,
    ) -> Result<TrainingOutcome> {
        let config = TrainConfig::from_spec(&self.spec).with_epoch_cap(epoch_cap);
        loop_fn::train_loop(&mut self.layers, &self.spec.training_set, &config, observer)
    }

    /// Serializes the spec and the trained layers to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(std::io::Error::other)
    }

    /// Deserializes a network written by `save_json`, rejecting files whose
    /// layers disagree with their spec.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader).map_err(std::io::Error::other)?;
        network.check_shape().map_err(std::io::Error::other)?;
        Ok(network)
    }

    /// Verifies that layers, neurons and weight vectors match the spec.
    pub fn check_shape(&self) -> Result<()> {
        self.spec.validate()?;
        if self.layers.len() != self.spec.layer_widths.len() {
            return Err(NetworkError::InvalidSpec(format!(
                "{} layers stored, spec declares {}",
                self.layers.len(),
                self.spec.layer_widths.len()
            )));
        }

        let mut input_size = self.spec.input_width;
        for (i, (layer, &size)) in self.layers.iter().zip(&self.spec.layer_widths).enumerate() {
            let well_formed = layer.input_size == input_size
                && layer.size() == size
                && layer
                    .neurons
                    .iter()
                    .all(|n| n.weights.len() == input_size && n.weight_delta.len() == input_size);
            if !well_formed {
                return Err(NetworkError::InvalidSpec(format!(
                    "layer {i} does not match a {input_size} -> {size} shape"
                )));
            }
            input_size = size;
        }
        Ok(())
    }
}
