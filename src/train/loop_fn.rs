use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::activation::sigmoid::derivative_from_output;
use crate::error::{check_width, Result};
use crate::layers::dense::Layer;
use crate::network::spec::Example;
use crate::train::epoch_stats::EpochStats;
use crate::train::observer::EpochObserver;
use crate::train::train_config::TrainConfig;

/// An output counts as missed when it is further than this from its target.
const MISS_THRESHOLD: f64 = 0.5;

/// How a `learn` call ended.
///
/// Hitting the epoch cap with errors left is a normal outcome, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    /// Error count of the last epoch that ran, or of the untouched network
    /// when no epoch ran.
    pub errors: usize,
    /// Number of epochs that actually ran.
    pub epochs: usize,
}

impl TrainingOutcome {
    pub fn converged(&self) -> bool {
        self.errors == 0
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Runs epochs until one finishes with no errors or the epoch counter,
/// starting at 1, reaches `config.max_epochs`.
///
/// The counter reaching the cap ends the loop before that epoch runs, so at
/// most `max_epochs - 1` epochs train. With a cap of 1 no weights change and
/// the outcome reports the misses of the network as it stands.
///
/// `observer` sees one [`EpochStats`] per completed epoch.
pub fn train_loop(
    layers: &mut [Layer],
    examples: &[Example],
    config: &TrainConfig,
    observer: &mut dyn EpochObserver,
) -> Result<TrainingOutcome> {
    let mut outcome = TrainingOutcome {
        errors: 0,
        epochs: 0,
    };

    for epoch in 1..config.max_epochs {
        let t_start = Instant::now();
        let errors = run_one_epoch(layers, examples, config)?;
        outcome = TrainingOutcome {
            errors,
            epochs: epoch,
        };

        observer.on_epoch(&EpochStats {
            epoch,
            max_epochs: config.max_epochs,
            errors,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        });

        if errors == 0 {
            break;
        }
    }

    if outcome.epochs == 0 {
        outcome.errors = count_misses(layers, examples)?;
    }

    info!(
        "learning finished with error = {} iteration = {}",
        outcome.errors, outcome.epochs
    );
    if !outcome.converged() {
        debug!("epoch cap of {} reached without converging", config.max_epochs);
    }

    Ok(outcome)
}

/// One online pass over `examples`, updating weights after every example.
///
/// Returns how many output values missed their target by more than 0.5,
/// summed over all examples.
pub fn run_one_epoch(
    layers: &mut [Layer],
    examples: &[Example],
    config: &TrainConfig,
) -> Result<usize> {
    let mut errors = 0;
    for example in examples {
        errors += train_example(layers, example, config)?;
    }
    Ok(errors)
}

/// Misses over `examples` without touching any weight.
pub fn count_misses(layers: &mut [Layer], examples: &[Example]) -> Result<usize> {
    let mut errors = 0;
    for example in examples {
        let outputs = forward_all(layers, &example.input)?;
        if let Some(actual) = outputs.last() {
            errors += misses(actual, &example.expected)?;
        }
    }
    Ok(errors)
}

/// Feeds `input` through every layer in order and returns each layer's output.
pub fn forward_all(layers: &mut [Layer], input: &[f64]) -> Result<Vec<Vec<f64>>> {
    let mut outputs: Vec<Vec<f64>> = Vec::with_capacity(layers.len());
    for layer in layers.iter_mut() {
        let layer_input = outputs.last().map(Vec::as_slice).unwrap_or(input);
        let out = layer.forward(layer_input)?;
        outputs.push(out);
    }
    Ok(outputs)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn misses(actual: &[f64], expected: &[f64]) -> Result<usize> {
    check_width(actual.len(), expected.len())?;
    Ok(actual
        .iter()
        .zip(expected)
        .filter(|(a, e)| (*e - *a).abs() > MISS_THRESHOLD)
        .count())
}

/// Forward pass, error terms back to front, momentum deltas, then weight update.
fn train_example(layers: &mut [Layer], example: &Example, config: &TrainConfig) -> Result<usize> {
    let outputs = forward_all(layers, &example.input)?;
    let actual = match outputs.last() {
        Some(out) => out,
        None => return Ok(0),
    };
    let missed = misses(actual, &example.expected)?;

    set_output_error_terms(layers, actual, &example.expected);
    set_hidden_error_terms(layers);

    for (k, layer) in layers.iter_mut().enumerate() {
        let prior_output: &[f64] = if k == 0 {
            &example.input
        } else {
            &outputs[k - 1]
        };
        for neuron in &mut layer.neurons {
            neuron.update_delta(
                prior_output,
                config.momentum,
                config.learning_rate,
                config.train_bias,
            );
        }
    }

    for layer in layers.iter_mut() {
        for neuron in &mut layer.neurons {
            neuron.apply_delta(config.train_bias);
        }
    }

    Ok(missed)
}

/// `error_term = -(expected - actual) * actual * (1 - actual)` for every output neuron.
fn set_output_error_terms(layers: &mut [Layer], actual: &[f64], expected: &[f64]) {
    if let Some(output_layer) = layers.last_mut() {
        for ((neuron, a), e) in output_layer.neurons.iter_mut().zip(actual).zip(expected) {
            neuron.error_term = -(e - a) * derivative_from_output(*a);
        }
    }
}

/// Walks hidden layers from last to first; layer `i + 1` must be finished
/// before layer `i` reads its error terms.
fn set_hidden_error_terms(layers: &mut [Layer]) {
    for i in (0..layers.len().saturating_sub(1)).rev() {
        let (head, tail) = layers.split_at_mut(i + 1);
        let next = &tail[0];

        for (j, neuron) in head[i].neurons.iter_mut().enumerate() {
            let downstream: f64 = next
                .neurons
                .iter()
                .map(|n| n.weights[j] * n.error_term)
                .sum();
            neuron.error_term = derivative_from_output(neuron.activation) * downstream;
        }
    }
}
