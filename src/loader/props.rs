//! `key=value` network configuration files.
//!
//! Recognized keys:
//! - `inCount`               — input width
//! - `neuronCounts`          — whitespace-separated neuron count per layer
//! - `maxLearningIterations` — epoch cap
//! - `initialWeightValue`    — initial weight scale
//! - `alpha`                 — momentum
//! - `speed`                 — learning rate
//! - `trainBias`             — `true`/`false`, optional
//! - `seed`                  — u64 weight-initialization seed, optional
//!
//! Blank lines and lines starting with `#` are skipped; unknown keys are
//! ignored with a warning.
use std::str::FromStr;

use log::{debug, warn};

use crate::loader::error::{read_file, LoadError};
use crate::loader::examples::load_examples;
use crate::network::spec::NetworkSpec;

#[derive(Default)]
struct Partial {
    input_width: Option<usize>,
    layer_widths: Option<Vec<usize>>,
    max_iterations: Option<usize>,
    initial_weight_scale: Option<f64>,
    momentum: Option<f64>,
    learning_rate: Option<f64>,
    train_bias: bool,
    seed: Option<u64>,
}

/// Parses configuration text into a spec with an empty training set.
///
/// The result is not validated; [`load_spec`] validates once the training
/// set is attached.
pub fn parse_props(text: &str) -> Result<NetworkSpec, LoadError> {
    let mut partial = Partial::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = trimmed.split_once('=').ok_or_else(|| {
            LoadError::parse(line, format!("expected `key=value`, got `{trimmed}`"))
        })?;
        let (key, value) = (key.trim(), value.trim());

        match key {
            "inCount" => partial.input_width = Some(parse_value(key, value, line)?),
            "neuronCounts" => {
                let widths = value
                    .split_whitespace()
                    .map(|tok| parse_value(key, tok, line))
                    .collect::<Result<Vec<usize>, _>>()?;
                partial.layer_widths = Some(widths);
            }
            "maxLearningIterations" => {
                partial.max_iterations = Some(parse_value(key, value, line)?)
            }
            "initialWeightValue" => {
                partial.initial_weight_scale = Some(parse_value(key, value, line)?)
            }
            "alpha" => partial.momentum = Some(parse_value(key, value, line)?),
            "speed" => partial.learning_rate = Some(parse_value(key, value, line)?),
            "trainBias" => partial.train_bias = parse_value(key, value, line)?,
            "seed" => partial.seed = Some(parse_value(key, value, line)?),
            _ => {
                warn!("ignoring unknown configuration key `{key}` on line {line}");
                continue;
            }
        }
        debug!("config {key} = {value}");
    }

    Ok(NetworkSpec {
        input_width: partial.input_width.ok_or(LoadError::MissingKey("inCount"))?,
        layer_widths: partial.layer_widths.ok_or(LoadError::MissingKey("neuronCounts"))?,
        max_iterations: partial
            .max_iterations
            .ok_or(LoadError::MissingKey("maxLearningIterations"))?,
        initial_weight_scale: partial
            .initial_weight_scale
            .ok_or(LoadError::MissingKey("initialWeightValue"))?,
        momentum: partial.momentum.ok_or(LoadError::MissingKey("alpha"))?,
        learning_rate: partial.learning_rate.ok_or(LoadError::MissingKey("speed"))?,
        train_bias: partial.train_bias,
        seed: partial.seed,
        training_set: Vec::new(),
    })
}

/// Reads a configuration file and its training-set file into a validated spec.
pub fn load_spec(config_path: &str, data_path: &str) -> Result<NetworkSpec, LoadError> {
    let mut spec = parse_props(&read_file(config_path)?).map_err(|e| e.in_file(config_path))?;
    spec.training_set = load_examples(data_path)?;
    spec.validate()?;
    Ok(spec)
}

fn parse_value<T: FromStr>(key: &str, value: &str, line: usize) -> Result<T, LoadError> {
    value
        .parse()
        .map_err(|_| LoadError::parse(line, format!("invalid value `{value}` for `{key}`")))
}
