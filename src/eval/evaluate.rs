use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::network::Network;
use crate::network::spec::Example;

/// Outcome of running one example through a trained network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub actual: Vec<f64>,
    pub expected: Vec<f64>,
    /// Each output rounded to the nearest integer and concatenated.
    pub actual_digits: String,
    pub expected_digits: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub results: Vec<Evaluation>,
}

impl EvaluationReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Fraction of passing examples in [0, 1]; 0 for an empty report.
    pub fn accuracy(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.passed() as f64 / self.total() as f64
        }
    }
}

/// Rounds every value to the nearest integer and concatenates the digits,
/// e.g. `[0.9, 0.2, 1.4]` becomes `"101"`.
pub fn round_to_digits(values: &[f64]) -> String {
    values.iter().map(|v| (v.round() as i64).to_string()).collect()
}

/// Runs every example through `network`; an example passes when its rounded
/// output matches its rounded expected vector.
pub fn evaluate(network: &mut Network, examples: &[Example]) -> Result<EvaluationReport> {
    network.spec().validate_examples(examples)?;

    let mut results = Vec::with_capacity(examples.len());
    for example in examples {
        let actual = network.execute(&example.input)?;
        let actual_digits = round_to_digits(&actual);
        let expected_digits = round_to_digits(&example.expected);
        results.push(Evaluation {
            passed: actual_digits == expected_digits,
            actual,
            expected: example.expected.clone(),
            actual_digits,
            expected_digits,
        });
    }

    Ok(EvaluationReport { results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use crate::network::spec::NetworkSpec;

    fn network() -> Network {
        Network::new(NetworkSpec {
            input_width: 1,
            layer_widths: vec![1],
            max_iterations: 1,
            initial_weight_scale: 1.0,
            momentum: 0.0,
            learning_rate: 1.0,
            train_bias: false,
            seed: Some(3),
            training_set: vec![],
        })
        .unwrap()
    }

    #[test]
    fn digits_round_half_away_from_zero() {
        assert_eq!(round_to_digits(&[0.9, 0.2, 1.4, 0.5]), "1011");
        assert_eq!(round_to_digits(&[]), "");
    }

    #[test]
    fn zero_input_rounds_to_one() {
        // Output is exactly 0.5 with no bias, which rounds up.
        let mut net = network();
        let report = evaluate(
            &mut net,
            &[Example::new(vec![0.0], vec![1.0]), Example::new(vec![0.0], vec![0.0])],
        )
        .unwrap();

        assert_eq!(report.total(), 2);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.accuracy(), 0.5);
        assert_eq!(report.results[0].actual_digits, "1");
    }

    #[test]
    fn mismatched_example_is_rejected() {
        let mut net = network();
        let err = evaluate(&mut net, &[Example::new(vec![0.0, 1.0], vec![1.0])]).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidSpec(_)));
    }
}
