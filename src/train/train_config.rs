use crate::network::spec::NetworkSpec;

/// Hyperparameters read by the training loop.
///
/// # Fields
/// - `max_epochs`    — hard cap on epochs for one `learn` call
/// - `momentum`      — weight of the previous delta when blending in a new one
/// - `learning_rate` — step size of each weight update
/// - `train_bias`    — whether biases receive updates at all
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub max_epochs: usize,
    pub momentum: f64,
    pub learning_rate: f64,
    pub train_bias: bool,
}

impl TrainConfig {
    pub fn from_spec(spec: &NetworkSpec) -> Self {
        TrainConfig {
            max_epochs: spec.max_iterations,
            momentum: spec.momentum,
            learning_rate: spec.learning_rate,
            train_bias: spec.train_bias,
        }
    }

    /// Same settings with the epoch cap lowered to `cap`, when one is given.
    /// A cap above the current one is ignored; a cap of 0 or 1 trains nothing.
    pub fn with_epoch_cap(self, cap: Option<usize>) -> Self {
        TrainConfig {
            max_epochs: cap.map_or(self.max_epochs, |c| c.min(self.max_epochs)),
            ..self
        }
    }
}
