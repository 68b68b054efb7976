use serde::{Deserialize, Serialize};

/// Per-epoch training statistics handed to an [`EpochObserver`].
///
/// [`EpochObserver`]: crate::train::observer::EpochObserver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Epoch cap for this run.
    pub max_epochs: usize,
    /// Output neurons that missed their target by more than 0.5, summed over
    /// every example of the epoch.
    pub errors: usize,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
