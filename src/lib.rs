pub mod activation;
pub mod error;
pub mod eval;
pub mod layers;
pub mod loader;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::NetworkError;
pub use eval::{evaluate, EvaluationReport};
pub use layers::{Layer, Neuron};
pub use loader::{load_examples, load_spec, LoadError};
pub use network::{Example, Network, NetworkSpec};
pub use train::{EpochObserver, EpochStats, LogObserver, TrainingOutcome};
