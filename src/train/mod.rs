pub mod epoch_stats;
pub mod loop_fn;
pub mod observer;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use loop_fn::{count_misses, run_one_epoch, train_loop, TrainingOutcome};
pub use observer::{EpochObserver, FnObserver, LogObserver, NoopObserver};
pub use train_config::TrainConfig;
