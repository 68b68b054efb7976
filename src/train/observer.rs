use std::sync::mpsc;

use log::{debug, info};

use crate::train::epoch_stats::EpochStats;

/// Receives one observation at the end of every training epoch.
pub trait EpochObserver {
    fn on_epoch(&mut self, stats: &EpochStats);
}

/// Discards every observation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EpochObserver for NoopObserver {
    fn on_epoch(&mut self, _stats: &EpochStats) {}
}

/// Writes one `info!` line per epoch.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl EpochObserver for LogObserver {
    fn on_epoch(&mut self, stats: &EpochStats) {
        info!("{}. error = {}", stats.epoch, stats.errors);
    }
}

/// Adapts a closure into an observer.
pub struct FnObserver<F>(pub F);

impl<F: FnMut(&EpochStats)> EpochObserver for FnObserver<F> {
    fn on_epoch(&mut self, stats: &EpochStats) {
        (self.0)(stats)
    }
}

/// Forwards every observation over a channel; a dropped receiver is ignored.
impl EpochObserver for mpsc::Sender<EpochStats> {
    fn on_epoch(&mut self, stats: &EpochStats) {
        if self.send(stats.clone()).is_err() {
            debug!("progress receiver dropped at epoch {}", stats.epoch);
        }
    }
}

/// Collects every observation, mostly useful in tests.
impl EpochObserver for Vec<EpochStats> {
    fn on_epoch(&mut self, stats: &EpochStats) {
        self.push(stats.clone());
    }
}
