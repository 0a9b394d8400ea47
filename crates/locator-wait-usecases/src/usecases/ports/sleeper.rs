//! Sleeper port.

use std::time::Duration;

use crate::usecases::cancel::CancelToken;

/// Blocks the calling thread between probes.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);

    /// Sleeps for `duration` unless `cancel` trips first. Real sleepers must
    /// wake on cancellation so a finished race does not wait out its losers'
    /// poll intervals.
    fn sleep_cancellable(&self, duration: Duration, cancel: &CancelToken) {
        if !cancel.is_cancelled() {
            self.sleep(duration);
        }
    }
}
