//! Clock port.

use std::time::Duration;
use std::time::Instant;

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    fn elapsed(&self, start: Instant) -> Duration {
        self.now().saturating_duration_since(start)
    }
}
