//! Virtual clock for poll tests: sleeping advances time instantly.

use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

use crate::usecases::ports::Clock;
use crate::usecases::ports::Sleeper;

#[derive(Debug)]
pub struct FakeTime {
    origin: Instant,
    offset: Mutex<Duration>,
    sleep_calls: AtomicUsize,
}

impl FakeTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
            sleep_calls: AtomicUsize::new(0),
        }
    }

    /// Virtual time since construction.
    pub fn offset(&self) -> Duration {
        *self.offset.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn advance(&self, duration: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        *offset += duration;
    }

    pub fn sleep_calls(&self) -> usize {
        self.sleep_calls.load(Ordering::SeqCst)
    }
}

impl Default for FakeTime {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeTime {
    fn now(&self) -> Instant {
        self.origin + self.offset()
    }
}

impl Sleeper for FakeTime {
    fn sleep(&self, duration: Duration) {
        self.sleep_calls.fetch_add(1, Ordering::SeqCst);
        self.advance(duration);
    }
}
