use std::thread;
use std::time::Duration;

use crate::usecases::CancelToken;
use crate::usecases::ports::Sleeper;

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl ThreadSleeper {
    pub fn new() -> Self {
        Self
    }
}

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    fn sleep_cancellable(&self, duration: Duration, cancel: &CancelToken) {
        if !duration.is_zero() {
            cancel.wait_timeout(duration);
        }
    }
}
