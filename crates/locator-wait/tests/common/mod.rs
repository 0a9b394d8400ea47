#![allow(dead_code)]

//! Shared helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use locator_wait::ElementWaiter;
use locator_wait::WaitSettings;
use locator_wait::waiter_shared;
use locator_wait_usecases::ports::test_support::MockDriver;

pub use locator_wait_usecases::ports::test_support::Presence;

pub const FAST_POLL: Duration = Duration::from_millis(10);

/// Real-time waiter over a scripted driver.
pub fn real_time_waiter(driver: MockDriver, timeout: Duration) -> ElementWaiter<MockDriver> {
    let settings = WaitSettings::try_new(timeout, FAST_POLL).expect("valid settings");
    waiter_shared(Arc::new(driver), settings)
}
