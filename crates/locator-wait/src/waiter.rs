//! Wiring of real time into [`ElementWaiter`].

use std::sync::Arc;

use locator_wait_domain::WaitSettings;
use locator_wait_infra::SystemClock;
use locator_wait_infra::ThreadSleeper;
use locator_wait_infra::WaitConfig;
use locator_wait_usecases::ElementWaiter;
use locator_wait_usecases::ports::Driver;

/// Waiter using `LOCATOR_WAIT_TIMEOUT_MS` / `LOCATOR_WAIT_POLL_MS`, or the
/// 4 s / 500 ms defaults.
pub fn waiter<D: Driver>(driver: D) -> ElementWaiter<D> {
    waiter_with_config(driver, &WaitConfig::from_env())
}

pub fn waiter_with_config<D: Driver>(driver: D, config: &WaitConfig) -> ElementWaiter<D> {
    waiter_shared(Arc::new(driver), config.settings())
}

/// For drivers that are also used outside the waiter.
pub fn waiter_shared<D: Driver>(driver: Arc<D>, settings: WaitSettings) -> ElementWaiter<D> {
    ElementWaiter::new(
        driver,
        Arc::new(SystemClock::new()),
        Arc::new(ThreadSleeper::new()),
        settings,
    )
}
