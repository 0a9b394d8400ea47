#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Polling element lookups with timeouts for UI-automation drivers.
//!
//! Implement [`Driver`] and [`Element`] over your WebDriver/Appium client,
//! build an [`ElementWaiter`] with [`waiter`], and describe elements with a
//! [`LocatorQuery`]:
//!
//! ```text
//! let waits = locator_wait::waiter(driver);
//! let ok = waits.element_is_visible(&LocatorQuery::accessibility_id("Login"))?;
//! let button = waits.get_one_of_elements_concurrently(&LocatorQuery::id("submit; confirm"))?;
//! ```
//!
//! Boolean waits return `Ok(false)` when the window closes; element waits
//! return [`WaitError::NotFound`] or [`WaitError::AllCandidatesFailed`].

mod waiter;

pub use locator_wait_common::TelemetryError;
pub use locator_wait_common::TelemetryGuard;
pub use locator_wait_common::init_tracing;
pub use locator_wait_domain::CANDIDATE_SEPARATOR;
pub use locator_wait_domain::CandidateList;
pub use locator_wait_domain::Comparison;
pub use locator_wait_domain::DEFAULT_POLL_INTERVAL;
pub use locator_wait_domain::DEFAULT_TIMEOUT;
pub use locator_wait_domain::LocatorDescriptor;
pub use locator_wait_domain::LocatorQuery;
pub use locator_wait_domain::LocatorStrategy;
pub use locator_wait_domain::PredicateBuilder;
pub use locator_wait_domain::PredicateClause;
pub use locator_wait_domain::SettingsError;
pub use locator_wait_domain::WaitSettings;
pub use locator_wait_domain::resolve_options;
pub use locator_wait_infra::SystemClock;
pub use locator_wait_infra::ThreadSleeper;
pub use locator_wait_infra::WaitConfig;
pub use locator_wait_usecases::CancelToken;
pub use locator_wait_usecases::ElementCondition;
pub use locator_wait_usecases::ElementWaiter;
pub use locator_wait_usecases::PollOutcome;
pub use locator_wait_usecases::WaitError;
pub use locator_wait_usecases::ports::Clock;
pub use locator_wait_usecases::ports::Driver;
pub use locator_wait_usecases::ports::DriverError;
pub use locator_wait_usecases::ports::Element;
pub use locator_wait_usecases::ports::Sleeper;
pub use waiter::waiter;
pub use waiter::waiter_shared;
pub use waiter::waiter_with_config;
