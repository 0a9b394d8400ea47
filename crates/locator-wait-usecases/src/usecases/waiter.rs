//! Single-locator waits.
//!
//! Boolean waits collapse "not found in time" into `Ok(false)`; element waits
//! report it as [`WaitError::NotFound`]. Only a non-transient driver error
//! escapes a boolean wait.

use std::sync::Arc;
use std::time::Duration;

use locator_wait_domain::LocatorDescriptor;
use locator_wait_domain::LocatorQuery;
use locator_wait_domain::WaitSettings;
use tracing::debug;

use crate::usecases::cancel::CancelToken;
use crate::usecases::errors::WaitError;
use crate::usecases::poll::PollOutcome;
use crate::usecases::poll::Poller;
use crate::usecases::ports::Clock;
use crate::usecases::ports::Driver;
use crate::usecases::ports::DriverError;
use crate::usecases::ports::Sleeper;
use crate::usecases::wait_condition::ElementCondition;
use crate::usecases::wait_condition::Evaluation;
use crate::usecases::wait_condition::evaluate;

pub struct ElementWaiter<D: Driver> {
    driver: Arc<D>,
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn Sleeper>,
    settings: WaitSettings,
    cancel: CancelToken,
}

impl<D: Driver> Clone for ElementWaiter<D> {
    fn clone(&self) -> Self {
        Self {
            driver: Arc::clone(&self.driver),
            clock: Arc::clone(&self.clock),
            sleeper: Arc::clone(&self.sleeper),
            settings: self.settings,
            cancel: self.cancel.clone(),
        }
    }
}

impl<D: Driver> ElementWaiter<D> {
    pub fn new(
        driver: Arc<D>,
        clock: Arc<dyn Clock>,
        sleeper: Arc<dyn Sleeper>,
        settings: WaitSettings,
    ) -> Self {
        Self {
            driver,
            clock,
            sleeper,
            settings,
            cancel: CancelToken::new(),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn settings(&self) -> WaitSettings {
        self.settings
    }

    pub fn timeout(&self) -> Duration {
        self.settings.timeout()
    }

    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_settings(self.settings.with_timeout(timeout))
    }

    pub fn with_settings(&self, settings: WaitSettings) -> Self {
        Self {
            settings,
            ..self.clone()
        }
    }

    /// Waits started from the returned waiter stop at their next probe once
    /// `cancel` is tripped.
    pub fn with_cancel_token(&self, cancel: CancelToken) -> Self {
        Self {
            cancel,
            ..self.clone()
        }
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Polls `condition` for `locator` over one full window.
    pub fn poll_until(
        &self,
        locator: &LocatorDescriptor,
        condition: ElementCondition,
    ) -> Result<PollOutcome<Option<D::Element>>, DriverError> {
        self.poll_until_with(locator, condition, &self.cancel)
    }

    pub(crate) fn poll_until_with(
        &self,
        locator: &LocatorDescriptor,
        condition: ElementCondition,
        cancel: &CancelToken,
    ) -> Result<PollOutcome<Option<D::Element>>, DriverError> {
        let poller = Poller::new(self.clock.as_ref(), self.sleeper.as_ref(), self.settings)
            .with_cancel(cancel);
        let outcome = poller.run(|| {
            Ok(match evaluate(self.driver.as_ref(), locator, condition)? {
                Evaluation::Met(element) => Some(element),
                Evaluation::Unmet => None,
            })
        })?;
        debug!(
            %locator,
            condition = condition.as_str(),
            ready = outcome.is_ready(),
            attempts = outcome.attempts(),
            elapsed_ms = outcome.elapsed().as_millis() as u64,
            "Poll finished"
        );
        Ok(outcome)
    }

    pub(crate) fn is_visible_at(
        &self,
        locator: &LocatorDescriptor,
        cancel: &CancelToken,
    ) -> Result<bool, WaitError> {
        let outcome = self.poll_until_with(locator, ElementCondition::Visible, cancel)?;
        Ok(outcome.is_ready())
    }

    pub(crate) fn interactable_at(
        &self,
        locator: &LocatorDescriptor,
        cancel: &CancelToken,
    ) -> Result<D::Element, WaitError> {
        match self.poll_until_with(locator, ElementCondition::VisibleAndEnabled, cancel)? {
            PollOutcome::Ready {
                value: Some(element),
                ..
            } => Ok(element),
            PollOutcome::Ready { value: None, .. } => Err(self.not_found(locator, None)),
            PollOutcome::TimedOut { last_error, .. } => Err(self.not_found(locator, last_error)),
            PollOutcome::Cancelled { .. } => Err(WaitError::Cancelled {
                locator: locator.clone(),
            }),
        }
    }

    pub(crate) fn not_found(
        &self,
        locator: &LocatorDescriptor,
        last_error: Option<DriverError>,
    ) -> WaitError {
        WaitError::NotFound {
            locator: locator.clone(),
            timeout: self.settings.timeout(),
            last_error,
        }
    }

    /// `true` once the element exists and is displayed; `false` if the window
    /// closes first.
    #[tracing::instrument(skip(self), fields(timeout_ms = self.timeout().as_millis() as u64))]
    pub fn element_is_visible(&self, query: &LocatorQuery) -> Result<bool, WaitError> {
        self.is_visible_at(&query.resolve(), &self.cancel)
    }

    /// `true` once the element is missing or hidden; `false` if it is still
    /// displayed when the window closes.
    #[tracing::instrument(skip(self), fields(timeout_ms = self.timeout().as_millis() as u64))]
    pub fn element_is_not_visible(&self, query: &LocatorQuery) -> Result<bool, WaitError> {
        let outcome =
            self.poll_until_with(&query.resolve(), ElementCondition::NotVisible, &self.cancel)?;
        Ok(outcome.is_ready())
    }

    /// The element once it is displayed and enabled.
    #[tracing::instrument(skip(self), fields(timeout_ms = self.timeout().as_millis() as u64))]
    pub fn get_element_with_timeout(&self, query: &LocatorQuery) -> Result<D::Element, WaitError> {
        self.interactable_at(&query.resolve(), &self.cancel)
    }

    /// Every match once at least one element matches. Visibility is not
    /// checked.
    #[tracing::instrument(skip(self), fields(timeout_ms = self.timeout().as_millis() as u64))]
    pub fn get_elements_with_timeout(
        &self,
        query: &LocatorQuery,
    ) -> Result<Vec<D::Element>, WaitError> {
        let locator = query.resolve();
        let poller = Poller::new(self.clock.as_ref(), self.sleeper.as_ref(), self.settings)
            .with_cancel(&self.cancel);
        let outcome = poller.run(|| {
            let elements = self.driver.find_elements(&locator)?;
            Ok((!elements.is_empty()).then_some(elements))
        })?;

        match outcome {
            PollOutcome::Ready { value, .. } => {
                debug!(%locator, count = value.len(), "Elements found");
                Ok(value)
            }
            PollOutcome::TimedOut { last_error, .. } => Err(self.not_found(&locator, last_error)),
            PollOutcome::Cancelled { .. } => Err(WaitError::Cancelled { locator }),
        }
    }
}
