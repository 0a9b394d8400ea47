//! Sequential one-of lookups.
//!
//! Candidates are tried in order and each gets its own full window, so the
//! worst case is `timeout * candidates`.

use locator_wait_domain::LocatorQuery;
use tracing::debug;

use crate::usecases::errors::WaitError;
use crate::usecases::ports::Driver;
use crate::usecases::waiter::ElementWaiter;

impl<D: Driver> ElementWaiter<D> {
    #[tracing::instrument(skip(self), fields(timeout_ms = self.timeout().as_millis() as u64))]
    pub fn one_of_elements_is_visible(&self, query: &LocatorQuery) -> Result<bool, WaitError> {
        let candidates = query.resolve().expand_candidates();
        for (index, locator) in candidates.iter().enumerate() {
            if self.is_visible_at(locator, self.cancel_token())? {
                debug!(index, %locator, "Candidate visible");
                return Ok(true);
            }
            if self.cancel_token().is_cancelled() {
                break;
            }
        }
        Ok(false)
    }

    #[tracing::instrument(skip(self), fields(timeout_ms = self.timeout().as_millis() as u64))]
    pub fn get_one_of_elements_with_timeout(
        &self,
        query: &LocatorQuery,
    ) -> Result<D::Element, WaitError> {
        let candidates = query.resolve().expand_candidates();
        let mut failures = Vec::with_capacity(candidates.len());
        for (index, locator) in candidates.iter().enumerate() {
            match self.interactable_at(locator, self.cancel_token()) {
                Ok(element) => {
                    debug!(index, %locator, "Candidate matched");
                    return Ok(element);
                }
                Err(err @ WaitError::Driver(_)) => return Err(err),
                Err(err) => {
                    debug!(index, %locator, error = %err, "Candidate failed");
                    failures.push(err);
                }
            }
        }
        Err(WaitError::AllCandidatesFailed { failures })
    }
}
