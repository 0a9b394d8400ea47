//! Concurrent one-of lookup.
//!
//! Every candidate is polled on its own scoped worker thread with the full
//! window. The first element found wins; the remaining workers are cancelled,
//! woken from their poll pause, and joined before the call returns, so nothing
//! outlives the lookup.
//!
//! All workers share one driver. See [`Driver`] for the concurrency it must
//! tolerate.

use std::thread;

use locator_wait_domain::LocatorQuery;
use tracing::Dispatch;
use tracing::Span;
use tracing::dispatcher;
use tracing::debug;
use tracing::debug_span;
use tracing::warn;

use crate::usecases::errors::WaitError;
use crate::usecases::ports::Driver;
use crate::usecases::waiter::ElementWaiter;

const WORKER_NAME_PREFIX: &str = "locator-race";

impl<D: Driver> ElementWaiter<D> {
    #[tracing::instrument(skip(self), fields(timeout_ms = self.timeout().as_millis() as u64))]
    pub fn get_one_of_elements_concurrently(
        &self,
        query: &LocatorQuery,
    ) -> Result<D::Element, WaitError> {
        let candidates = query.resolve().expand_candidates();
        let race = self.cancel_token().child();
        let (tx, rx) = crossbeam_channel::unbounded();
        let span = Span::current();
        let dispatch = dispatcher::get_default(Dispatch::clone);

        thread::scope(|scope| {
            let mut failures = Vec::with_capacity(candidates.len());

            for (index, locator) in candidates.iter().enumerate() {
                let tx = tx.clone();
                let race = &race;
                let dispatch = &dispatch;
                let worker_span = debug_span!(parent: &span, "race_worker", index, %locator);
                let spawned = thread::Builder::new()
                    .name(format!("{WORKER_NAME_PREFIX}-{index}"))
                    .spawn_scoped(scope, move || {
                        let result = dispatcher::with_default(dispatch, || {
                            worker_span.in_scope(|| self.interactable_at(locator, race))
                        });
                        let _ = tx.send((index, result));
                    });
                if let Err(err) = spawned {
                    warn!(index, %locator, error = %err, "Failed to spawn race worker");
                    failures.push((index, WaitError::WorkerSpawn(err)));
                }
            }
            drop(tx);

            for (index, result) in rx.iter() {
                match result {
                    Ok(element) => {
                        race.cancel();
                        debug!(index, locator = %candidates[index], "Race won");
                        return Ok(element);
                    }
                    Err(err @ WaitError::Driver(_)) => {
                        race.cancel();
                        return Err(err);
                    }
                    Err(err) => {
                        debug!(index, error = %err, "Race candidate failed");
                        failures.push((index, err));
                    }
                }
            }

            failures.sort_by_key(|(index, _)| *index);
            Err(WaitError::AllCandidatesFailed {
                failures: failures.into_iter().map(|(_, err)| err).collect(),
            })
        })
    }
}
