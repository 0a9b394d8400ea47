use std::time::Duration;

use locator_wait_domain::LocatorDescriptor;
use thiserror::Error;

use crate::usecases::ports::DriverError;

#[derive(Error, Debug)]
pub enum WaitError {
    #[error("No element matching {locator} within {timeout:?}")]
    NotFound {
        locator: LocatorDescriptor,
        timeout: Duration,
        last_error: Option<DriverError>,
    },
    #[error("None of {} candidate locators matched: {}", failures.len(), summarize(failures))]
    AllCandidatesFailed { failures: Vec<WaitError> },
    #[error("Wait for {locator} was cancelled")]
    Cancelled { locator: LocatorDescriptor },
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),
    #[error("Failed to start lookup worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),
}

impl WaitError {
    /// Errors that mean "the element did not show up" as opposed to a broken
    /// session.
    pub fn is_not_found(&self) -> bool {
        match self {
            WaitError::NotFound { .. } => true,
            WaitError::AllCandidatesFailed { failures } => {
                failures.iter().all(WaitError::is_not_found)
            }
            _ => false,
        }
    }

    pub fn failures(&self) -> &[WaitError] {
        match self {
            WaitError::AllCandidatesFailed { failures } => failures,
            _ => &[],
        }
    }

    pub fn locator(&self) -> Option<&LocatorDescriptor> {
        match self {
            WaitError::NotFound { locator, .. } | WaitError::Cancelled { locator } => {
                Some(locator)
            }
            _ => None,
        }
    }
}

fn summarize(failures: &[WaitError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
