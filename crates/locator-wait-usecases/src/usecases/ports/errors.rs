use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("No such element: {0}")]
    NoSuchElement(String),
    #[error("Stale element reference: {0}")]
    StaleElement(String),
    #[error("Session error: {0}")]
    Session(String),
    #[error("Driver command '{command}' failed: {reason}")]
    Command { command: String, reason: String },
}

impl DriverError {
    pub fn command(command: impl Into<String>, reason: impl Into<String>) -> Self {
        DriverError::Command {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Lookup misses that a poll treats as "not yet" rather than as failure.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DriverError::NoSuchElement(_) | DriverError::StaleElement(_)
        )
    }
}
