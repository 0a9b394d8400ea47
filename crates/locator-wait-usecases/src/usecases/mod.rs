pub mod cancel;
pub mod errors;
pub mod one_of;
pub mod poll;
pub mod ports;
pub mod race;
pub mod wait_condition;
pub mod waiter;

pub use cancel::CancelToken;
pub use errors::WaitError;
pub use poll::PollOutcome;
pub use poll::Poller;
pub use wait_condition::ElementCondition;
pub use waiter::ElementWaiter;
