//! Real time and environment configuration.

mod config;
mod system_clock;
mod thread_sleeper;

pub use config::WaitConfig;
pub use system_clock::SystemClock;
pub use thread_sleeper::ThreadSleeper;
