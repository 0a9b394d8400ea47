//! Port interfaces owned by use cases.

pub mod clock;
pub mod driver;
pub mod errors;
pub mod sleeper;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::Clock;
pub use driver::Driver;
pub use driver::Element;
pub use errors::DriverError;
pub use sleeper::Sleeper;
