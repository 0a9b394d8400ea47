mod fake_time;
mod mock_driver;

pub use fake_time::FakeTime;
pub use mock_driver::MockDriver;
pub use mock_driver::MockDriverBuilder;
pub use mock_driver::MockElement;
pub use mock_driver::Presence;
