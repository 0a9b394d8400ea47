//! Driver port: the lookup primitives of a UI-automation session.
//!
//! Implementations wrap a WebDriver/Appium client. The concurrent race calls
//! `find_element` from several threads at once on the same driver, so an
//! implementation must tolerate concurrent read-only commands. Drivers that
//! serialise commands per session stay correct; the race then interleaves
//! probes instead of running them in parallel.

use locator_wait_domain::LocatorDescriptor;

use crate::usecases::ports::errors::DriverError;

pub trait Element: Send {
    fn is_displayed(&self) -> Result<bool, DriverError>;

    fn is_enabled(&self) -> Result<bool, DriverError>;
}

pub trait Driver: Send + Sync {
    type Element: Element;

    /// Returns `DriverError::NoSuchElement` when nothing matches.
    fn find_element(&self, locator: &LocatorDescriptor) -> Result<Self::Element, DriverError>;

    /// Returns an empty collection when nothing matches.
    fn find_elements(&self, locator: &LocatorDescriptor)
    -> Result<Vec<Self::Element>, DriverError>;
}
