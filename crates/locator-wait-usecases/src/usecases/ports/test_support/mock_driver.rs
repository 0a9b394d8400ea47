//! Scripted driver for use case tests.
//!
//! Elements are keyed by locator value. Each value has a presence that can
//! switch after a given number of lookups, which is enough to model elements
//! that appear, vanish, or become enabled while a wait is polling.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::thread;
use std::time::Duration;

use locator_wait_domain::LocatorDescriptor;

use crate::usecases::ports::Driver;
use crate::usecases::ports::DriverError;
use crate::usecases::ports::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    Absent,
    Present { displayed: bool, enabled: bool },
    Fails(DriverError),
}

impl Presence {
    pub fn visible() -> Self {
        Presence::Present {
            displayed: true,
            enabled: true,
        }
    }

    pub fn hidden() -> Self {
        Presence::Present {
            displayed: false,
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Presence::Present {
            displayed: true,
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockElement {
    pub locator_value: String,
    pub index: usize,
    displayed: bool,
    enabled: bool,
}

impl Element for MockElement {
    fn is_displayed(&self) -> Result<bool, DriverError> {
        Ok(self.displayed)
    }

    fn is_enabled(&self) -> Result<bool, DriverError> {
        Ok(self.enabled)
    }
}

#[derive(Debug, Clone)]
struct Script {
    initial: Presence,
    switch: Option<(usize, Presence)>,
    matches: usize,
    delay: Option<Duration>,
}

impl Script {
    fn new(initial: Presence) -> Self {
        Self {
            initial,
            switch: None,
            matches: 1,
            delay: None,
        }
    }

    fn presence_at(&self, lookup: usize) -> &Presence {
        match &self.switch {
            Some((after, later)) if lookup > *after => later,
            _ => &self.initial,
        }
    }
}

#[derive(Default)]
pub struct MockDriver {
    scripts: HashMap<String, Script>,
    lookups: Mutex<HashMap<String, usize>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MockDriverBuilder {
        MockDriverBuilder::new()
    }

    /// Number of `find_element`/`find_elements` calls made for `value`.
    pub fn lookup_count(&self, value: &str) -> usize {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(value)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_lookups(&self) -> usize {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .sum()
    }

    fn record_lookup(&self, value: &str) -> usize {
        let mut lookups = self.lookups.lock().unwrap_or_else(PoisonError::into_inner);
        let count = lookups.entry(value.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    fn lookup(&self, locator: &LocatorDescriptor) -> (Presence, usize) {
        let lookup = self.record_lookup(locator.value());
        match self.scripts.get(locator.value()) {
            Some(script) => {
                if let Some(delay) = script.delay {
                    thread::sleep(delay);
                }
                (script.presence_at(lookup).clone(), script.matches)
            }
            None => (Presence::Absent, 0),
        }
    }

    fn element(
        locator: &LocatorDescriptor,
        index: usize,
        displayed: bool,
        enabled: bool,
    ) -> MockElement {
        MockElement {
            locator_value: locator.value().to_string(),
            index,
            displayed,
            enabled,
        }
    }
}

impl Driver for MockDriver {
    type Element = MockElement;

    fn find_element(&self, locator: &LocatorDescriptor) -> Result<MockElement, DriverError> {
        match self.lookup(locator) {
            (Presence::Absent, _) => Err(DriverError::NoSuchElement(locator.to_string())),
            (Presence::Present { displayed, enabled }, _) => {
                Ok(Self::element(locator, 0, displayed, enabled))
            }
            (Presence::Fails(err), _) => Err(err),
        }
    }

    fn find_elements(&self, locator: &LocatorDescriptor) -> Result<Vec<MockElement>, DriverError> {
        match self.lookup(locator) {
            (Presence::Absent, _) => Ok(Vec::new()),
            (Presence::Present { displayed, enabled }, matches) => Ok((0..matches)
                .map(|index| Self::element(locator, index, displayed, enabled))
                .collect()),
            (Presence::Fails(err), _) => Err(err),
        }
    }
}

#[derive(Default)]
pub struct MockDriverBuilder {
    scripts: HashMap<String, Script>,
}

impl MockDriverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_presence(mut self, value: impl Into<String>, presence: Presence) -> Self {
        self.scripts.insert(value.into(), Script::new(presence));
        self
    }

    /// `initial` for the first `after_lookups` lookups, `later` afterwards.
    pub fn with_transition(
        mut self,
        value: impl Into<String>,
        initial: Presence,
        after_lookups: usize,
        later: Presence,
    ) -> Self {
        let mut script = Script::new(initial);
        script.switch = Some((after_lookups, later));
        self.scripts.insert(value.into(), script);
        self
    }

    /// Number of elements `find_elements` returns while present.
    pub fn with_matches(mut self, value: &str, matches: usize) -> Self {
        if let Some(script) = self.scripts.get_mut(value) {
            script.matches = matches;
        }
        self
    }

    /// Real (wall clock) delay applied to every lookup of `value`.
    pub fn with_lookup_delay(mut self, value: &str, delay: Duration) -> Self {
        if let Some(script) = self.scripts.get_mut(value) {
            script.delay = Some(delay);
        }
        self
    }

    pub fn build(self) -> MockDriver {
        MockDriver {
            scripts: self.scripts,
            lookups: Mutex::new(HashMap::new()),
        }
    }
}
