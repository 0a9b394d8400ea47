//! Locator strategy and descriptor types.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::candidates::CandidateList;

/// Lookup method understood by the automation driver.
///
/// The serialized form is the driver's own wire constant, so a descriptor can
/// be handed to a WebDriver/Appium client without further translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorStrategy {
    #[serde(rename = "accessibility id")]
    AccessibilityId,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "xpath")]
    XPath,
    #[serde(rename = "-ios predicate string")]
    PredicateExpression,
}

impl LocatorStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocatorStrategy::AccessibilityId => "accessibility id",
            LocatorStrategy::Name => "name",
            LocatorStrategy::Id => "id",
            LocatorStrategy::XPath => "xpath",
            LocatorStrategy::PredicateExpression => "-ios predicate string",
        }
    }
}

impl fmt::Display for LocatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical `(strategy, value)` pair sent to the driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocatorDescriptor {
    strategy: LocatorStrategy,
    value: String,
}

impl LocatorDescriptor {
    pub fn new(strategy: LocatorStrategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }

    pub fn strategy(&self) -> LocatorStrategy {
        self.strategy
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Splits the value into its `"; "`-separated alternatives.
    pub fn candidates(&self) -> CandidateList {
        CandidateList::split(&self.value)
    }

    /// Same strategy, different value. Used to address a single candidate.
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self::new(self.strategy, value)
    }

    /// One descriptor per candidate, in candidate order.
    pub fn expand_candidates(&self) -> Vec<LocatorDescriptor> {
        self.candidates()
            .iter()
            .map(|candidate| self.with_value(candidate))
            .collect()
    }
}

impl fmt::Display for LocatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.strategy, self.value)
    }
}
