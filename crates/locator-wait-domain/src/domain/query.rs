//! Typed locator queries and keyword-option resolution.
//!
//! A [`LocatorQuery`] names exactly one strategy, so there is no precedence to
//! get wrong. [`LocatorQuery::from_options`] keeps the keyword form working for
//! callers that build lookups from loose `key=value` pairs: the first present
//! key of `accessibility_id`, `by_name`, `by_id`, `by_xpath` wins, and anything
//! else is folded into a predicate expression.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::locator::LocatorDescriptor;
use crate::domain::locator::LocatorStrategy;

const OPTION_ACCESSIBILITY_ID: &str = "accessibility_id";
const OPTION_BY_NAME: &str = "by_name";
const OPTION_BY_ID: &str = "by_id";
const OPTION_BY_XPATH: &str = "by_xpath";

const PREDICATE_JOINER: &str = " AND ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Equals,
    Contains,
    BeginsWith,
    EndsWith,
    /// Unrecognised modifier token, emitted verbatim.
    Other(String),
}

impl Comparison {
    pub fn from_token(token: &str) -> Self {
        match token {
            "contains" => Comparison::Contains,
            "beginswith" => Comparison::BeginsWith,
            "endswith" => Comparison::EndsWith,
            other => Comparison::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Comparison::Equals => "==",
            Comparison::Contains => "contains",
            Comparison::BeginsWith => "beginswith",
            Comparison::EndsWith => "endswith",
            Comparison::Other(token) => token,
        }
    }
}

/// One `<field> <comparison> "<value>"` term. Quotes inside `value` are not
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateClause {
    pub field: String,
    pub comparison: Comparison,
    pub value: String,
}

impl PredicateClause {
    pub fn new(field: impl Into<String>, comparison: Comparison, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            comparison,
            value: value.into(),
        }
    }

    /// Parses a `field[_modifier]` option key. Only the first two `_` tokens
    /// are looked at.
    pub fn from_option(key: &str, value: impl Into<String>) -> Self {
        let mut parts = key.split('_');
        let field = parts.next().unwrap_or_default();
        let comparison = match parts.next() {
            Some(modifier) => Comparison::from_token(modifier),
            None => Comparison::Equals,
        };
        Self::new(field, comparison, value)
    }
}

impl fmt::Display for PredicateClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\"",
            self.field,
            self.comparison.as_str(),
            self.value
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatorQuery {
    AccessibilityId(String),
    Name(String),
    Id(String),
    #[serde(rename = "xpath")]
    XPath(String),
    Predicate(Vec<PredicateClause>),
}

impl LocatorQuery {
    pub fn accessibility_id(value: impl Into<String>) -> Self {
        LocatorQuery::AccessibilityId(value.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        LocatorQuery::Name(value.into())
    }

    pub fn id(value: impl Into<String>) -> Self {
        LocatorQuery::Id(value.into())
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        LocatorQuery::XPath(value.into())
    }

    pub fn predicate() -> PredicateBuilder {
        PredicateBuilder::default()
    }

    /// Builds a query from keyword options, honouring the fixed precedence
    /// `accessibility_id > by_name > by_id > by_xpath > predicate`.
    ///
    /// Never fails: with no options at all the result is an empty predicate.
    /// If a key is repeated, its first occurrence is used.
    pub fn from_options<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let options: Vec<(String, String)> = options
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_string(), value.into()))
            .collect();

        let lookup = |wanted: &str| {
            options
                .iter()
                .find(|(key, _)| key == wanted)
                .map(|(_, value)| value.clone())
        };

        if let Some(value) = lookup(OPTION_ACCESSIBILITY_ID) {
            return LocatorQuery::AccessibilityId(value);
        }
        if let Some(value) = lookup(OPTION_BY_NAME) {
            return LocatorQuery::Name(value);
        }
        if let Some(value) = lookup(OPTION_BY_ID) {
            return LocatorQuery::Id(value);
        }
        if let Some(value) = lookup(OPTION_BY_XPATH) {
            return LocatorQuery::XPath(value);
        }

        LocatorQuery::Predicate(
            options
                .into_iter()
                .map(|(key, value)| PredicateClause::from_option(&key, value))
                .collect(),
        )
    }

    pub fn strategy(&self) -> LocatorStrategy {
        match self {
            LocatorQuery::AccessibilityId(_) => LocatorStrategy::AccessibilityId,
            LocatorQuery::Name(_) => LocatorStrategy::Name,
            LocatorQuery::Id(_) => LocatorStrategy::Id,
            LocatorQuery::XPath(_) => LocatorStrategy::XPath,
            LocatorQuery::Predicate(_) => LocatorStrategy::PredicateExpression,
        }
    }

    pub fn resolve(&self) -> LocatorDescriptor {
        let value = match self {
            LocatorQuery::AccessibilityId(value)
            | LocatorQuery::Name(value)
            | LocatorQuery::Id(value)
            | LocatorQuery::XPath(value) => value.clone(),
            LocatorQuery::Predicate(clauses) => clauses
                .iter()
                .map(PredicateClause::to_string)
                .collect::<Vec<_>>()
                .join(PREDICATE_JOINER),
        };
        LocatorDescriptor::new(self.strategy(), value)
    }
}

/// Resolves keyword options straight to a descriptor.
pub fn resolve_options<I, K, V>(options: I) -> LocatorDescriptor
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    LocatorQuery::from_options(options).resolve()
}

#[derive(Debug, Clone, Default)]
pub struct PredicateBuilder {
    clauses: Vec<PredicateClause>,
}

impl PredicateBuilder {
    pub fn equals(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.clause(field, Comparison::Equals, value)
    }

    pub fn contains(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.clause(field, Comparison::Contains, value)
    }

    pub fn begins_with(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.clause(field, Comparison::BeginsWith, value)
    }

    pub fn ends_with(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.clause(field, Comparison::EndsWith, value)
    }

    pub fn clause(
        mut self,
        field: impl Into<String>,
        comparison: Comparison,
        value: impl Into<String>,
    ) -> Self {
        self.clauses.push(PredicateClause::new(field, comparison, value));
        self
    }

    pub fn build(self) -> LocatorQuery {
        LocatorQuery::Predicate(self.clauses)
    }
}
