//! Locator and wait domain types.

pub mod candidates;
pub mod locator;
pub mod query;
pub mod settings;

pub use candidates::CANDIDATE_SEPARATOR;
pub use candidates::CandidateList;
pub use locator::LocatorDescriptor;
pub use locator::LocatorStrategy;
pub use query::Comparison;
pub use query::LocatorQuery;
pub use query::PredicateBuilder;
pub use query::PredicateClause;
pub use query::resolve_options;
pub use settings::DEFAULT_POLL_INTERVAL;
pub use settings::DEFAULT_TIMEOUT;
pub use settings::SettingsError;
pub use settings::WaitSettings;
