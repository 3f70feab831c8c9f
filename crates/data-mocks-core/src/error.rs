//! Error types for scenario resolution and mock injection.

use thiserror::Error;

/// Errors surfaced by the mock injection engine.
///
/// All of these are fatal. Injection is a one-shot setup routine, so failures
/// are returned synchronously to the caller's setup code and are expected to
/// abort the test run, not be recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockError {
    /// More than one `scenario` parameter was present in the query string.
    #[error("ambiguous scenario: {count} 'scenario' parameters in query string")]
    AmbiguousScenario { count: usize },
    /// The named scenario is not declared in the scenario collection.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
    /// The resolved mock set is empty.
    #[error("no mocks defined for scenario '{0}'")]
    NoMocksDefined(String),
    /// An HTTP method string outside the supported enumeration.
    #[error("unrecognised HTTP method '{0}' - please check your mock configuration")]
    UnrecognisedVerb(String),
    /// The same URL pattern is declared under two different mock kinds.
    #[error("conflicting mock kinds declared for URL pattern '{0}'")]
    ConflictingMockKinds(String),
}
