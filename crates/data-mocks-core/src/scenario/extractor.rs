//! Scenario extraction from the ambient location.
//!
//! The "current scenario" lives in a location object's query string, which is
//! effectively global state. It is read in exactly one place - here - so every
//! call site downstream depends on an explicit scenario name instead.

use crate::error::MockError;
use crate::types::scenario::DEFAULT_SCENARIO;

/// Location-like object exposing a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Query string, with or without the leading `?`
    pub search: String,
}

impl Location {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }
}

/// Split a query string into decoded key/value pairs.
///
/// Order and duplicates are preserved so callers can observe parameter
/// multiplicity. Keys without `=` get an empty value.
pub fn parse_query_string(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut pairs = Vec::new();

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }

        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        let value = parts.next().unwrap_or("");

        let key = urlencoding::decode(key)
            .unwrap_or_else(|_| key.into())
            .into_owned();
        let value = urlencoding::decode(value)
            .unwrap_or_else(|_| value.into())
            .into_owned();

        pairs.push((key, value));
    }

    pairs
}

/// Read the active scenario name from a location's query string.
///
/// Absent `scenario` parameter means the baseline scenario. A duplicated
/// parameter is ambiguous and fails rather than silently picking one.
pub fn extract_scenario_from_location(location: &Location) -> Result<String, MockError> {
    let mut values = parse_query_string(&location.search)
        .into_iter()
        .filter(|(key, _)| key == "scenario")
        .map(|(_, value)| value);

    let first = match values.next() {
        Some(value) => value,
        None => return Ok(DEFAULT_SCENARIO.to_string()),
    };

    let extras = values.count();
    if extras > 0 {
        return Err(MockError::AmbiguousScenario { count: extras + 1 });
    }

    Ok(first)
}
