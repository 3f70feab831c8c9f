//! Scenario extraction and resolution.
//!
//! - [`extract_scenario_from_location`]: reads the active scenario name from
//!   a location-like object's query string
//! - [`reduce_all_mocks_for_scenario`]: merges the baseline mock set with a
//!   scenario's override set into one deduplicated, ordered set

pub mod extractor;
pub mod resolver;

pub use extractor::{extract_scenario_from_location, parse_query_string, Location};
pub use resolver::reduce_all_mocks_for_scenario;
