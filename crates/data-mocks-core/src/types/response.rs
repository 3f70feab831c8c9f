//! Synthesized response types.

use serde_json::Value;
use std::collections::HashMap;

/// Response payload shared by all dispatch paths.
///
/// This is what a mock handler resolves to once its delay timer has elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, insertion order not significant
    pub headers: HashMap<String, String>,
    /// Response body (JSON)
    pub body: Value,
}
