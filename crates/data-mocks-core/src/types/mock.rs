//! Core mock definition types.

use crate::error::MockError;
use crate::intercept::SocketServer;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// HTTP method for request mocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = MockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(MockError::UnrecognisedVerb(s.to_string())),
        }
    }
}

impl Serialize for HttpMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HttpMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// URL pattern - an exact string or a compiled regular expression.
///
/// Equality and hashing go by the pattern's source string, which is also the
/// identity key used when merging scenarios, so an exact pattern and a regex
/// pattern with the same source are the same identity.
#[derive(Debug, Clone)]
pub enum UrlPattern {
    Exact(String),
    Regex(Regex),
}

impl UrlPattern {
    pub fn exact(url: impl Into<String>) -> Self {
        UrlPattern::Exact(url.into())
    }

    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(UrlPattern::Regex)
    }

    /// Parse a pattern string. A `regex:` prefix yields a regex pattern,
    /// anything else is matched exactly.
    pub fn parse(s: &str) -> Result<Self, regex::Error> {
        match s.strip_prefix("regex:") {
            Some(pattern) => Self::regex(pattern),
            None => Ok(Self::exact(s)),
        }
    }

    /// Pattern source string, used as the URL part of identity keys.
    pub fn as_str(&self) -> &str {
        match self {
            UrlPattern::Exact(s) => s,
            UrlPattern::Regex(r) => r.as_str(),
        }
    }

    pub fn matches(&self, url: &str) -> bool {
        match self {
            UrlPattern::Exact(s) => s == url,
            UrlPattern::Regex(r) => r.is_match(url),
        }
    }
}

impl PartialEq for UrlPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for UrlPattern {}

impl Hash for UrlPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Serialize for UrlPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            UrlPattern::Exact(s) => serializer.serialize_str(s),
            UrlPattern::Regex(r) => serializer.serialize_str(&format!("regex:{}", r.as_str())),
        }
    }
}

impl<'de> Deserialize<'de> for UrlPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UrlPattern::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Request/response mock answering one `(url, method)` identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpMock {
    /// URL pattern to register the mock under
    pub url: UrlPattern,
    /// HTTP method to match
    pub method: HttpMethod,
    /// Response body (JSON)
    pub response: Value,
    /// HTTP status code, 200 when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Response headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Delay in milliseconds before the response resolves, 0 when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

/// Operation kind inside a GraphQL mock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
}

/// One named query or mutation definition inside a GraphQL mock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    /// Query or mutation
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    /// Operation name, unique within its mock for matching purposes
    #[serde(rename = "operationName")]
    pub operation_name: String,
    /// Response body (JSON)
    pub response: Value,
    /// HTTP status code, 200 when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Response headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Delay in milliseconds before the response resolves, 0 when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

/// GraphQL-style mock holding the operations answerable at one URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQlMock {
    /// URL pattern to register the GET and POST handlers under
    pub url: UrlPattern,
    /// Answerable operations
    pub operations: Vec<Operation>,
}

/// Installer wiring caller-supplied behavior onto a fake socket server.
pub type WebSocketServerMock = Arc<dyn Fn(&mut dyn SocketServer) + Send + Sync>;

/// Socket mock: a fake server endpoint plus the installer that wires its
/// connection/message/close behavior.
#[derive(Clone)]
pub struct WebSocketMock {
    /// URL the fake server is bound to
    pub url: UrlPattern,
    /// Caller-supplied wiring, invoked once per injection run
    pub installer: WebSocketServerMock,
}

impl WebSocketMock {
    pub fn new(url: UrlPattern, installer: WebSocketServerMock) -> Self {
        Self { url, installer }
    }
}

impl fmt::Debug for WebSocketMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebSocketMock")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl PartialEq for WebSocketMock {
    fn eq(&self, other: &Self) -> bool {
        // Installers are opaque; compare them by pointer identity.
        self.url == other.url && Arc::ptr_eq(&self.installer, &other.installer)
    }
}

/// Mock kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockKind {
    Http,
    GraphQl,
    WebSocket,
}

impl MockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MockKind::Http => "HTTP",
            MockKind::GraphQl => "GRAPHQL",
            MockKind::WebSocket => "WEBSOCKET",
        }
    }
}

/// A mock definition - one of the three supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Mock {
    Http(HttpMock),
    GraphQl(GraphQlMock),
    WebSocket(WebSocketMock),
}

impl Mock {
    /// URL pattern this mock is registered under.
    pub fn url(&self) -> &UrlPattern {
        match self {
            Mock::Http(m) => &m.url,
            Mock::GraphQl(m) => &m.url,
            Mock::WebSocket(m) => &m.url,
        }
    }

    pub fn kind(&self) -> MockKind {
        match self {
            Mock::Http(_) => MockKind::Http,
            Mock::GraphQl(_) => MockKind::GraphQl,
            Mock::WebSocket(_) => MockKind::WebSocket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("GET", HttpMethod::Get)]
    #[case("get", HttpMethod::Get)]
    #[case("POST", HttpMethod::Post)]
    #[case("PUT", HttpMethod::Put)]
    #[case("PATCH", HttpMethod::Patch)]
    #[case("delete", HttpMethod::Delete)]
    fn test_http_method_from_str(#[case] input: &str, #[case] expected: HttpMethod) {
        assert_eq!(input.parse::<HttpMethod>().unwrap(), expected);
    }

    #[rstest]
    #[case("HEAD")]
    #[case("OPTIONS")]
    #[case("GRAPHQL")]
    #[case("")]
    fn test_http_method_from_str_unrecognised(#[case] input: &str) {
        let error = input.parse::<HttpMethod>().unwrap_err();
        assert_eq!(error, MockError::UnrecognisedVerb(input.to_string()));
    }

    #[rstest]
    #[case(HttpMethod::Get, "\"GET\"")]
    #[case(HttpMethod::Post, "\"POST\"")]
    #[case(HttpMethod::Delete, "\"DELETE\"")]
    fn test_http_method_serde_roundtrip(#[case] method: HttpMethod, #[case] expected: &str) {
        let json = serde_json::to_string(&method).expect("Should serialize");
        assert_eq!(json, expected);
        let deserialized: HttpMethod = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(deserialized, method);
    }

    #[rstest]
    fn test_http_method_deserialize_unrecognised() {
        let result: Result<HttpMethod, _> = serde_json::from_str("\"FETCH\"");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unrecognised HTTP method"));
    }

    #[rstest]
    #[case("/api/users", "/api/users", true)]
    #[case("/api/users", "/api/users/1", false)]
    #[case("regex:^/api/users/\\d+$", "/api/users/123", true)]
    #[case("regex:^/api/users/\\d+$", "/api/users/abc", false)]
    #[case("regex:graphql", "/api/graphql", true)]
    fn test_url_pattern_parse_and_match(
        #[case] pattern: &str,
        #[case] url: &str,
        #[case] expected: bool,
    ) {
        let pattern = UrlPattern::parse(pattern).expect("Should parse");
        assert_eq!(pattern.matches(url), expected);
    }

    #[rstest]
    fn test_url_pattern_parse_invalid_regex() {
        assert!(UrlPattern::parse("regex:[invalid").is_err());
    }

    #[rstest]
    fn test_url_pattern_identity_by_source() {
        let exact = UrlPattern::exact("/api/users");
        let regex = UrlPattern::regex("/api/users").unwrap();
        assert_eq!(exact, regex);
        assert_eq!(exact.as_str(), "/api/users");
        assert_eq!(regex.as_str(), "/api/users");
    }

    #[rstest]
    fn test_url_pattern_serde_roundtrip() {
        let pattern = UrlPattern::regex("^/api/.*$").unwrap();
        let json = serde_json::to_string(&pattern).expect("Should serialize");
        assert_eq!(json, "\"regex:^/api/.*$\"");
        let deserialized: UrlPattern = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(deserialized, pattern);

        let pattern = UrlPattern::exact("/api/users");
        let json = serde_json::to_string(&pattern).expect("Should serialize");
        assert_eq!(json, "\"/api/users\"");
        let deserialized: UrlPattern = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(deserialized, pattern);
    }

    #[rstest]
    #[case("status")]
    #[case("headers")]
    #[case("delay")]
    fn test_http_mock_optional_fields_omitted_when_none(#[case] field: &str) {
        let mock = HttpMock {
            url: UrlPattern::exact("/api/users"),
            method: HttpMethod::Get,
            response: json!({"users": []}),
            status: None,
            headers: None,
            delay: None,
        };

        let json = serde_json::to_string(&mock).expect("Should serialize");
        assert!(
            !json.contains(field),
            "Field '{}' should be omitted when None",
            field
        );

        let deserialized: HttpMock = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(deserialized, mock);
    }

    #[rstest]
    fn test_operation_serde_field_names() {
        let operation = Operation {
            operation_type: OperationType::Mutation,
            operation_name: "CreateUser".to_string(),
            response: json!({"data": {"id": 1}}),
            status: Some(201),
            headers: None,
            delay: None,
        };

        let json = serde_json::to_string(&operation).expect("Should serialize");
        assert!(json.contains("\"type\":\"mutation\""));
        assert!(json.contains("\"operationName\":\"CreateUser\""));

        let deserialized: Operation = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(deserialized, operation);
    }

    #[rstest]
    fn test_web_socket_mock_equality_by_installer_pointer() {
        let installer: WebSocketServerMock = Arc::new(|_server| {});
        let a = WebSocketMock::new(
            UrlPattern::exact("ws://localhost/foo"),
            Arc::clone(&installer),
        );
        let b = a.clone();
        assert_eq!(a, b);

        let other = WebSocketMock::new(
            UrlPattern::exact("ws://localhost/foo"),
            Arc::new(|_server| {}),
        );
        assert_ne!(a, other);
    }

    #[rstest]
    fn test_mock_kind_and_url() {
        let mock = Mock::Http(HttpMock {
            url: UrlPattern::exact("/api/users"),
            method: HttpMethod::Get,
            response: json!([]),
            status: None,
            headers: None,
            delay: None,
        });
        assert_eq!(mock.kind(), MockKind::Http);
        assert_eq!(mock.kind().as_str(), "HTTP");
        assert_eq!(mock.url().as_str(), "/api/users");

        let mock = Mock::GraphQl(GraphQlMock {
            url: UrlPattern::exact("/graphql"),
            operations: vec![],
        });
        assert_eq!(mock.kind(), MockKind::GraphQl);

        let mock = Mock::WebSocket(WebSocketMock::new(
            UrlPattern::exact("ws://localhost/foo"),
            Arc::new(|_server| {}),
        ));
        assert_eq!(mock.kind(), MockKind::WebSocket);
    }
}
