//! Scenario-driven network mocking engine.
//!
//! Lets a test harness substitute canned responses for outbound network calls
//! (HTTP request/response, GraphQL-style operations, and socket connections),
//! selecting among named scenarios of mock data without restarting the test
//! target. The engine merges the baseline mock set with a scenario's override
//! set into one consistent set and routes each entry to the right
//! interception mechanism with the declared delay, status and header
//! semantics.
//!
//! The interception mechanisms themselves are external collaborators consumed
//! through the traits in [`intercept`]; in-memory stubs for tests live in
//! [`testing`].
//!
//! ```
//! use data_mocks_core::testing::{StubRegistrar, StubSocketFactory};
//! use data_mocks_core::{
//!     HttpMethod, HttpMock, Mock, MockConfig, MockEngine, Scenarios, UrlPattern,
//! };
//! use serde_json::json;
//!
//! let scenarios = Scenarios::new(vec![Mock::Http(HttpMock {
//!     url: UrlPattern::exact("/api/users"),
//!     method: HttpMethod::Get,
//!     response: json!({"users": []}),
//!     status: None,
//!     headers: None,
//!     delay: None,
//! })])
//! .with_scenario("failure", vec![]);
//!
//! let mut engine = MockEngine::new(
//!     StubRegistrar::new(),
//!     StubRegistrar::new(),
//!     StubSocketFactory::new(),
//! );
//! engine
//!     .inject_mocks(&scenarios, Some("failure"), &MockConfig::default())
//!     .unwrap();
//! ```

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod intercept;
pub mod scenario;
pub mod testing;
pub mod types;

pub use engine::{MockConfig, MockEngine};
pub use error::MockError;
pub use scenario::{extract_scenario_from_location, reduce_all_mocks_for_scenario, Location};
pub use types::mock::{
    GraphQlMock, HttpMethod, HttpMock, Mock, MockKind, Operation, OperationType, UrlPattern,
    WebSocketMock, WebSocketServerMock,
};
pub use types::response::MockResponse;
pub use types::scenario::{Scenarios, DEFAULT_SCENARIO};
