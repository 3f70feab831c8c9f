//! In-memory collaborator stubs.
//!
//! These implement the [`crate::intercept`] traits without any real network
//! plumbing: registrations are recorded and can be driven directly. Used by
//! this crate's own tests and usable by downstream harnesses that want to
//! assert on what the engine registered.

use crate::intercept::{
    CloseHandler, ConnectionHandler, InterceptedRequest, MessageHandler, MockHandler,
    RegisterOptions, RequestRegistrar, SocketServer, SocketServerFactory,
};
use crate::scenario::parse_query_string;
use crate::types::mock::{HttpMethod, UrlPattern};
use crate::types::response::MockResponse;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One recorded registration.
#[derive(Clone)]
pub struct Registration {
    pub method: HttpMethod,
    pub pattern: UrlPattern,
    pub handler: MockHandler,
    pub overwrite: bool,
}

/// Recording in-memory request registrar.
#[derive(Default)]
pub struct StubRegistrar {
    registrations: Vec<Registration>,
    passthrough: bool,
    resets: usize,
    log: Vec<String>,
}

impl StubRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn passthrough(&self) -> bool {
        self.passthrough
    }

    /// Number of times [`RequestRegistrar::reset`] was called.
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Ordered log of every call made against this registrar.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Route a request to the first matching registration, the way the real
    /// interception layer would, and await its handler.
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Value>,
    ) -> Option<MockResponse> {
        let path = url.split('?').next().unwrap_or(url);
        let registration = self
            .registrations
            .iter()
            .find(|r| r.method == method && (r.pattern.matches(url) || r.pattern.matches(path)))?;

        let query = parse_query_string(url.split('?').nth(1).unwrap_or(""))
            .into_iter()
            .collect();
        let request = InterceptedRequest {
            url: url.to_string(),
            query,
            body,
        };
        Some((registration.handler)(request).await)
    }
}

impl RequestRegistrar for StubRegistrar {
    fn reset(&mut self) {
        self.registrations.clear();
        self.passthrough = false;
        self.resets += 1;
        self.log.push("reset".to_string());
    }

    fn register(
        &mut self,
        method: HttpMethod,
        pattern: &UrlPattern,
        handler: MockHandler,
        options: RegisterOptions,
    ) {
        if options.overwrite {
            self.registrations
                .retain(|r| !(r.method == method && r.pattern == *pattern));
        }
        self.log
            .push(format!("register {} {}", method, pattern.as_str()));
        self.registrations.push(Registration {
            method,
            pattern: pattern.clone(),
            handler,
            overwrite: options.overwrite,
        });
    }

    fn allow_passthrough(&mut self, enabled: bool) {
        self.passthrough = enabled;
        self.log.push(format!(
            "passthrough {}",
            if enabled { "on" } else { "off" }
        ));
    }
}

/// Fake socket endpoint recording which events installers wire.
///
/// The event log lives behind an `Arc` shared with the factory, so it stays
/// observable after the engine drops the handle.
pub struct StubSocketServer {
    url: String,
    events: Arc<Mutex<Vec<String>>>,
}

impl StubSocketServer {
    fn record(&self, event: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{}: {}", self.url, event));
    }
}

impl SocketServer for StubSocketServer {
    fn on_connection(&mut self, _handler: ConnectionHandler) {
        self.record("connection");
    }

    fn on_message(&mut self, _handler: MessageHandler) {
        self.record("message");
    }

    fn on_close(&mut self, _handler: CloseHandler) {
        self.record("close");
    }

    fn send(&mut self, message: &str) {
        self.record(&format!("send {message}"));
    }

    fn url(&self) -> &str {
        &self.url
    }
}

/// Factory recording every bound endpoint and the events wired on it.
#[derive(Default)]
pub struct StubSocketFactory {
    bound: Vec<String>,
    events: Arc<Mutex<Vec<String>>>,
}

impl StubSocketFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs bound so far, in bind order.
    pub fn bound(&self) -> &[String] {
        &self.bound
    }

    /// Events wired across all endpoints, in wiring order.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl SocketServerFactory for StubSocketFactory {
    fn bind(&mut self, url: &str) -> Box<dyn SocketServer> {
        self.bound.push(url.to_string());
        Box::new(StubSocketServer {
            url: url.to_string(),
            events: Arc::clone(&self.events),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::mock_handler;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[tokio::test]
    async fn test_dispatch_routes_to_first_matching_registration() {
        let mut registrar = StubRegistrar::new();
        registrar.register(
            HttpMethod::Get,
            &UrlPattern::regex("^/api/.*$").unwrap(),
            mock_handler(json!({"which": "first"}), None, None, None),
            RegisterOptions::default(),
        );
        registrar.register(
            HttpMethod::Get,
            &UrlPattern::exact("/api/users"),
            mock_handler(json!({"which": "second"}), None, None, None),
            RegisterOptions::default(),
        );

        let response = registrar
            .dispatch(HttpMethod::Get, "/api/users", None)
            .await
            .expect("Should match");
        assert_eq!(response.body, json!({"which": "first"}));
    }

    #[rstest]
    #[tokio::test]
    async fn test_dispatch_strips_query_for_exact_patterns() {
        let mut registrar = StubRegistrar::new();
        registrar.register(
            HttpMethod::Get,
            &UrlPattern::exact("/api/users"),
            mock_handler(json!({}), None, None, None),
            RegisterOptions::default(),
        );

        assert!(registrar
            .dispatch(HttpMethod::Get, "/api/users?page=1", None)
            .await
            .is_some());
    }

    #[rstest]
    fn test_register_with_overwrite_replaces_same_identity() {
        let mut registrar = StubRegistrar::new();
        let pattern = UrlPattern::exact("/api/users");
        registrar.register(
            HttpMethod::Get,
            &pattern,
            mock_handler(json!({"v": 1}), None, None, None),
            RegisterOptions::default(),
        );
        registrar.register(
            HttpMethod::Get,
            &pattern,
            mock_handler(json!({"v": 2}), None, None, None),
            RegisterOptions { overwrite: true },
        );

        assert_eq!(registrar.registrations().len(), 1);
    }

    #[rstest]
    fn test_reset_clears_state_and_counts() {
        let mut registrar = StubRegistrar::new();
        registrar.register(
            HttpMethod::Get,
            &UrlPattern::exact("/api/users"),
            mock_handler(json!({}), None, None, None),
            RegisterOptions::default(),
        );
        registrar.allow_passthrough(true);
        registrar.reset();

        assert!(registrar.registrations().is_empty());
        assert!(!registrar.passthrough());
        assert_eq!(registrar.resets(), 1);
    }

    #[rstest]
    fn test_socket_factory_records_binds_and_events() {
        let mut factory = StubSocketFactory::new();
        let mut server = factory.bind("ws://localhost/foo");
        server.on_connection(Box::new(|| {}));
        server.send("hello");
        drop(server);

        // The endpoint's event log outlives the handle.
        assert_eq!(factory.bound(), ["ws://localhost/foo"]);
        assert_eq!(
            factory.events(),
            vec!["ws://localhost/foo: connection", "ws://localhost/foo: send hello"]
        );
    }
}
