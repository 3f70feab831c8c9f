//! Seams to the external interception mechanisms.
//!
//! The engine only registers mocks; actually intercepting client calls and
//! hosting fake socket endpoints is the job of whatever implements these
//! traits. In-memory implementations for tests live in [`crate::testing`].

use crate::types::mock::{HttpMethod, UrlPattern};
use crate::types::response::MockResponse;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future resolving to a synthesized response.
pub type HandlerFuture = Pin<Box<dyn Future<Output = MockResponse> + Send>>;

/// Handler invoked by the interception layer for a matched request.
///
/// Handlers are cheap to clone and share no mutable state; concurrent calls
/// race only against their own delay timers.
pub type MockHandler = Arc<dyn Fn(InterceptedRequest) -> HandlerFuture + Send + Sync>;

/// Request data handed to a [`MockHandler`] by the interception layer.
#[derive(Debug, Clone, Default)]
pub struct InterceptedRequest {
    /// Full request URL
    pub url: String,
    /// Parsed query parameters
    pub query: HashMap<String, String>,
    /// Request body, if any. A JSON string body is parsed by GraphQL handlers.
    pub body: Option<Value>,
}

/// Registration options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterOptions {
    /// Replace an existing registration for the same pattern and method
    /// instead of adding alongside it.
    pub overwrite: bool,
}

/// Registrar for one request/response client abstraction.
///
/// The engine registers every mock against two of these (a fetch-style client
/// and an XHR-style transport client) so both abstractions observe the same
/// mock set.
pub trait RequestRegistrar {
    /// Drop all registrations in preparation for a fresh run.
    fn reset(&mut self);

    /// Register a handler for requests matching `pattern` with `method`.
    fn register(
        &mut self,
        method: HttpMethod,
        pattern: &UrlPattern,
        handler: MockHandler,
        options: RegisterOptions,
    );

    /// Let unmatched requests reach the real network instead of failing.
    fn allow_passthrough(&mut self, enabled: bool);
}

pub type ConnectionHandler = Box<dyn FnMut() + Send>;
pub type MessageHandler = Box<dyn FnMut(&str) + Send>;
pub type CloseHandler = Box<dyn FnMut() + Send>;

/// Fake socket endpoint handle exposed to mock installers.
///
/// Construction is the engine's job; wiring events and teardown belong to the
/// caller-supplied installer and the test itself.
pub trait SocketServer {
    fn on_connection(&mut self, handler: ConnectionHandler);
    fn on_message(&mut self, handler: MessageHandler);
    fn on_close(&mut self, handler: CloseHandler);

    /// Push a message to connected clients.
    fn send(&mut self, message: &str);

    /// URL the endpoint is bound to.
    fn url(&self) -> &str;
}

/// Constructor for fake socket endpoints.
///
/// The returned box is a handle, not an owner: the engine drops it right after
/// running the installer, and the endpoint must stay up until the test tears
/// it down.
pub trait SocketServerFactory {
    fn bind(&mut self, url: &str) -> Box<dyn SocketServer>;
}
