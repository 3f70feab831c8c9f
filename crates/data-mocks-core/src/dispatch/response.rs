//! Deferred response synthesis shared by all dispatch paths.

use crate::intercept::{HandlerFuture, MockHandler};
use crate::types::response::MockResponse;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Status code used when a mock does not declare one.
pub const DEFAULT_STATUS: u16 = 200;

/// Build a future that waits `delay_ms` and then resolves to the response.
///
/// A zero delay is permitted and still goes through the timer, so the answer
/// is always asynchronous. Once armed the timer always resolves; callers
/// wanting to abort must discard the call at a higher layer.
pub fn deferred_response(
    body: Value,
    status: u16,
    headers: HashMap<String, String>,
    delay_ms: u64,
) -> HandlerFuture {
    Box::pin(async move {
        sleep(Duration::from_millis(delay_ms)).await;
        MockResponse {
            status,
            headers,
            body,
        }
    })
}

/// Build a reusable handler answering every call with the same deferred
/// response, applying the status and delay defaults.
pub fn mock_handler(
    body: Value,
    status: Option<u16>,
    headers: Option<HashMap<String, String>>,
    delay_ms: Option<u64>,
) -> MockHandler {
    let status = status.unwrap_or(DEFAULT_STATUS);
    let headers = headers.unwrap_or_default();
    let delay_ms = delay_ms.unwrap_or(0);
    Arc::new(move |_request| deferred_response(body.clone(), status, headers.clone(), delay_ms))
}
