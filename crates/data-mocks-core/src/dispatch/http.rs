//! Registration of request/response mocks.

use super::response::mock_handler;
use crate::intercept::{RegisterOptions, RequestRegistrar};
use crate::types::mock::HttpMock;
use std::sync::Arc;

/// Register each request mock on both client abstractions, so fetch-style and
/// XHR-style calls observe the same mock set.
///
/// Identical-pattern duplicates were already removed at resolve time, so
/// registration never asks the underlying mechanism to overwrite; distinct
/// patterns coexist.
pub fn dispatch_http_mocks(
    mocks: &[HttpMock],
    fetch: &mut dyn RequestRegistrar,
    xhr: &mut dyn RequestRegistrar,
) {
    for mock in mocks {
        let handler = mock_handler(
            mock.response.clone(),
            mock.status,
            mock.headers.clone(),
            mock.delay,
        );
        fetch.register(
            mock.method,
            &mock.url,
            Arc::clone(&handler),
            RegisterOptions { overwrite: false },
        );
        xhr.register(
            mock.method,
            &mock.url,
            handler,
            RegisterOptions { overwrite: false },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubRegistrar;
    use crate::types::mock::{HttpMethod, UrlPattern};
    use rstest::rstest;
    use serde_json::json;
    use std::collections::HashMap;

    fn create_mock(url: &str, method: HttpMethod) -> HttpMock {
        HttpMock {
            url: UrlPattern::exact(url),
            method,
            response: json!({"ok": true}),
            status: None,
            headers: None,
            delay: None,
        }
    }

    #[rstest]
    fn test_dispatch_registers_on_both_clients() {
        let mut fetch = StubRegistrar::new();
        let mut xhr = StubRegistrar::new();
        let mocks = vec![
            create_mock("/api/users", HttpMethod::Get),
            create_mock("/api/users", HttpMethod::Post),
        ];

        dispatch_http_mocks(&mocks, &mut fetch, &mut xhr);

        assert_eq!(fetch.registrations().len(), 2);
        assert_eq!(xhr.registrations().len(), 2);
        assert!(fetch.registrations().iter().all(|r| !r.overwrite));
    }

    #[rstest]
    #[tokio::test]
    async fn test_dispatched_handler_answers_with_body_status_headers() {
        let mut fetch = StubRegistrar::new();
        let mut xhr = StubRegistrar::new();
        let mut headers = HashMap::new();
        headers.insert("x-mocked".to_string(), "yes".to_string());
        let mocks = vec![HttpMock {
            url: UrlPattern::exact("/api/users"),
            method: HttpMethod::Get,
            response: json!({"users": [1, 2]}),
            status: Some(201),
            headers: Some(headers),
            delay: None,
        }];

        dispatch_http_mocks(&mocks, &mut fetch, &mut xhr);

        let response = fetch
            .dispatch(HttpMethod::Get, "/api/users", None)
            .await
            .expect("Should match");
        assert_eq!(response.status, 201);
        assert_eq!(response.body, json!({"users": [1, 2]}));
        assert_eq!(response.headers.get("x-mocked").map(String::as_str), Some("yes"));

        // Same mock observable through the XHR-style client.
        let response = xhr
            .dispatch(HttpMethod::Get, "/api/users", None)
            .await
            .expect("Should match");
        assert_eq!(response.status, 201);
    }

    #[rstest]
    #[tokio::test]
    async fn test_dispatched_handler_defaults_status_to_200() {
        let mut fetch = StubRegistrar::new();
        let mut xhr = StubRegistrar::new();
        dispatch_http_mocks(&[create_mock("/api/users", HttpMethod::Delete)], &mut fetch, &mut xhr);

        let response = fetch
            .dispatch(HttpMethod::Delete, "/api/users", None)
            .await
            .expect("Should match");
        assert_eq!(response.status, 200);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unmatched_method_is_not_answered() {
        let mut fetch = StubRegistrar::new();
        let mut xhr = StubRegistrar::new();
        dispatch_http_mocks(&[create_mock("/api/users", HttpMethod::Get)], &mut fetch, &mut xhr);

        assert!(fetch
            .dispatch(HttpMethod::Post, "/api/users", None)
            .await
            .is_none());
    }
}
