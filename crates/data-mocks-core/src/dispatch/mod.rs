//! Mock classification and registration against the interception seams.
//!
//! A resolved mock set is partitioned by kind and each group is routed to its
//! dispatch routine: request/response matching, GraphQL operation matching,
//! or socket server spawning.

mod graphql;
mod http;
mod response;
mod socket;

pub use graphql::dispatch_graphql_mocks;
pub use http::dispatch_http_mocks;
pub use response::{deferred_response, mock_handler, DEFAULT_STATUS};
pub use socket::dispatch_web_socket_mocks;

use crate::types::mock::{GraphQlMock, HttpMock, Mock, WebSocketMock};

/// Resolved mocks partitioned by kind, order preserved within each group.
#[derive(Debug, Clone, Default)]
pub struct MocksByKind {
    pub http: Vec<HttpMock>,
    pub graphql: Vec<GraphQlMock>,
    pub web_socket: Vec<WebSocketMock>,
}

impl MocksByKind {
    /// Pure partition by the kind discriminant. Entries are trusted; a
    /// malformed mock is a caller contract violation, not a runtime error.
    pub fn partition(mocks: Vec<Mock>) -> Self {
        let mut partitioned = Self::default();
        for mock in mocks {
            match mock {
                Mock::Http(m) => partitioned.http.push(m),
                Mock::GraphQl(m) => partitioned.graphql.push(m),
                Mock::WebSocket(m) => partitioned.web_socket.push(m),
            }
        }
        partitioned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::mock::{HttpMethod, UrlPattern};
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    #[rstest]
    fn test_partition_preserves_order_within_groups() {
        let mocks = vec![
            Mock::WebSocket(WebSocketMock::new(
                UrlPattern::exact("ws://localhost/a"),
                Arc::new(|_server| {}),
            )),
            Mock::Http(HttpMock {
                url: UrlPattern::exact("/one"),
                method: HttpMethod::Get,
                response: json!({}),
                status: None,
                headers: None,
                delay: None,
            }),
            Mock::GraphQl(GraphQlMock {
                url: UrlPattern::exact("/graphql"),
                operations: vec![],
            }),
            Mock::Http(HttpMock {
                url: UrlPattern::exact("/two"),
                method: HttpMethod::Get,
                response: json!({}),
                status: None,
                headers: None,
                delay: None,
            }),
        ];

        let partitioned = MocksByKind::partition(mocks);
        assert_eq!(partitioned.http.len(), 2);
        assert_eq!(partitioned.http[0].url.as_str(), "/one");
        assert_eq!(partitioned.http[1].url.as_str(), "/two");
        assert_eq!(partitioned.graphql.len(), 1);
        assert_eq!(partitioned.web_socket.len(), 1);
    }

    #[rstest]
    fn test_partition_empty() {
        let partitioned = MocksByKind::partition(vec![]);
        assert!(partitioned.http.is_empty());
        assert!(partitioned.graphql.is_empty());
        assert!(partitioned.web_socket.is_empty());
    }
}
