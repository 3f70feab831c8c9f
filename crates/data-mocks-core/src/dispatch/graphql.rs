//! Registration of GraphQL-style operation mocks.
//!
//! Operations arrive either as a GET carrying `operationName` in the query
//! string, or as a POST whose body holds `{"operationName": ...}`. Both
//! handlers are registered against both client abstractions.

use super::response::{deferred_response, DEFAULT_STATUS};
use crate::intercept::{
    HandlerFuture, InterceptedRequest, MockHandler, RegisterOptions, RequestRegistrar,
};
use crate::types::mock::{GraphQlMock, HttpMethod, Operation, OperationType};
use serde_json::{json, Value};
use std::sync::Arc;

/// Answer for operations that cannot be served: unknown names, or mutations
/// requested via GET.
fn empty_errors_envelope() -> HandlerFuture {
    deferred_response(json!({"errors": []}), DEFAULT_STATUS, Default::default(), 0)
}

fn operation_response(operation: &Operation) -> HandlerFuture {
    deferred_response(
        operation.response.clone(),
        operation.status.unwrap_or(DEFAULT_STATUS),
        operation.headers.clone().unwrap_or_default(),
        operation.delay.unwrap_or(0),
    )
}

/// Extract the operation name from a request body, parsing string bodies as
/// JSON first.
fn operation_name_from_body(body: Option<&Value>) -> Option<String> {
    let value = match body {
        Some(Value::String(raw)) => serde_json::from_str::<Value>(raw).ok()?,
        Some(value) => value.clone(),
        None => return None,
    };
    value.get("operationName")?.as_str().map(str::to_owned)
}

fn get_handler(operations: Vec<Operation>) -> MockHandler {
    Arc::new(move |request: InterceptedRequest| {
        let found = request
            .query
            .get("operationName")
            .and_then(|name| operations.iter().find(|op| op.operation_name == *name));
        match found {
            // Mutations are not retrievable via GET.
            Some(op) if op.operation_type == OperationType::Query => operation_response(op),
            _ => empty_errors_envelope(),
        }
    })
}

fn post_handler(operations: Vec<Operation>) -> MockHandler {
    Arc::new(move |request: InterceptedRequest| {
        let found = operation_name_from_body(request.body.as_ref())
            .and_then(|name| operations.iter().find(|op| op.operation_name == name));
        match found {
            Some(op) => operation_response(op),
            None => empty_errors_envelope(),
        }
    })
}

/// Register a GET and a POST handler per operation mock on both client
/// abstractions.
pub fn dispatch_graphql_mocks(
    mocks: &[GraphQlMock],
    fetch: &mut dyn RequestRegistrar,
    xhr: &mut dyn RequestRegistrar,
) {
    for mock in mocks {
        let get = get_handler(mock.operations.clone());
        let post = post_handler(mock.operations.clone());

        fetch.register(
            HttpMethod::Get,
            &mock.url,
            Arc::clone(&get),
            RegisterOptions { overwrite: false },
        );
        fetch.register(
            HttpMethod::Post,
            &mock.url,
            Arc::clone(&post),
            RegisterOptions { overwrite: false },
        );
        xhr.register(
            HttpMethod::Get,
            &mock.url,
            get,
            RegisterOptions { overwrite: false },
        );
        xhr.register(
            HttpMethod::Post,
            &mock.url,
            post,
            RegisterOptions { overwrite: false },
        );
    }
}
