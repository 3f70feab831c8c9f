//! Serde document types for mock definitions in scenario files.
//!
//! Socket mocks carry executable installers and are not file-representable,
//! so files may declare HTTP and GRAPHQL mocks only.

use crate::types::mock::{GraphQlMock, HttpMock, Mock};
use serde::{Deserialize, Serialize};

/// One mock entry in a scenario file, discriminated by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum MockDocument {
    #[serde(rename = "HTTP")]
    Http(HttpMock),
    #[serde(rename = "GRAPHQL")]
    GraphQl(GraphQlMock),
}

impl From<MockDocument> for Mock {
    fn from(document: MockDocument) -> Self {
        match document {
            MockDocument::Http(mock) => Mock::Http(mock),
            MockDocument::GraphQl(mock) => Mock::GraphQl(mock),
        }
    }
}
