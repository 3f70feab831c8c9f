//! Core domain types for mocks, scenarios, and responses.

pub mod mock;
pub mod response;
pub mod scenario;
