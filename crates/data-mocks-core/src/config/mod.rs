//! Scenario configuration file loading (YAML/JSON/JSONC).

pub mod error;
pub mod mock;
pub mod parser;

pub use error::ConfigError;
pub use mock::MockDocument;
pub use parser::{load_scenarios, parse_scenarios};
