//! Error types for scenario file loading.

use thiserror::Error;

/// Scenario file loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File extension outside yaml/yml/json/jsonc
    #[error("unknown file type: {0}")]
    UnknownFileType(String),
    /// File read error
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid glob pattern
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Glob entry error
    #[error("failed to read glob entry: {0}")]
    Glob(#[from] glob::GlobError),
    /// No file declared the mandatory `default` scenario
    #[error("no 'default' scenario declared in: {0}")]
    MissingDefault(String),
}
