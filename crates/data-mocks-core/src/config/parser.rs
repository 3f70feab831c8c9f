//! Scenario file parsing (YAML/JSON/JSONC).
//!
//! A scenario file maps scenario names to mock lists; the `default` key holds
//! the baseline set. Files are plain data, so only HTTP and GRAPHQL mocks can
//! appear in them.

use crate::config::error::ConfigError;
use crate::config::mock::MockDocument;
use crate::types::mock::Mock;
use crate::types::scenario::{Scenarios, DEFAULT_SCENARIO};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Raw scenario document: scenario name to mock list.
type ScenarioDocument = BTreeMap<String, Vec<MockDocument>>;

/// Scenario file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get file type from path extension.
pub fn get_file_type(path: &str) -> ConfigFileType {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        "jsonc" => ConfigFileType::Jsonc,
        _ => ConfigFileType::Unknown,
    }
}

#[derive(PartialEq)]
enum StripState {
    Code,
    Str,
    StrEscape,
    LineComment,
    BlockComment,
}

/// Strip `//` and `/* */` comments from JSONC content, leaving string
/// contents intact.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut state = StripState::Code;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            StripState::Code => match c {
                '"' => {
                    state = StripState::Str;
                    result.push(c);
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = StripState::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = StripState::BlockComment;
                }
                _ => result.push(c),
            },
            StripState::Str => {
                match c {
                    '\\' => state = StripState::StrEscape,
                    '"' => state = StripState::Code,
                    _ => {}
                }
                result.push(c);
            }
            StripState::StrEscape => {
                state = StripState::Str;
                result.push(c);
            }
            StripState::LineComment => {
                if c == '\n' || c == '\r' {
                    state = StripState::Code;
                    result.push(c);
                }
            }
            StripState::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = StripState::Code;
                }
            }
        }
    }

    result
}

fn parse_document(content: &str, path: &str) -> Result<ScenarioDocument, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => serde_yaml::from_str(content).map_err(ConfigError::from),
        ConfigFileType::Json => serde_json::from_str(content).map_err(ConfigError::from),
        ConfigFileType::Jsonc => {
            serde_json::from_str(&strip_json_comments(content)).map_err(ConfigError::from)
        }
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

fn into_mocks(documents: Vec<MockDocument>) -> Vec<Mock> {
    documents.into_iter().map(Mock::from).collect()
}

/// Parse scenario content into a [`Scenarios`] collection, dispatching on the
/// path's extension. The document must declare the `default` scenario.
pub fn parse_scenarios(content: &str, path: &str) -> Result<Scenarios, ConfigError> {
    let mut document = parse_document(content, path)?;
    let default = document
        .remove(DEFAULT_SCENARIO)
        .ok_or_else(|| ConfigError::MissingDefault(path.to_string()))?;

    let mut scenarios = Scenarios::new(into_mocks(default));
    for (name, mocks) in document {
        scenarios.add_scenario(name, into_mocks(mocks));
    }
    Ok(scenarios)
}

/// Load scenarios from a path or glob pattern, merging documents in path
/// order. A scenario redeclared in a later file replaces the earlier list;
/// the `default` scenario must appear in at least one file.
pub fn load_scenarios(pattern: &str) -> Result<Scenarios, ConfigError> {
    let mut default: Option<Vec<Mock>> = None;
    let mut named: Vec<(String, Vec<Mock>)> = Vec::new();

    for entry in glob::glob(pattern)? {
        let path = entry?;
        let content = fs::read_to_string(&path)?;
        let mut document = parse_document(&content, &path.to_string_lossy())?;

        if let Some(mocks) = document.remove(DEFAULT_SCENARIO) {
            default = Some(into_mocks(mocks));
        }
        for (name, mocks) in document {
            named.push((name, into_mocks(mocks)));
        }
    }

    let default = default.ok_or_else(|| ConfigError::MissingDefault(pattern.to_string()))?;
    let mut scenarios = Scenarios::new(default);
    for (name, mocks) in named {
        scenarios.add_scenario(name, mocks);
    }
    Ok(scenarios)
}
