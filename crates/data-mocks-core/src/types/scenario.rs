//! Scenario collection types.

use crate::types::mock::Mock;
use std::collections::HashMap;

/// Name of the mandatory baseline scenario.
pub const DEFAULT_SCENARIO: &str = "default";

/// Collection of mocks keyed by scenario name.
///
/// The baseline set always exists under [`DEFAULT_SCENARIO`] (by construction);
/// named scenarios hold override sets merged on top of it at resolve time. An
/// explicitly declared empty scenario is distinct from an undeclared one: the
/// former resolves to the baseline, the latter is an error.
#[derive(Debug, Clone, Default)]
pub struct Scenarios {
    default: Vec<Mock>,
    overrides: HashMap<String, Vec<Mock>>,
}

impl Scenarios {
    pub fn new(default_mocks: Vec<Mock>) -> Self {
        Self {
            default: default_mocks,
            overrides: HashMap::new(),
        }
    }

    /// Builder-style scenario declaration.
    pub fn with_scenario(mut self, name: impl Into<String>, mocks: Vec<Mock>) -> Self {
        self.add_scenario(name, mocks);
        self
    }

    /// Declare a scenario. Declaring [`DEFAULT_SCENARIO`] replaces the baseline.
    pub fn add_scenario(&mut self, name: impl Into<String>, mocks: Vec<Mock>) {
        let name = name.into();
        if name == DEFAULT_SCENARIO {
            self.default = mocks;
        } else {
            self.overrides.insert(name, mocks);
        }
    }

    /// The baseline mock set.
    pub fn default_mocks(&self) -> &[Mock] {
        &self.default
    }

    /// Mock list for a scenario; `None` when the scenario is not declared.
    pub fn get(&self, name: &str) -> Option<&[Mock]> {
        if name == DEFAULT_SCENARIO {
            Some(&self.default)
        } else {
            self.overrides.get(name).map(Vec::as_slice)
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
