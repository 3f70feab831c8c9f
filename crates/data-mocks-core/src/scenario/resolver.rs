//! Scenario resolution.
//!
//! Merges the baseline mock set with a named scenario's override set into one
//! deduplicated, ordered set. Merging is override-by-identity: when an
//! identity key appears in both sets the scenario's entry wins entirely, no
//! field-level merging.

use crate::error::MockError;
use crate::types::mock::{
    GraphQlMock, HttpMethod, HttpMock, Mock, MockKind, Operation, OperationType, UrlPattern,
    WebSocketMock,
};
use crate::types::scenario::{Scenarios, DEFAULT_SCENARIO};
use std::collections::HashMap;
use std::hash::Hash;

/// Identity key for request mocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HttpKey {
    url: String,
    method: HttpMethod,
}

/// Identity key for one operation within a GraphQL mock's URL group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct OperationKey {
    name: String,
    operation_type: OperationType,
}

/// Last-write-wins map that keeps first-seen order: overriding an existing key
/// replaces the value in place instead of moving it to the back.
struct OrderedOverrides<K, V> {
    entries: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash, V> OrderedOverrides<K, V> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn upsert(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&position) => self.entries[position] = value,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(value);
            }
        }
    }

    fn entry_mut(&mut self, key: K, create: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key, position);
                self.entries.push(create());
                position
            }
        };
        &mut self.entries[position]
    }

    fn into_entries(self) -> Vec<V> {
        self.entries
    }
}

/// GraphQL mocks merge one level deeper than the other kinds: per URL group,
/// operations are themselves keyed and overridden individually.
struct GraphQlGroup {
    url: UrlPattern,
    operations: OrderedOverrides<OperationKey, Operation>,
}

/// Merge the baseline mock set with the named scenario's set.
///
/// Resolving [`DEFAULT_SCENARIO`] returns the baseline unchanged, with no
/// merge performed. Any other name must be declared in the collection, even
/// as an empty list (which simply yields the baseline); an undeclared name
/// fails with [`MockError::UnknownScenario`].
///
/// The resolved set carries request mocks first, then GraphQL mocks, then
/// socket mocks, each group in first-seen order. Matching downstream is by
/// identity rather than position, but the deterministic ordering keeps runs
/// reproducible.
pub fn reduce_all_mocks_for_scenario(
    scenarios: &Scenarios,
    scenario_name: &str,
) -> Result<Vec<Mock>, MockError> {
    if scenario_name == DEFAULT_SCENARIO {
        return Ok(scenarios.default_mocks().to_vec());
    }

    let overrides = scenarios
        .get(scenario_name)
        .ok_or_else(|| MockError::UnknownScenario(scenario_name.to_string()))?;

    let mut http: OrderedOverrides<HttpKey, HttpMock> = OrderedOverrides::new();
    let mut graphql: OrderedOverrides<String, GraphQlGroup> = OrderedOverrides::new();
    let mut sockets: OrderedOverrides<String, WebSocketMock> = OrderedOverrides::new();

    // Declaring the same URL pattern under two different kinds is undefined
    // configuration; reject instead of silently picking one.
    let mut kinds: HashMap<String, MockKind> = HashMap::new();

    for mock in scenarios.default_mocks().iter().chain(overrides) {
        let url = mock.url().as_str().to_string();
        if *kinds.entry(url.clone()).or_insert_with(|| mock.kind()) != mock.kind() {
            return Err(MockError::ConflictingMockKinds(url));
        }

        match mock {
            Mock::Http(m) => http.upsert(
                HttpKey {
                    url,
                    method: m.method,
                },
                m.clone(),
            ),
            Mock::GraphQl(m) => {
                let group = graphql.entry_mut(url, || GraphQlGroup {
                    url: m.url.clone(),
                    operations: OrderedOverrides::new(),
                });
                for operation in &m.operations {
                    group.operations.upsert(
                        OperationKey {
                            name: operation.operation_name.clone(),
                            operation_type: operation.operation_type,
                        },
                        operation.clone(),
                    );
                }
            }
            Mock::WebSocket(m) => sockets.upsert(url, m.clone()),
        }
    }

    let mut resolved: Vec<Mock> = Vec::new();
    resolved.extend(http.into_entries().into_iter().map(Mock::Http));
    resolved.extend(graphql.into_entries().into_iter().map(|group| {
        Mock::GraphQl(GraphQlMock {
            url: group.url,
            operations: group.operations.into_entries(),
        })
    }));
    resolved.extend(sockets.into_entries().into_iter().map(Mock::WebSocket));

    Ok(resolved)
}
