//! Entry point orchestrating resolution, classification and dispatch.

use crate::dispatch::{
    dispatch_graphql_mocks, dispatch_http_mocks, dispatch_web_socket_mocks, MocksByKind,
};
use crate::error::MockError;
use crate::intercept::{RequestRegistrar, SocketServerFactory};
use crate::scenario::reduce_all_mocks_for_scenario;
use crate::types::scenario::{Scenarios, DEFAULT_SCENARIO};
use tracing::warn;

/// Passthrough configuration for an injection run.
///
/// The default posture is fail-loud: an unmatched request errors instead of
/// silently reaching the real network.
#[derive(Debug, Clone, Copy)]
pub struct MockConfig {
    /// Let unmatched fetch-style requests reach the real network
    pub allow_fetch_passthrough: bool,
    /// Let unmatched XHR-style requests reach the real network
    pub allow_xhr_passthrough: bool,
    /// Silence the warning emitted when a passthrough is enabled
    pub suppress_warnings: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            allow_fetch_passthrough: false,
            allow_xhr_passthrough: false,
            suppress_warnings: true,
        }
    }
}

/// Mock injection engine bound to its interception collaborators.
///
/// Owns the two request registrars (fetch-style and XHR-style clients) and
/// the socket server factory. The engine keeps no state between runs: every
/// [`inject_mocks`](Self::inject_mocks) call re-derives and re-registers the
/// full mock set.
#[derive(Debug)]
pub struct MockEngine<F, X, S> {
    fetch: F,
    xhr: X,
    sockets: S,
}

impl<F, X, S> MockEngine<F, X, S>
where
    F: RequestRegistrar,
    X: RequestRegistrar,
    S: SocketServerFactory,
{
    pub fn new(fetch: F, xhr: X, sockets: S) -> Self {
        Self { fetch, xhr, sockets }
    }

    /// Resolve the scenario's mock set and register every entry.
    ///
    /// `scenario_name` defaults to the baseline scenario. Fails with
    /// [`MockError::UnknownScenario`] for an undeclared scenario and with
    /// [`MockError::NoMocksDefined`] when the resolved set is empty.
    pub fn inject_mocks(
        &mut self,
        scenarios: &Scenarios,
        scenario_name: Option<&str>,
        config: &MockConfig,
    ) -> Result<(), MockError> {
        let scenario = scenario_name.unwrap_or(DEFAULT_SCENARIO);

        self.fetch.reset();
        self.xhr.reset();

        self.fetch.allow_passthrough(config.allow_fetch_passthrough);
        if config.allow_fetch_passthrough && !config.suppress_warnings {
            warn!("fetch passthrough enabled - unmatched requests will reach the real network");
        }
        // Resetting a registrar only drops registrations; the no-passthrough
        // posture has to be restored explicitly or it leaks from a prior run.
        self.xhr.allow_passthrough(false);

        let resolved = reduce_all_mocks_for_scenario(scenarios, scenario)?;
        if resolved.is_empty() {
            return Err(MockError::NoMocksDefined(scenario.to_string()));
        }

        let groups = MocksByKind::partition(resolved);
        dispatch_http_mocks(&groups.http, &mut self.fetch, &mut self.xhr);
        dispatch_graphql_mocks(&groups.graphql, &mut self.fetch, &mut self.xhr);
        dispatch_web_socket_mocks(&groups.web_socket, &mut self.sockets);

        // Enabled only after registration so passthrough catches genuinely
        // unmatched traffic.
        if config.allow_xhr_passthrough {
            self.xhr.allow_passthrough(true);
            if !config.suppress_warnings {
                warn!("XHR passthrough enabled - unmatched requests will reach the real network");
            }
        }

        Ok(())
    }

    pub fn fetch(&self) -> &F {
        &self.fetch
    }

    pub fn xhr(&self) -> &X {
        &self.xhr
    }

    pub fn sockets(&self) -> &S {
        &self.sockets
    }
}
