#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use axum_test::TestServer;

#[cfg(test)]
use wiremock::MockServer;

#[cfg(test)]
use crate::core::config::FoundryConfig;
#[cfg(test)]
use crate::features::agent::clients::FoundryClient;
#[cfg(test)]
use crate::features::agent::routes as agent_routes;
#[cfg(test)]
use crate::features::agent::services::AgentInvocationService;

/// Foundry settings pointing at a wiremock server, with polling fast enough
/// for tests
#[cfg(test)]
pub fn test_foundry_config(mock: &MockServer) -> FoundryConfig {
    FoundryConfig {
        endpoint: mock.uri(),
        api_key: "test-key".to_string(),
        default_agent_id: Some("agent-default".to_string()),
        poll_interval: Duration::from_millis(10),
        poll_timeout: Duration::from_secs(5),
    }
}

/// Agent feature router wired to whatever `config.endpoint` points at
#[cfg(test)]
pub fn agent_test_server(config: FoundryConfig) -> TestServer {
    let client = Arc::new(FoundryClient::new(&config));
    let service = Arc::new(AgentInvocationService::new(client, &config));
    TestServer::new(agent_routes::routes(service)).expect("failed to start test server")
}
