/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for voicera-sdk tests

use voicera_sdk::{ClientConfig, VoiceraClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the given extra configuration
#[allow(dead_code)]
pub fn client_with(server: &MockServer, config: ClientConfig) -> VoiceraClient {
    VoiceraClient::new(config.with_base_url(server.uri())).expect("client init")
}

/// Anonymous client pointed at the mock server
#[allow(dead_code)]
pub fn anonymous_client(server: &MockServer) -> VoiceraClient {
    client_with(server, ClientConfig::default())
}

/// Mock bearer token for testing
#[allow(dead_code)]
pub fn mock_access_token() -> String {
    "vc_at_0123456789abcdef".to_string()
}

/// Mock API key for testing
#[allow(dead_code)]
pub fn mock_api_key() -> String {
    "vc_key_test".to_string()
}
