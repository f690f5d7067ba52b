//! Common test utilities for TCGdex tests.

use std::path::PathBuf;

use tcgdex::TcgdexClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path prefix the mock server answers under, mirroring the public API.
pub const API_PREFIX: &str = "/v2/en";

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> TcgdexClient {
    TcgdexClient::builder()
        .url(format!("{}{API_PREFIX}", server.uri()))
        .build()
        .unwrap()
}

/// Load a recorded response body from `tests/fixtures`.
pub fn fixture(name: &str) -> serde_json::Value {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name]
        .iter()
        .collect();
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&raw).unwrap()
}

/// Replay a fixture with `200 OK`.
pub fn mock_ok(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(fixture(name))
}

/// Replay a recorded TCGdex error body with its status.
#[allow(dead_code)] // Not all test files use this
pub fn mock_api_error(name: &str) -> ResponseTemplate {
    let body = fixture(name);
    let status = body["status"].as_u64().unwrap() as u16;
    ResponseTemplate::new(status).set_body_json(body)
}

/// Mount a GET mock for an endpoint path below [`API_PREFIX`].
pub async fn mock_get(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}{endpoint}")))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
