//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{mock_client, sse_event};
//!
//! let client = mock_client(MockResponse::chunks([sse_event("1. A")]));
//! ```
#![allow(dead_code)]

use smart_todo::adapters::mock::{MockHttpClient, MockResponse};
use smart_todo::client::SuggestionClient;
use smart_todo::config::AppConfig;

/// Workspace slug used by every test config.
pub const TEST_WORKSPACE: &str = "todo";

/// API key used by every test config.
pub const TEST_API_KEY: &str = "test-api-key";

/// Streaming config pointed at `base_url`.
pub fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        api_key: TEST_API_KEY.to_string(),
        model_server_base_url: base_url.to_string(),
        workspace_slug: TEST_WORKSPACE.to_string(),
        stream_timeout: 5,
        ..AppConfig::default()
    }
}

/// One SSE event carrying `text` as its `textResponse` fragment.
pub fn sse_event(text: &str) -> String {
    format!(
        "data: {}\n\n",
        serde_json::json!({ "type": "textResponseChunk", "textResponse": text, "close": false })
    )
}

/// A full SSE body with one event per fragment and a closing event.
pub fn sse_body(fragments: &[&str]) -> String {
    let mut body: String = fragments.iter().map(|f| sse_event(f)).collect();
    body.push_str("data: {\"type\":\"finalizeResponseStream\",\"close\":true}\n\n");
    body
}

/// Suggestion client backed by a mock that always answers `response`.
pub fn mock_client(response: MockResponse) -> SuggestionClient<MockHttpClient> {
    let http = MockHttpClient::new();
    http.set_response(response);
    SuggestionClient::new(http, test_config("http://mock.local/api/v1"))
}
