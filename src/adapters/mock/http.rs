//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses, chunked streams or errors for testing purposes.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response, StreamResponse};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a complete response
    Success(Response),
    /// Fail before any response arrives
    Error(HttpError),
    /// Return a status and a body delivered as chunks; a chunk may be an error
    Stream {
        status: u16,
        chunks: Vec<Result<Bytes, HttpError>>,
    },
}

impl MockResponse {
    /// A 200 stream whose chunks are the given strings.
    pub fn chunks<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockResponse::Stream {
            status: 200,
            chunks: chunks
                .into_iter()
                .map(|chunk| Ok(Bytes::from(chunk.into())))
                .collect(),
        }
    }

    /// A 200 SSE stream with one `data: {"textResponse": ...}` event per fragment.
    pub fn sse_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::chunks(fragments.into_iter().map(|fragment| {
            let payload = serde_json::json!({ "textResponse": fragment.as_ref() });
            format!("data: {}\n\n", payload)
        }))
    }

    /// A complete response with the given status and body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }
}

/// Mock HTTP client for testing.
///
/// Every request gets the configured response and is recorded.
///
/// # Example
///
/// ```ignore
/// use smart_todo::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(MockResponse::sse_fragments(["1. A\n", "2. B"]));
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Response returned for every request
    response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the response returned for every request.
    pub fn set_response(&self, response: MockResponse) {
        let mut default = self.response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self) -> Option<MockResponse> {
        self.response.lock().unwrap().clone()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));

        match self.get_response() {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Stream { status, chunks }) => {
                let mut body = Vec::new();
                for chunk in chunks {
                    body.extend_from_slice(&chunk?);
                }
                Ok(Response::new(status, Bytes::from(body)))
            }
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }

    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<StreamResponse, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));

        match self.get_response() {
            Some(MockResponse::Stream { status, chunks }) => {
                let stream = futures::stream::iter(chunks);
                Ok(StreamResponse::new(status, Box::pin(stream)))
            }
            Some(MockResponse::Success(response)) => {
                let stream = futures::stream::iter(vec![Ok(response.body)]);
                Ok(StreamResponse {
                    status: response.status,
                    headers: response.headers,
                    body: Box::pin(stream),
                })
            }
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
