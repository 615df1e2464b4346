//! Suggestion client for the LLM workspace API.
//!
//! Sends the follow-up prompt for a task, reassembles the (optionally
//! streamed) response text and runs the extraction chain on it. Every failure
//! is turned into a fixed diagnostic list, so [`SuggestionClient::suggest`]
//! always returns between one and three printable strings.

use futures_util::StreamExt;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{SuggestError, SuggestResult};
use crate::sse::{
    accumulate_lines, parse_payload, LineBuffer, PayloadAccumulator, PayloadOutcome, DATA_PREFIX,
};
use crate::suggest::{extract, ChatRequest};
use crate::traits::{ByteStream, Headers, HttpClient, HttpError};

/// The only status treated as success.
pub const SUCCESS_STATUS: u16 = 200;

/// Error bodies are truncated to this many bytes before logging.
const MAX_ERROR_BODY_BYTES: usize = 4096;

/// Client that asks the workspace API for follow-up task suggestions.
///
/// `stream_timeout` bounds the wait for the response headers and then each
/// wait for the next body chunk, never the stream as a whole. Holds no
/// per-request state, so one client can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct SuggestionClient<C: HttpClient> {
    http: C,
    config: AppConfig,
}

impl<C: HttpClient> SuggestionClient<C> {
    /// Create a client over an HTTP implementation and settings.
    pub fn new(http: C, config: AppConfig) -> Self {
        Self { http, config }
    }

    /// The settings in use
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Get up to three suggestions for `task`.
    ///
    /// Never fails: transport and protocol faults are reported as one of the
    /// fixed diagnostic lists.
    pub async fn suggest(&self, task: &str) -> Vec<String> {
        match self.try_suggest(task).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                tracing::warn!(code = err.error_code(), "Suggestion request failed: {}", err);
                err.diagnostic().suggestions()
            }
        }
    }

    /// Like [`suggest`](Self::suggest) but exposes transport faults.
    ///
    /// A response that arrives but contains nothing usable is still `Ok`,
    /// carrying the "could not parse" list.
    pub async fn try_suggest(&self, task: &str) -> SuggestResult<Vec<String>> {
        let text = self.fetch_text(task).await?;
        tracing::debug!("Collected response text ({} chars)", text.chars().count());

        let extraction = extract(&text);
        match extraction.strategy() {
            Some(strategy) => tracing::info!("Extracted suggestions using {}", strategy),
            None => tracing::info!("No suggestions found in response"),
        }
        Ok(extraction.into_suggestions())
    }

    /// Send the request and return the reassembled response text.
    pub async fn fetch_text(&self, task: &str) -> SuggestResult<String> {
        let url = self.config.chat_url();
        let headers = self.config.headers();
        let request = ChatRequest::for_task(task, &self.config.session_id);
        let body =
            serde_json::to_string(&request).map_err(|e| SuggestError::Unexpected(e.to_string()))?;

        tracing::debug!(url = %url, stream = self.config.stream, "Sending suggestion request");

        if self.config.stream {
            self.fetch_streamed(&url, &body, &headers).await
        } else {
            self.fetch_complete(&url, &body, &headers).await
        }
    }

    async fn fetch_streamed(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> SuggestResult<String> {
        let timeout = self.config.timeout();
        let response = tokio::time::timeout(timeout, self.http.post_stream(url, body, headers))
            .await
            .map_err(|_| SuggestError::Connection(timeout_error("response headers", timeout)))?
            .map_err(SuggestError::from_request)?;

        tracing::debug!(status = response.status, "Response received");

        if response.status != SUCCESS_STATUS {
            let body = read_error_body(response.body, timeout).await;
            return Err(SuggestError::Status {
                status: response.status,
                body,
            });
        }

        read_stream_text(response.body, timeout).await
    }

    async fn fetch_complete(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> SuggestResult<String> {
        let timeout = self.config.timeout();
        let response = tokio::time::timeout(timeout, self.http.post(url, body, headers))
            .await
            .map_err(|_| SuggestError::Connection(timeout_error("response", timeout)))?
            .map_err(SuggestError::from_request)?;

        tracing::debug!(status = response.status, "Response received");

        let text = response.text_lossy();
        if response.status != SUCCESS_STATUS {
            return Err(SuggestError::Status {
                status: response.status,
                body: truncate_body(text),
            });
        }

        Ok(text_from_body(&text))
    }
}

fn timeout_error(waiting_for: &str, timeout: Duration) -> HttpError {
    HttpError::Timeout(format!(
        "no {} within {}s",
        waiting_for,
        timeout.as_secs_f32()
    ))
}

/// Read an SSE body to the end and return the accumulated text.
///
/// Each wait for the next chunk is bounded by `idle_timeout`; a slow stream
/// that keeps delivering is read to the end. A chunk error or an expired wait
/// aborts the read with [`SuggestError::Stream`].
pub async fn read_stream_text(
    mut body: ByteStream,
    idle_timeout: Duration,
) -> SuggestResult<String> {
    let mut lines = LineBuffer::new();
    let mut accumulator = PayloadAccumulator::new();

    loop {
        let next = tokio::time::timeout(idle_timeout, body.next())
            .await
            .unwrap_or_else(|_| Some(Err(timeout_error("stream data", idle_timeout))));
        let Some(chunk) = next else {
            break;
        };
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(err) => {
                tracing::warn!(
                    "Stream failed after {} fragments ({} chars): {}",
                    accumulator.fragments(),
                    accumulator.text().len(),
                    err
                );
                return Err(SuggestError::Stream(err));
            }
        };
        for line in lines.push(&chunk) {
            accumulator.feed_line(&line);
        }
    }
    let dropped = lines.dropped();
    if let Some(line) = lines.finish() {
        accumulator.feed_line(&line);
    }

    tracing::debug!(
        fragments = accumulator.fragments(),
        skipped = accumulator.skipped(),
        dropped_lines = dropped,
        "Stream complete"
    );
    Ok(accumulator.finish())
}

/// Text of a non-streamed body.
///
/// The body is normally one JSON object; an SSE-framed body is decoded as a
/// stream instead.
pub fn text_from_body(body: &str) -> String {
    if body.lines().any(|line| line.starts_with(DATA_PREFIX)) {
        return accumulate_lines(body.lines());
    }
    match parse_payload(body.trim()) {
        PayloadOutcome::Fragment(text) => text,
        PayloadOutcome::Skip(reason) => {
            tracing::debug!("Response body has no text: {:?}", reason);
            String::new()
        }
    }
}

async fn read_error_body(mut body: ByteStream, idle_timeout: Duration) -> String {
    let mut bytes = Vec::new();
    while let Ok(Some(Ok(chunk))) = tokio::time::timeout(idle_timeout, body.next()).await {
        bytes.extend_from_slice(&chunk);
        if bytes.len() >= MAX_ERROR_BODY_BYTES {
            break;
        }
    }
    truncate_body(String::from_utf8_lossy(&bytes).into_owned())
}

fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY_BYTES {
        let mut end = MAX_ERROR_BODY_BYTES;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    body
}
