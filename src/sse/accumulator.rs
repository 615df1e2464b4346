//! Payload accumulation.
//!
//! Each data payload is parsed as a JSON object; its `textResponse` string is
//! appended to a running buffer in arrival order with no separators. Payloads
//! that fail to parse or carry no text are skipped. Skips are the common case
//! (metadata and close chunks), so they are a plain return value rather than
//! an error.

use crate::sse::parser::{data_payloads, parse_sse_line};
use crate::sse::payloads::ChatChunkPayload;

/// Why a payload contributed nothing to the accumulated text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not a JSON object
    Malformed,
    /// Valid object without a string `textResponse`
    NoText,
}

/// Result of parsing one data payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadOutcome {
    /// The payload carried a text fragment
    Fragment(String),
    /// The payload is skipped
    Skip(SkipReason),
}

/// Parse a single data payload into a fragment or a skip.
pub fn parse_payload(payload: &str) -> PayloadOutcome {
    let value: serde_json::Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(e) => {
            tracing::trace!("Skipping malformed payload: {}", e);
            return PayloadOutcome::Skip(SkipReason::Malformed);
        }
    };
    if !value.is_object() {
        tracing::trace!("Skipping non-object payload");
        return PayloadOutcome::Skip(SkipReason::Malformed);
    }
    let chunk: ChatChunkPayload = match serde_json::from_value(value) {
        Ok(chunk) => chunk,
        Err(e) => {
            tracing::trace!("Skipping malformed payload: {}", e);
            return PayloadOutcome::Skip(SkipReason::Malformed);
        }
    };

    if let Some(message) = chunk.error_message() {
        tracing::debug!("Stream chunk reported error: {}", message);
    }

    match chunk.text() {
        Some(text) => PayloadOutcome::Fragment(text.to_string()),
        None => {
            tracing::trace!(
                kind = chunk.kind().unwrap_or("unknown"),
                close = chunk.is_close(),
                "Skipping payload without textResponse"
            );
            PayloadOutcome::Skip(SkipReason::NoText)
        }
    }
}

/// Running concatenation of text fragments for one response stream.
#[derive(Debug, Default)]
pub struct PayloadAccumulator {
    text: String,
    fragments: usize,
    skipped: usize,
}

impl PayloadAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one data payload (the part after `data: `).
    ///
    /// Returns true if the payload added text.
    pub fn feed_payload(&mut self, payload: &str) -> bool {
        match parse_payload(payload) {
            PayloadOutcome::Fragment(fragment) => {
                self.text.push_str(&fragment);
                self.fragments += 1;
                true
            }
            PayloadOutcome::Skip(_) => {
                self.skipped += 1;
                false
            }
        }
    }

    /// Feed one raw wire line. Non-data lines are ignored.
    ///
    /// Returns true if the line added text.
    pub fn feed_line(&mut self, line: &str) -> bool {
        match parse_sse_line(line).data() {
            Some(payload) => self.feed_payload(payload),
            None => false,
        }
    }

    /// Text accumulated so far
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of payloads that contributed a fragment
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    /// Number of payloads skipped
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Consume the accumulator and return the final text (possibly empty)
    pub fn finish(self) -> String {
        self.text
    }
}

/// Decode and accumulate an entire line sequence.
pub fn accumulate_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut accumulator = PayloadAccumulator::new();
    for payload in data_payloads(lines) {
        accumulator.feed_payload(&payload);
    }
    accumulator.finish()
}
