//! SSE payload deserialization structs
//!
//! Contains internal structs used to deserialize JSON data payloads
//! from the workspace `stream-chat` endpoint.

use serde::Deserialize;

/// Raw data payload from SSE data lines.
///
/// Only `textResponse` feeds the accumulated text. The other fields are kept
/// for logging and are typed loosely so that an odd value never rejects the
/// whole chunk.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChunkPayload {
    /// Incremental text fragment. Any non-string value is treated as absent.
    #[serde(rename = "textResponse", default)]
    pub text_response: Option<serde_json::Value>,
    /// Chunk kind, e.g. "textResponseChunk" or "abort"
    #[serde(rename = "type", default)]
    pub kind: Option<serde_json::Value>,
    /// Set on the final chunk of a response
    #[serde(default)]
    pub close: Option<serde_json::Value>,
    /// Error reported by the server inside the stream
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ChatChunkPayload {
    /// The text fragment, if present and a string
    pub fn text(&self) -> Option<&str> {
        self.text_response.as_ref().and_then(|v| v.as_str())
    }

    /// Chunk kind, if it is a string
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_ref().and_then(|v| v.as_str())
    }

    /// Whether the server marked this chunk as the last one
    pub fn is_close(&self) -> bool {
        self.close.as_ref().and_then(|v| v.as_bool()).unwrap_or(false)
    }

    /// The in-stream error message, if the server sent a non-null one
    pub fn error_message(&self) -> Option<String> {
        match &self.error {
            None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}
