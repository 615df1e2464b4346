//! SSE line types
//!
//! Contains the SseLine enum describing how a single wire line was classified.

/// Represents a classified SSE line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// Data payload with the `data: ` prefix removed
    Data(String),
    /// Event type declaration (e.g., "event: message")
    Event(String),
    /// Comment / keep-alive line (starts with ':')
    Comment(String),
    /// Empty line - event separator
    Empty,
    /// Any other line, including `data:` without the trailing space
    Other(String),
}

impl SseLine {
    /// Get the data payload if this is a data line
    pub fn data(&self) -> Option<&str> {
        match self {
            SseLine::Data(payload) => Some(payload),
            _ => None,
        }
    }

    /// Consume the line, keeping the payload if this is a data line
    pub fn into_data(self) -> Option<String> {
        match self {
            SseLine::Data(payload) => Some(payload),
            _ => None,
        }
    }

    /// Check if this line carries a data payload
    pub fn is_data(&self) -> bool {
        matches!(self, SseLine::Data(_))
    }
}
