//! Event line decoding
//!
//! Classifies raw lines and filters a line sequence down to the payloads of
//! data-bearing lines.

use crate::sse::events::SseLine;

/// Literal prefix marking a data line. The trailing space is required.
pub const DATA_PREFIX: &str = "data: ";

/// Parse a single SSE line into its component type
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(payload) = line.strip_prefix(DATA_PREFIX) {
        return SseLine::Data(payload.to_string());
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("event:") {
        return SseLine::Event(rest.trim().to_string());
    }

    SseLine::Other(line.to_string())
}

/// Lazily yield the payload of every `data: ` line, dropping everything else.
///
/// The returned iterator is bounded by `lines` and, like it, is single-pass.
pub fn data_payloads<I, S>(lines: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_sse_line(line.as_ref()).into_data())
}
