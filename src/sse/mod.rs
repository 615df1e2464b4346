//! SSE (Server-Sent Events) stream decoding
//!
//! Reassembles the `stream-chat` response of the workspace API into a single
//! logical text. The wire format is a sequence of lines:
//! - `data: <json>` - data payload line carrying a `textResponse` fragment
//! - Empty line - event separator (ignored)
//! - Anything else - dropped
//!
//! # Module structure
//! - `lines` - Byte chunk to line reassembly (LineBuffer)
//! - `events` - Line classification (SseLine)
//! - `parser` - Event line decoding (parse_sse_line, data_payloads)
//! - `payloads` - Internal payload deserialization structs
//! - `accumulator` - Fragment extraction and concatenation (PayloadAccumulator)

mod accumulator;
mod events;
mod lines;
mod parser;
mod payloads;

pub use accumulator::{
    accumulate_lines, parse_payload, PayloadAccumulator, PayloadOutcome, SkipReason,
};
pub use events::SseLine;
pub use lines::LineBuffer;
pub use parser::{data_payloads, parse_sse_line, DATA_PREFIX};
