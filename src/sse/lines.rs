//! Byte chunk to line reassembly.
//!
//! Network chunks do not respect line boundaries. `LineBuffer` holds the
//! trailing partial line between chunks and hands back complete lines with
//! the `\n` (and an optional preceding `\r`) removed.

/// Accumulates raw bytes and splits them into complete lines.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
    dropped: usize,
}

impl LineBuffer {
    /// Create an empty line buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every line it completed.
    ///
    /// Lines that are not valid UTF-8 are dropped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.pending[start..].iter().position(|&b| b == b'\n') {
            let end = start + offset;
            if let Some(line) = self.decode(start, end) {
                lines.push(line);
            }
            start = end + 1;
        }
        self.pending.drain(..start);
        lines
    }

    /// Flush the trailing partial line at end of stream.
    pub fn finish(mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let end = self.pending.len();
        self.decode(0, end)
    }

    /// Number of lines dropped because they were not valid UTF-8
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    fn decode(&mut self, start: usize, end: usize) -> Option<String> {
        let mut raw = &self.pending[start..end];
        if let Some(stripped) = raw.strip_suffix(b"\r") {
            raw = stripped;
        }
        match std::str::from_utf8(raw) {
            Ok(line) => Some(line.to_string()),
            Err(_) => {
                self.dropped += 1;
                tracing::trace!("Dropping undecodable stream line ({} bytes)", raw.len());
                None
            }
        }
    }
}
