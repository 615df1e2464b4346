//! Fixed diagnostic suggestion lists.
//!
//! When no real suggestions can be produced the caller still receives three
//! printable strings. The wording is fixed; callers may match on it.

/// The kinds of diagnostic triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// Network or connection failure before a response arrived
    ConnectionError,
    /// The server answered with a status other than 200
    HttpStatus,
    /// Anything else that went wrong around the request
    Unexpected,
    /// The response stream failed part-way through
    StreamProcessing,
    /// The response was received but contained no usable text
    NothingParsed,
}

impl Diagnostic {
    /// The three fixed lines for this diagnostic
    pub fn lines(&self) -> [&'static str; 3] {
        match self {
            Diagnostic::ConnectionError => [
                "Connection error",
                "Check network connection",
                "Verify API endpoint",
            ],
            Diagnostic::HttpStatus => [
                "Check API connection",
                "Make sure the model is running",
                "Verify API key",
            ],
            Diagnostic::Unexpected => [
                "Unexpected error",
                "Check logs for details",
                "Try again later",
            ],
            Diagnostic::StreamProcessing => [
                "Error processing streaming response",
                "Check logs for details",
                "Try again later",
            ],
            Diagnostic::NothingParsed => [
                "Could not parse response",
                "Try different task description",
                "Check API documentation",
            ],
        }
    }

    /// The lines as an owned suggestion list
    pub fn suggestions(&self) -> Vec<String> {
        self.lines().iter().map(|line| line.to_string()).collect()
    }

    /// Find the diagnostic whose lines equal `suggestions`, if any.
    pub fn recognize(suggestions: &[String]) -> Option<Diagnostic> {
        [
            Diagnostic::ConnectionError,
            Diagnostic::HttpStatus,
            Diagnostic::Unexpected,
            Diagnostic::StreamProcessing,
            Diagnostic::NothingParsed,
        ]
        .into_iter()
        .find(|diagnostic| suggestions.iter().map(String::as_str).eq(diagnostic.lines()))
    }
}
