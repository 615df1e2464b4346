//! Suggestion request errors.

use thiserror::Error;

use crate::suggest::Diagnostic;
use crate::traits::HttpError;

/// Faults that stop a suggestion request from reaching the extractor.
#[derive(Debug, Clone, Error)]
pub enum SuggestError {
    /// The request never got a response
    #[error("Request failed: {0}")]
    Connection(HttpError),

    /// The server answered with a status other than 200
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body failed while being read
    #[error("Error processing streaming response: {0}")]
    Stream(HttpError),

    /// Anything else
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SuggestError {
    /// Classify an error returned while sending the request.
    pub fn from_request(err: HttpError) -> Self {
        match err {
            HttpError::Other(message) => SuggestError::Unexpected(message),
            other => SuggestError::Connection(other),
        }
    }

    /// The diagnostic list shown to the user for this error.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            SuggestError::Connection(_) => Diagnostic::ConnectionError,
            SuggestError::Status { .. } => Diagnostic::HttpStatus,
            SuggestError::Stream(_) => Diagnostic::StreamProcessing,
            SuggestError::Unexpected(_) => Diagnostic::Unexpected,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SuggestError::Connection(HttpError::Timeout(_)) => "E_NET_TIMEOUT",
            SuggestError::Connection(_) => "E_NET_CONN",
            SuggestError::Status { .. } => "E_NET_HTTP",
            SuggestError::Stream(HttpError::Timeout(_)) => "E_STREAM_TIMEOUT",
            SuggestError::Stream(_) => "E_STREAM",
            SuggestError::Unexpected(_) => "E_UNEXPECTED",
        }
    }
}
