//! Error types for Smart Todo.
//!
//! - **SuggestError**: faults around a suggestion request. Each one maps to a
//!   fixed [`Diagnostic`](crate::suggest::Diagnostic) list, so callers of
//!   [`SuggestionClient::suggest`](crate::client::SuggestionClient::suggest)
//!   never see it directly.
//! - **ConfigError**: problems reading or validating the config file.
//!
//! | Error | Diagnostic |
//! |-------|------------|
//! | Connection, timeout, invalid URL | ConnectionError |
//! | Status other than 200 | HttpStatus |
//! | Body stream failed part-way | StreamProcessing |
//! | Anything else | Unexpected |

mod config;
mod suggest;

pub use config::ConfigError;
pub use suggest::SuggestError;

/// Type alias for Results of suggestion requests.
pub type SuggestResult<T> = Result<T, SuggestError>;
