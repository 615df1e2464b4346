//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```ignore
//! use smart_todo::prelude::*;
//! ```

// Client and configuration
pub use crate::client::SuggestionClient;
pub use crate::config::AppConfig;

// Errors
pub use crate::error::{ConfigError, SuggestError, SuggestResult};

// Extraction
pub use crate::suggest::{extract_suggestions, Diagnostic, Strategy, MAX_SUGGESTIONS};

// Transport
pub use crate::traits::{HttpClient, HttpError};

pub use crate::tasks::TaskList;
