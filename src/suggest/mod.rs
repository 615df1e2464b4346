//! Suggestion extraction.
//!
//! Turns the accumulated response text into at most three short follow-up
//! task strings, falling back to fixed diagnostic lists when nothing usable
//! is found.
//!
//! # Module structure
//! - `strategies` - Individual pure extraction strategies
//! - `extractor` - The ordered strategy chain
//! - `diagnostics` - Fixed diagnostic suggestion triples
//! - `prompt` - Prompt text and chat request body

mod diagnostics;
mod extractor;
mod prompt;
pub mod strategies;

pub use diagnostics::Diagnostic;
pub use extractor::{extract, extract_suggestions, Extraction, Strategy, MAX_SUGGESTIONS};
pub use prompt::{build_prompt, ChatRequest};
