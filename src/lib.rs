//! smart-todo - follow-up task suggestions for a to-do list
//!
//! Streams a completion from an LLM workspace API, reassembles the SSE
//! text fragments and extracts up to three short suggestions from it.
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod sse;
pub mod suggest;
pub mod tasks;
pub mod traits;
