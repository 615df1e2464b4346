//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (POST, streaming POST)

pub mod http;

pub use http::{ByteStream, Headers, HttpClient, HttpError, Response, StreamResponse};
