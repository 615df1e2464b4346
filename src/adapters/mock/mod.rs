//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and streams

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
