//! Mock implementations for testing.
//!
//! Test doubles for the trait abstractions, so the state machine can be
//! exercised without network or filesystem access.
//!
//! - [`MockHttpClient`] - HTTP client with scripted responses
//! - [`InMemorySessionStore`] - In-memory session storage

pub mod http;
pub mod session;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use session::InMemorySessionStore;
