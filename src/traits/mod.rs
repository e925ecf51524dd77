//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP operations used by the lessons API client
//! - [`SessionStorage`] - Persistence of the session identifiers

pub mod http;
pub mod session;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use session::SessionStorage;
