//! Client for the remote lessons service.

mod client;

pub use client::{LessonApiClient, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
