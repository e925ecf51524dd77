//! Error types for CodeLingo.
//!
//! - [`ApiError`]: typed failures of the lessons API (network, auth,
//!   validation, server, undecodable response)
//! - [`StoreError`]: failures of the local session store
//!
//! Neither ever reaches the view layer: the state machine converts both
//! into notifications at the call site.

mod api;
mod store;

pub use api::ApiError;
pub use store::StoreError;

/// Result alias for API calls.
pub type ApiResult<T> = Result<T, ApiError>;
