//! Failures of the lessons API.
//!
//! A wrong exercise answer is not an error: the check call returns
//! `Ok(false)` for it.

use std::fmt;

use crate::traits::HttpError;

/// Typed failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received (connection refused, timeout, bad URL).
    Network { message: String },

    /// Credentials rejected, or the bearer token is invalid or expired.
    Auth { message: String },

    /// A required selection is missing or unsupported.
    Validation { message: String },

    /// Any other non-2xx response.
    Server { status: u16, message: String },

    /// A 2xx response whose body did not decode.
    InvalidResponse { message: String },
}

impl ApiError {
    pub fn auth(message: impl Into<String>) -> Self {
        ApiError::Auth {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    /// Message suitable for an error notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => "Network error. Please try again.".to_string(),
            ApiError::Auth { message } if message.is_empty() => {
                "Your session has expired. Please sign in again.".to_string()
            }
            ApiError::Auth { message } => message.clone(),
            ApiError::Validation { message } => message.clone(),
            ApiError::Server { status, message } if message.is_empty() => {
                format!("The server returned an error (HTTP {}). Please try again.", status)
            }
            ApiError::Server { message, .. } => message.clone(),
            ApiError::InvalidResponse { .. } => {
                "Received an invalid response from the server.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "E_API_NET",
            ApiError::Auth { .. } => "E_API_AUTH",
            ApiError::Validation { .. } => "E_API_VALIDATION",
            ApiError::Server { .. } => "E_API_SERVER",
            ApiError::InvalidResponse { .. } => "E_API_INVALID",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network { message } => write!(f, "Network error: {}", message),
            ApiError::Auth { message } => write!(f, "Authentication error: {}", message),
            ApiError::Validation { message } => write!(f, "Validation error: {}", message),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::InvalidResponse { message } => write!(f, "Invalid response: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::Network {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidResponse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_maps_to_network() {
        let err: ApiError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert!(err.is_network());
        assert_eq!(err.error_code(), "E_API_NET");
    }

    #[test]
    fn test_json_error_maps_to_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::InvalidResponse { .. }));
    }

    #[test]
    fn test_auth_user_message_uses_server_text() {
        let err = ApiError::auth("The username or password is incorrect");
        assert_eq!(err.user_message(), "The username or password is incorrect");
        assert!(err.is_auth());

        let empty = ApiError::auth("");
        assert!(empty.user_message().contains("sign in again"));
    }

    #[test]
    fn test_server_user_message_falls_back_to_status() {
        let err = ApiError::Server {
            status: 503,
            message: String::new(),
        };
        assert!(err.user_message().contains("503"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::validation("Choose a target language").to_string(),
            "Validation error: Choose a target language"
        );
        assert_eq!(
            ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
            .to_string(),
            "Server error (500): boom"
        );
    }
}
