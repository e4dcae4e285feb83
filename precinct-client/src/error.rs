//! Client error types

use thiserror::Error;

/// Client error type
///
/// Failures reported by the identity service keep the raw response body so
/// the UI can show the service's own message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or token rejected
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error reported by the service
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Remote error ({status}): {body}")]
    Remote { status: u16, body: String },

    /// Operation needs a session token but none is held
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A newer login/register/logout began while this call was in flight
    #[error("Superseded by a newer session change")]
    Superseded,
}

impl ClientError {
    /// Message suitable for the session's `error` field
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Unauthorized(body)
            | ClientError::Forbidden(body)
            | ClientError::NotFound(body)
            | ClientError::Validation(body)
            | ClientError::Remote { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
