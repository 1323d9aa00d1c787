//! # Gateway Error Types
//!
//! Typed error handling for the payment gateway.
//! Every request-level operation returns `Result<T, GatewayError>`.

use thiserror::Error;

/// Coarse error taxonomy surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong HTTP method on a payment route
    MethodNotAllowed,
    /// Malformed input
    BadRequest,
    /// Absent or expired session
    Unauthorized,
    /// Downstream store failure, malformed stored record or encoding failure
    InternalError,
}

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request used a method other than POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body could not be decoded into a payment request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Session id is not present in the store
    #[error("Session not found or expired: {session_id}")]
    SessionNotFound { session_id: String },

    /// Session store could not be reached or answered with an error
    #[error("Session store error: {0}")]
    Store(String),

    /// Stored session record is not well-formed
    #[error("Session decode error: {0}")]
    SessionDecode(String),

    /// Response could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors (bad address, unparseable values)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// Map onto the four-way error taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            GatewayError::InvalidRequest(_) => ErrorKind::BadRequest,
            GatewayError::SessionNotFound { .. } => ErrorKind::Unauthorized,
            GatewayError::Store(_)
            | GatewayError::SessionDecode(_)
            | GatewayError::Serialization(_)
            | GatewayError::Configuration(_) => ErrorKind::InternalError,
        }
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::InternalError => 500,
        }
    }

    /// Plain-text message safe to hand back to the caller.
    ///
    /// Internal detail (store errors, parse positions) stays in the `Display`
    /// output and goes to the logs only.
    pub fn client_message(&self) -> &'static str {
        match self {
            GatewayError::MethodNotAllowed => "Invalid request method",
            GatewayError::InvalidRequest(_) => "Invalid request body",
            GatewayError::SessionNotFound { .. } => "Invalid or expired session ID",
            GatewayError::Store(_) => "Error retrieving session",
            GatewayError::SessionDecode(_) => "Failed to decode session data",
            GatewayError::Serialization(_) => "Failed to encode response",
            GatewayError::Configuration(_) => "Internal server error",
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Serialization(err.to_string())
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
