//! # API Errors
//!
//! HTTP rendering of `GatewayError`: status code plus a plain-text message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pay_core::{ErrorKind, GatewayError};
use thiserror::Error;
use tracing::{error, warn};

/// Error returned from handlers
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub GatewayError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0.kind() {
            ErrorKind::InternalError => error!("Request failed: {}", self.0),
            _ => warn!("Request rejected: {}", self.0),
        }

        (self.status(), self.0.client_message()).into_response()
    }
}
