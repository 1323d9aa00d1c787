//! # Request Handlers
//!
//! Axum request handlers for the payment gateway.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pay_core::{GatewayError, PaymentRequest};
use tracing::{info, instrument, Span};
use uuid::Uuid;

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store();
    let (status, code, store_status) = match store.ping().await {
        Ok(_) => ("healthy", StatusCode::OK, "up"),
        Err(_) => ("degraded", StatusCode::SERVICE_UNAVAILABLE, "down"),
    };

    (
        code,
        Json(serde_json::json!({
            "status": status,
            "service": "pay-gateway",
            "version": env!("CARGO_PKG_VERSION"),
            "environment": state.config.environment,
            "store": {
                "backend": store.backend_name(),
                "status": store_status
            }
        })),
    )
}

/// Process a payment against an existing session.
///
/// The body is decoded as JSON whatever the declared content type.
#[instrument(
    skip(state, body),
    fields(request_id = %Uuid::new_v4(), transaction_id = tracing::field::Empty)
)]
pub async fn process_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = PaymentRequest::from_slice(&body)?;
    Span::current().record("transaction_id", request.transaction_id.as_str());

    let response = state.processor.process(&request).await?;
    let encoded = response.to_body()?;

    info!("Payment {} for transaction {}", response.status, response.transaction_id);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        encoded,
    )
        .into_response())
}

/// Any method other than POST on the payment route
pub async fn method_not_allowed() -> ApiError {
    ApiError(GatewayError::MethodNotAllowed)
}
