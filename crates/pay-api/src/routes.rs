//! # Routes
//!
//! Axum router configuration for the payment gateway.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// Routes:
/// - POST /process-payment - Validate session and approve payment
///   (any other method answers 405)
/// - GET  /health - Health check including session store reachability
pub fn create_router(state: AppState) -> Router {
    let payment_route =
        post(handlers::process_payment).fallback(handlers::method_not_allowed);

    Router::new()
        .route("/process-payment", payment_route)
        .route("/health", get(handlers::health))
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
