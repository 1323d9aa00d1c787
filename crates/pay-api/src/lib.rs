//! # pay-api
//!
//! HTTP API layer for pay-gateway-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The session-validated payment endpoint
//! - Configuration loading (defaults, TOML file, environment)
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/process-payment` | Validate session, approve payment |
//! | GET | `/health` | Health check |

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{AppConfig, LogFormat};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
