//! # pay-redis
//!
//! Redis session store for pay-gateway-rs.
//!
//! Sessions are written by an external service as JSON strings keyed by
//! session id; this crate only reads them (`GET`) and checks connectivity
//! (`PING`).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_redis::{RedisConfig, RedisSessionStore};
//! use pay_core::SessionStore;
//!
//! let store = RedisSessionStore::connect(&RedisConfig::default()).await?;
//! store.ping().await?;
//!
//! match store.lookup("sess_123").await {
//!     SessionLookup::Found(raw) => { /* decode */ }
//!     SessionLookup::NotFound => { /* 401 */ }
//!     SessionLookup::TransportError(detail) => { /* 500 */ }
//! }
//! ```

pub mod config;
pub mod store;

// Re-exports
pub use config::RedisConfig;
pub use store::RedisSessionStore;
