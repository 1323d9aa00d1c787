//! # pay-core
//!
//! Core types and traits for the pay-gateway payment endpoint.
//!
//! This crate provides:
//! - `Session`, `PaymentRequest` and `PaymentResponse` data types
//! - `SessionStore` trait for session store backends, plus an in-memory store
//! - `AuthorizationPolicy` trait for the approve/decline decision
//! - `PaymentProcessor` tying lookup, decode and decision together
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{MemorySessionStore, PaymentProcessor, PaymentRequest, Session};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemorySessionStore::new());
//! store.insert(&Session::new("sess_123"))?;
//!
//! let processor = PaymentProcessor::new(store);
//! let request = PaymentRequest::from_slice(body)?;
//! let response = processor.process(&request).await?;
//! ```

pub mod error;
pub mod payment;
pub mod policy;
pub mod processor;
pub mod session;
pub mod store;

// Re-exports for convenience
pub use error::{ErrorKind, GatewayError, GatewayResult};
pub use payment::{PaymentRequest, PaymentResponse, PaymentStatus};
pub use policy::{ApproveAll, AuthorizationPolicy, BoxedAuthorizationPolicy, Decision};
pub use processor::PaymentProcessor;
pub use session::{CartData, Session};
pub use store::{BoxedSessionStore, MemorySessionStore, SessionLookup, SessionStore};
