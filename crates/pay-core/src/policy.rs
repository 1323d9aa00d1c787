//! # Authorization Policy
//!
//! Decides the outcome of a payment once its session has been validated.
//! The only shipped policy approves unconditionally; no authorization, fraud
//! check or ledger write happens behind it.

use crate::payment::{PaymentRequest, PaymentStatus};
use crate::session::Session;
use std::sync::Arc;

/// Outcome of a policy decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub status: PaymentStatus,
    pub message: String,
}

impl Decision {
    pub fn approved() -> Self {
        Self {
            status: PaymentStatus::Success,
            message: "Transaction approved".to_string(),
        }
    }
}

/// Decision seam for payments that passed session validation
pub trait AuthorizationPolicy: Send + Sync {
    fn decide(&self, request: &PaymentRequest, session: &Session) -> Decision;

    /// Policy name (for logging)
    fn name(&self) -> &'static str;
}

/// Type alias for a shared policy (dynamic dispatch)
pub type BoxedAuthorizationPolicy = Arc<dyn AuthorizationPolicy>;

/// Approves every payment with a valid session
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproveAll;

impl AuthorizationPolicy for ApproveAll {
    fn decide(&self, _request: &PaymentRequest, _session: &Session) -> Decision {
        Decision::approved()
    }

    fn name(&self) -> &'static str {
        "approve_all"
    }
}
