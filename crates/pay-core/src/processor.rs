//! # Payment Processor
//!
//! Session lookup, session decode and decision for one payment request.
//! Transport concerns (method check, body decode, response encode) belong to
//! the HTTP layer.

use crate::error::GatewayResult;
use crate::payment::{PaymentRequest, PaymentResponse};
use crate::policy::{ApproveAll, BoxedAuthorizationPolicy};
use crate::session::Session;
use crate::store::BoxedSessionStore;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Validates payments against the session store
#[derive(Clone)]
pub struct PaymentProcessor {
    store: BoxedSessionStore,
    policy: BoxedAuthorizationPolicy,
}

impl PaymentProcessor {
    /// Create a processor with the unconditional-approval policy
    pub fn new(store: BoxedSessionStore) -> Self {
        Self::with_policy(store, Arc::new(ApproveAll))
    }

    pub fn with_policy(store: BoxedSessionStore, policy: BoxedAuthorizationPolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &BoxedSessionStore {
        &self.store
    }

    /// Process one payment. Errors are terminal; nothing is retried.
    #[instrument(
        skip(self, request),
        fields(
            session_id = %request.session_id,
            transaction_id = %request.transaction_id,
        )
    )]
    pub async fn process(&self, request: &PaymentRequest) -> GatewayResult<PaymentResponse> {
        let raw = self
            .store
            .lookup(&request.session_id)
            .await
            .into_record(&request.session_id)?;

        let session = Session::from_record(&raw)?;
        debug!("Session {} holds {} cart entries", session.id, session.cart_data.len());

        info!(
            merchant_id = %request.merchant_id,
            amount = %request.amount,
            currency = %request.currency,
            "Processing payment for session {}",
            session.id
        );

        let decision = self.policy.decide(request, &session);
        debug!("Policy {} decided {}", self.policy.name(), decision.status);

        Ok(PaymentResponse {
            transaction_id: request.transaction_id.clone(),
            status: decision.status,
            message: decision.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::payment::PaymentStatus;
    use crate::store::MemorySessionStore;

    fn request(session_id: &str) -> PaymentRequest {
        PaymentRequest {
            session_id: session_id.into(),
            merchant_id: "merchant_1".into(),
            transaction_id: "tx_1".into(),
            amount: 19.99,
            currency: "USD".into(),
            card_token: "tok_abc".into(),
        }
    }

    fn processor_with(store: Arc<MemorySessionStore>) -> PaymentProcessor {
        PaymentProcessor::new(store)
    }

    #[tokio::test]
    async fn test_approves_known_session() {
        let store = Arc::new(MemorySessionStore::new());
        store
            .insert(&Session::new("sess_ok").with_cart_item("sku", 3))
            .unwrap();

        let response = processor_with(store).process(&request("sess_ok")).await.unwrap();
        assert_eq!(response.transaction_id, "tx_1");
        assert_eq!(response.status, PaymentStatus::Success);
        assert_eq!(response.message, "Transaction approved");
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = Arc::new(MemorySessionStore::new());
        let err = processor_with(store).process(&request("nope")).await.unwrap_err();
        assert!(matches!(err, GatewayError::SessionNotFound { .. }));
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_store_failure() {
        let store = Arc::new(MemorySessionStore::new());
        store.insert(&Session::new("sess_ok")).unwrap();
        store.fail_with("i/o timeout");

        let err = processor_with(store).process(&request("sess_ok")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Store(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_malformed_session_record() {
        let store = Arc::new(MemorySessionStore::new());
        store.insert_raw("sess_bad", "{\"id\": ");

        let err = processor_with(store).process(&request("sess_bad")).await.unwrap_err();
        assert!(matches!(err, GatewayError::SessionDecode(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_repeated_request_is_side_effect_free() {
        let store = Arc::new(MemorySessionStore::new());
        store.insert(&Session::new("sess_ok")).unwrap();
        let processor = processor_with(store.clone());

        let first = processor.process(&request("sess_ok")).await.unwrap();
        let second = processor.process(&request("sess_ok")).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }
}
