//! # Payment Types
//!
//! Request and response bodies for the payment endpoint. Both are transient:
//! built for one request and never stored.

use crate::error::{GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inbound payment request from a merchant
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Session the payment belongs to
    pub session_id: String,

    /// Merchant submitting the payment
    pub merchant_id: String,

    /// Merchant-assigned transaction id (echoed back)
    pub transaction_id: String,

    /// Amount in major currency units; must be a JSON number
    pub amount: f64,

    /// Currency code (e.g. "USD")
    pub currency: String,

    /// Opaque card token
    pub card_token: String,
}

impl PaymentRequest {
    /// Decode a request body. Any JSON that doesn't fit the shape is rejected.
    pub fn from_slice(body: &[u8]) -> GatewayResult<Self> {
        serde_json::from_slice(body).map_err(|e| GatewayError::InvalidRequest(e.to_string()))
    }
}

impl fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("session_id", &self.session_id)
            .field("merchant_id", &self.merchant_id)
            .field("transaction_id", &self.transaction_id)
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .field("card_token", &"[redacted]")
            .finish()
    }
}

/// Outcome of a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Payment approved
    Success,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response returned to the merchant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Echoed from the request
    pub transaction_id: String,

    /// Payment status
    pub status: PaymentStatus,

    /// Human-readable message
    pub message: String,
}

impl PaymentResponse {
    /// Encode as a JSON body
    pub fn to_body(&self) -> GatewayResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
