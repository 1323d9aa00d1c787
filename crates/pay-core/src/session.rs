//! # Session Records
//!
//! Sessions are created and expired by an external actor; the gateway only
//! reads them. A session that decodes is a valid session: missing fields take
//! their zero value, only malformed JSON or mistyped fields are rejected.

use crate::error::{GatewayError, GatewayResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Open-ended cart contents (key → arbitrary JSON value)
pub type CartData = HashMap<String, Value>;

/// A checkout session as stored in the session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Externally assigned session id
    #[serde(default)]
    pub id: String,

    /// When the session was created; missing decodes as the Unix epoch
    #[serde(default)]
    pub created_at: DateTime<Utc>,

    /// Cart contents; missing or `null` decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cart_data: CartData,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<CartData, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<CartData>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Session {
    /// Create a session with an empty cart
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            cart_data: CartData::new(),
        }
    }

    /// Add a cart entry
    pub fn with_cart_item(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cart_data.insert(key.into(), value.into());
        self
    }

    /// Decode a raw record fetched from the store
    pub fn from_record(raw: &str) -> GatewayResult<Self> {
        serde_json::from_str(raw).map_err(|e| GatewayError::SessionDecode(e.to_string()))
    }

    /// Encode as the JSON text the store holds
    pub fn to_record(&self) -> GatewayResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
