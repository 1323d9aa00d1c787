//! # Application State
//!
//! Shared state for the Axum application.
//! The session store is injected so tests can substitute an in-memory store.

use crate::config::AppConfig;
use pay_core::{BoxedSessionStore, GatewayResult, PaymentProcessor};
use pay_redis::RedisSessionStore;
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment processor (owns the store handle)
    pub processor: PaymentProcessor,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state around an already constructed store
    pub fn new(config: AppConfig, store: BoxedSessionStore) -> Self {
        Self {
            processor: PaymentProcessor::new(store),
            config,
        }
    }

    /// Connect to the configured Redis session store
    pub async fn connect(config: AppConfig) -> GatewayResult<Self> {
        let store = RedisSessionStore::connect(&config.redis).await?;
        Ok(Self::new(config, Arc::new(store)))
    }

    /// Session store handle
    pub fn store(&self) -> &BoxedSessionStore {
        self.processor.store()
    }

    /// Startup connectivity check. The caller decides whether a failure is fatal.
    pub async fn check_store(&self) -> GatewayResult<String> {
        let reply = self.store().ping().await?;
        info!(
            "Session store ({}) is reachable: {}",
            self.store().backend_name(),
            reply
        );
        Ok(reply)
    }
}
