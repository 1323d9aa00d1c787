//! # Redis Session Store
//!
//! `SessionStore` backed by Redis. Session records are JSON strings stored
//! under the bare session id.

use crate::config::RedisConfig;
use async_trait::async_trait;
use pay_core::{GatewayError, GatewayResult, SessionLookup, SessionStore};
use redis::{aio::ConnectionManager, Client};
use tracing::{debug, error, info, instrument};

/// Redis-backed session store.
///
/// Holds a `ConnectionManager`, which multiplexes one connection and is cheap
/// to clone, so concurrent requests share it without extra locking.
#[derive(Clone)]
pub struct RedisSessionStore {
    manager: ConnectionManager,
}

impl RedisSessionStore {
    /// Connect to Redis
    pub async fn connect(config: &RedisConfig) -> GatewayResult<Self> {
        let target = config.display_target();
        info!(redis_target = %target, "Connecting to Redis");

        let client = Client::open(config.connection_url())
            .map_err(|e| GatewayError::Configuration(format!("Invalid Redis URL: {}", e)))?;

        let manager = client.get_connection_manager().await.map_err(|e| {
            error!("Failed to get Redis connection manager: {}", e);
            GatewayError::Store(format!("Failed to connect to Redis at {}: {}", target, e))
        })?;

        Ok(Self { manager })
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    #[instrument(skip(self))]
    async fn lookup(&self, session_id: &str) -> SessionLookup {
        let mut conn = self.manager.clone();

        let result: redis::RedisResult<Option<String>> = redis::cmd("GET")
            .arg(session_id)
            .query_async(&mut conn)
            .await;

        match result {
            Ok(Some(raw)) => {
                debug!("Session record found ({} bytes)", raw.len());
                SessionLookup::Found(raw)
            }
            Ok(None) => SessionLookup::NotFound,
            Err(e) => {
                error!("Redis GET failed: {}", e);
                SessionLookup::TransportError(e.to_string())
            }
        }
    }

    async fn ping(&self) -> GatewayResult<String> {
        let mut conn = self.manager.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| GatewayError::Store(format!("Redis health check failed: {}", e)))
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
