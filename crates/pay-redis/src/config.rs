//! # Redis Configuration
//!
//! Connection settings for the session store.
//! Values come from defaults, an optional config file section, then environment
//! variables.

use pay_core::GatewayError;
use serde::Deserialize;

/// Redis connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// `host:port` of the Redis server
    pub addr: String,

    /// Password (AUTH), if the server requires one
    pub password: Option<String>,

    /// Logical database index
    pub db: i64,

    /// Full connection URL; takes precedence over the other fields
    pub url: Option<String>,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            addr: "localhost:6379".to_string(),
            password: None,
            db: 0,
            url: None,
        }
    }
}

impl RedisConfig {
    /// Apply overrides from a key lookup (the process environment in practice).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("REDIS_ADDR") {
            self.addr = addr;
        }

        if let Some(password) = lookup("REDIS_PASSWORD") {
            self.password = (!password.is_empty()).then_some(password);
        }

        if let Some(db) = lookup("REDIS_DB") {
            self.db = db.parse().map_err(|_| {
                GatewayError::Configuration(format!("REDIS_DB must be an integer, got {:?}", db))
            })?;
        }

        if let Some(url) = lookup("REDIS_URL") {
            self.url = (!url.is_empty()).then_some(url);
        }

        Ok(())
    }

    /// Builder: set a password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// URL handed to the redis client. The password is percent-encoded.
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        match &self.password {
            Some(password) => format!(
                "redis://:{}@{}/{}",
                urlencoding::encode(password),
                self.addr,
                self.db
            ),
            None => format!("redis://{}/{}", self.addr, self.db),
        }
    }

    /// Connection target without credentials (for logging)
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(url) => match url.rsplit_once('@') {
                Some((_, host)) => format!("redis://***@{}", host),
                None => url.clone(),
            },
            None => format!("{}/{}", self.addr, self.db),
        }
    }
}
