//! # Application Configuration
//!
//! Defaults, then an optional TOML file, then environment variables.

use pay_core::GatewayError;
use pay_redis::RedisConfig;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Candidate config file locations, relative to the working directory
const CONFIG_PATHS: [&str; 3] = [
    "config/gateway.toml",
    "../config/gateway.toml",
    "../../config/gateway.toml",
];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(GatewayError::Configuration(format!(
                "LOG_FORMAT must be pretty or json, got {:?}",
                other
            ))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Session store connection
    pub redis: RedisConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: "development".to_string(),
            log_format: LogFormat::Pretty,
            redis: RedisConfig::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the full configuration for the running process
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match config_file_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a TOML config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, GatewayError> {
        toml::from_str(content).map_err(|e| GatewayError::Configuration(e.to_string()))
    }

    /// Apply environment-style overrides from a key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }

        if let Some(port) = lookup("PORT") {
            self.port = port.parse().map_err(|_| {
                GatewayError::Configuration(format!("PORT must be a port number, got {:?}", port))
            })?;
        }

        if let Some(environment) = lookup("ENVIRONMENT") {
            self.environment = environment;
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            self.log_format = format.parse()?;
        }

        self.redis.apply_overrides(&lookup)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, GatewayError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                GatewayError::Configuration(format!(
                    "Invalid socket address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("GATEWAY_CONFIG") {
        return Some(PathBuf::from(path));
    }

    CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}
