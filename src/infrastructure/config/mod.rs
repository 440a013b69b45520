//! Configuration management

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub greeting: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Outbound services
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpstreamConfig {
    pub binlist_url: String,
    pub stripe_url: String,
    pub user_agent: String,
    /// Unset means wait indefinitely
    pub timeout_seconds: Option<u64>,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "empire-checker".to_string(),
                greeting: "Welcome to the Empire Checker Bot!".to_string(),
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            upstream: UpstreamConfig {
                binlist_url: "https://lookup.binlist.net".to_string(),
                stripe_url: "https://api.stripe.com".to_string(),
                user_agent: format!("empire-checker/{}", env!("CARGO_PKG_VERSION")),
                timeout_seconds: None,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();
        if let Err(e) = config.apply_env() {
            tracing::warn!("{}, keeping port {}", e, config.server.port);
        }
        config
    }

    /// Apply environment overrides on top of the current values
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("BINLIST_BASE_URL") {
            self.upstream.binlist_url = url;
        }

        if let Ok(url) = std::env::var("STRIPE_BASE_URL") {
            self.upstream.stripe_url = url;
        }

        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("PORT={}", port)))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.binlist_url.is_empty() {
            return Err(ConfigError::MissingField("upstream.binlist-url".to_string()));
        }
        if self.upstream.stripe_url.is_empty() {
            return Err(ConfigError::MissingField("upstream.stripe-url".to_string()));
        }
        self.listen_addr().map(|_| ())
    }

    /// Address the webhook server binds to
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|_| {
                ConfigError::InvalidValue(format!(
                    "server address {}:{}",
                    self.server.host, self.server.port
                ))
            })
    }
}
