//! Configuration management for the Cardio Risk backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: CR__)

use anyhow::Result;
use cardio_risk_shared::{AVAILABLE_MODELS, FRAMINGHAM_POINTS_V1};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// HTTP middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
    pub cors_allow_any_origin: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            max_body_bytes: 16 * 1024,
            cors_allow_any_origin: true,
        }
    }
}

/// Risk scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Identifier of the scoring model to serve
    pub model: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            model: FRAMINGHAM_POINTS_V1.to_string(),
        }
    }
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            http: HttpConfig::default(),
            scoring: ScoringConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with CR__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (CR__ prefix)
            // e.g., CR__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("CR").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Collect configuration problems that must stop startup
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !AVAILABLE_MODELS.contains(&self.scoring.model.as_str()) {
            errors.push(format!(
                "scoring.model '{}' is not one of: {}",
                self.scoring.model,
                AVAILABLE_MODELS.join(", ")
            ));
        }
        if self.http.request_timeout_secs == 0 {
            errors.push("http.request_timeout_secs must be greater than 0".to_string());
        }
        if self.http.max_body_bytes == 0 {
            errors.push("http.max_body_bytes must be greater than 0".to_string());
        }

        errors
    }
}
