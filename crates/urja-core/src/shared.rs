//! Shared types used across all Urja crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-request context carried through the router into adapter calls.
/// The gateway stamps a fresh correlation id on every incoming request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Correlation id for request tracing.
    pub correlation_id: Option<String>,
}

impl RequestContext {
    pub fn with_correlation_id(id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(id.into()),
        }
    }

    /// Correlation id for log fields (empty string when none was assigned).
    pub fn correlation(&self) -> &str {
        self.correlation_id.as_deref().unwrap_or("")
    }
}

/// Global application configuration (gateway + adapters). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by `/v1/status` and startup logs.
    pub app_name: String,
    /// Bind address for the gateway.
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Path of the JSON knowledge document read once at startup.
    pub knowledge_path: String,
    /// Model adapter mode (e.g. "mock", "live").
    pub llm_mode: String,
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `URJA_CONFIG`
    /// path > `config/gateway.toml` > defaults, then `URJA__*` env overlay.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("URJA_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Urja Assistant")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000_i64)?
            .set_default("knowledge_path", "knowledge_base.json")?
            .set_default("llm_mode", "mock")?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("URJA").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}
