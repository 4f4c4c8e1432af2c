//! Configuration management for the validator
//!
//! A [`Config`] is built once at startup (defaults, then an optional YAML
//! file, then command-line overrides), validated, and passed by reference to
//! everything that needs it. Nothing reads configuration from global state.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, ViesError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the validator
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Worker pool and rate ceiling
    #[serde(default)]
    pub batch: BatchConfig,
    /// Per-request settings
    #[serde(default)]
    pub request: RequestConfig,
    /// Retry backoff
    #[serde(default)]
    pub backoff: BackoffConfig,
    /// Outbound proxy
    #[serde(default)]
    pub proxy: ProxySettings,
}

/// Values supplied on the command line; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub workers: Option<usize>,
    pub rate_limit: Option<i64>,
    pub timeout: Option<u64>,
    pub max_attempts: Option<u32>,
    pub initial_delay: Option<f64>,
    pub backoff_multiplier: Option<f64>,
    pub max_delay: Option<f64>,
    pub api_base: Option<String>,
    pub no_proxy: bool,
    pub proxy_host: Option<String>,
    pub proxy_user: Option<String>,
    pub proxy_password: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ViesError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ViesError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides, then validate the result
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(workers) = overrides.workers {
            self.batch.workers = workers;
        }
        if let Some(rate_limit) = overrides.rate_limit {
            self.batch.rate_limit = rate_limit;
        }
        if let Some(timeout) = overrides.timeout {
            self.request.timeout = timeout;
        }
        if let Some(max_attempts) = overrides.max_attempts {
            self.request.max_attempts = max_attempts;
        }
        if let Some(api_base) = overrides.api_base {
            self.request.api_base = api_base;
        }
        if let Some(initial_delay) = overrides.initial_delay {
            self.backoff.initial_delay = initial_delay;
        }
        if let Some(multiplier) = overrides.backoff_multiplier {
            self.backoff.multiplier = multiplier;
        }
        if let Some(max_delay) = overrides.max_delay {
            self.backoff.max_delay = max_delay;
        }
        if overrides.no_proxy {
            self.proxy.enabled = false;
        }
        if overrides.proxy_host.is_some() {
            self.proxy.host = overrides.proxy_host;
        }
        if overrides.proxy_user.is_some() {
            self.proxy.user = overrides.proxy_user;
        }
        if overrides.proxy_password.is_some() {
            self.proxy.password = overrides.proxy_password;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.batch
            .validate()
            .map_err(|e| ViesError::Config(format!("Batch config error: {}", e)))?;
        self.request
            .validate()
            .map_err(|e| ViesError::Config(format!("Request config error: {}", e)))?;
        self.backoff
            .validate()
            .map_err(|e| ViesError::Config(format!("Backoff config error: {}", e)))?;
        self.proxy
            .validate()
            .map_err(|e| ViesError::Config(format!("Proxy config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ViesError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
