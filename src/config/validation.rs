//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use tracing::debug;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("Worker count must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Validate for RequestConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.max_attempts == 0 {
            return Err("Max attempts must be at least 1".to_string());
        }

        let url = Url::parse(&self.api_base)
            .map_err(|e| format!("API base has invalid URL format: {}", e))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "API base must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }
        if url.host_str().is_none() {
            return Err("API base URL must have a valid host".to_string());
        }

        Ok(())
    }
}

impl Validate for BackoffConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("initial_delay", self.initial_delay),
            ("max_delay", self.max_delay),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("Backoff {} must be a positive number", name));
            }
        }

        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            return Err("Backoff multiplier must be at least 1.0".to_string());
        }

        if self.initial_delay > self.max_delay {
            return Err(format!(
                "Backoff initial_delay ({}) cannot exceed max_delay ({})",
                self.initial_delay, self.max_delay
            ));
        }

        Ok(())
    }
}

impl Validate for ProxySettings {
    fn validate(&self) -> Result<(), String> {
        if !matches!(self.scheme.as_str(), "http" | "https") {
            return Err(format!("Unsupported proxy scheme: {}", self.scheme));
        }

        if let Some(host) = self.host.as_deref() {
            if host.contains('/') || host.contains('@') {
                return Err(format!("Proxy host must be <host>:<port>, got: {}", host));
            }
        }

        if self.enabled && self.host.is_some() && !self.is_active() {
            debug!("Proxy host set without full credentials, requests go direct");
        }

        Ok(())
    }
}
