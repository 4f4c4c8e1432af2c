//! Per-request configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remote lookup settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestConfig {
    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Tries per identifier, the first one included
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base URL of the VIES REST API
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            max_attempts: default_max_attempts(),
            api_base: default_api_base(),
        }
    }
}

impl RequestConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
