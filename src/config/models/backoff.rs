//! Retry backoff configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Exponential backoff settings, delays in seconds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackoffConfig {
    /// Delay after the first failed attempt
    #[serde(default = "default_initial_delay")]
    pub initial_delay: f64,
    /// Growth factor per attempt
    #[serde(default = "default_backoff_multiplier")]
    pub multiplier: f64,
    /// Cap applied before jitter
    #[serde(default = "default_max_delay")]
    pub max_delay: f64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            initial_delay: default_initial_delay(),
            multiplier: default_backoff_multiplier(),
            max_delay: default_max_delay(),
        }
    }
}
