//! Batch execution configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Worker pool and global rate ceiling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchConfig {
    /// Identifiers validated concurrently
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Requests per minute across all workers, zero or less disables the ceiling
    #[serde(default = "default_rate_limit")]
    pub rate_limit: i64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            rate_limit: default_rate_limit(),
        }
    }
}
