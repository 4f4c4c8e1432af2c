//! Exponential backoff with symmetric jitter
//!
//! Every retry cause goes through the same [`BackoffPolicy`]; jitter keeps
//! workers that failed together from retrying together.

use crate::config::BackoffConfig;
use rand::Rng;
use std::time::Duration;

/// Jitter applied around the capped delay (±30%)
pub const JITTER_FRACTION: f64 = 0.3;

/// Lower bound of any computed delay, in seconds
pub const MIN_DELAY_SECS: f64 = 0.1;

/// Retry delay calculator
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    initial_delay: f64,
    multiplier: f64,
    max_delay: f64,
}

impl BackoffPolicy {
    /// Create a new policy from the backoff section of the configuration
    pub fn new(config: &BackoffConfig) -> Self {
        Self {
            initial_delay: config.initial_delay,
            multiplier: config.multiplier,
            max_delay: config.max_delay,
        }
    }

    /// Delay before the next try, once attempt `attempt` (0-based) has failed
    pub fn delay(&self, attempt: u32) -> Duration {
        let base = self.base_delay(attempt);
        let range = base * JITTER_FRACTION;
        let jitter = rand::thread_rng().gen_range(-range..=range);
        Duration::from_secs_f64((base + jitter).max(MIN_DELAY_SECS))
    }

    /// Capped exponential delay in seconds, before jitter
    pub fn base_delay(&self, attempt: u32) -> f64 {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        (self.initial_delay * self.multiplier.powi(exponent)).min(self.max_delay)
    }

    /// Largest delay this policy can ever return
    pub fn upper_bound(&self) -> Duration {
        Duration::from_secs_f64((self.max_delay * (1.0 + JITTER_FRACTION)).max(MIN_DELAY_SECS))
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::new(&BackoffConfig::default())
    }
}
