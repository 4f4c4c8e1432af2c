//! Configuration data models
//!
//! This module defines all configuration structures used by the validator.

pub mod backoff;
pub mod batch;
pub mod proxy;
pub mod request;

// Re-export all configuration types
pub use backoff::*;
pub use batch::*;
pub use proxy::*;
pub use request::*;

/// Default number of concurrent workers
pub fn default_workers() -> usize {
    10
}

/// Default request ceiling, in requests per minute
pub fn default_rate_limit() -> i64 {
    300
}

/// Default HTTP timeout in seconds
pub fn default_timeout() -> u64 {
    90
}

/// Default number of tries per identifier, the first one included
pub fn default_max_attempts() -> u32 {
    50
}

pub fn default_initial_delay() -> f64 {
    0.2
}

pub fn default_backoff_multiplier() -> f64 {
    1.5
}

pub fn default_max_delay() -> f64 {
    30.0
}

/// Default VIES REST endpoint
pub fn default_api_base() -> String {
    "https://ec.europa.eu/taxation_customs/vies/rest-api".to_string()
}

pub fn default_proxy_scheme() -> String {
    "http".to_string()
}

pub fn default_true() -> bool {
    true
}
