//! Rate Limiting Implementation
//!
//! Provides a global request-rate ceiling shared by every worker of a batch.
//! The limiter is built once per batch and handed to each worker; there is no
//! process-wide instance.

mod limiter;


pub use limiter::RateLimiter;
