//! Slot-reservation rate limiter

use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::trace;

/// Minimum-interval rate limiter.
///
/// Each caller reserves the next free slot while holding the lock, then waits
/// for it with the lock released. Concurrent callers therefore queue on the
/// reservation arithmetic only, never on each other's sleep.
#[derive(Debug)]
pub struct RateLimiter {
    /// `None` when limiting is disabled
    min_interval: Option<Duration>,
    /// Earliest instant the next reservation may be granted
    next_free: Mutex<Instant>,
}

impl RateLimiter {
    /// Create a limiter allowing `calls_per_minute` requests per minute.
    ///
    /// A value of zero or less disables limiting.
    pub fn new(calls_per_minute: i64) -> Self {
        let min_interval = (calls_per_minute > 0)
            .then(|| Duration::from_secs_f64(60.0 / calls_per_minute as f64));

        Self {
            min_interval,
            next_free: Mutex::new(Instant::now()),
        }
    }

    /// Create a limiter that never delays
    pub fn disabled() -> Self {
        Self::new(0)
    }

    /// Whether calls can be delayed at all
    pub fn is_enabled(&self) -> bool {
        self.min_interval.is_some()
    }

    /// Minimum spacing between two granted slots
    pub fn min_interval(&self) -> Option<Duration> {
        self.min_interval
    }

    /// Reserve the next slot and return how long the caller must wait for it.
    pub fn reserve(&self) -> Duration {
        let Some(interval) = self.min_interval else {
            return Duration::ZERO;
        };

        let mut next_free = self.next_free.lock();
        let now = Instant::now();
        let slot = (*next_free).max(now);
        *next_free = slot + interval;

        slot - now
    }

    /// Wait until one request may be issued.
    ///
    /// Returns the time spent waiting.
    pub async fn acquire(&self) -> Duration {
        let wait = self.reserve();
        if !wait.is_zero() {
            trace!("Rate limiter delaying request by {:?}", wait);
            sleep(wait).await;
        }
        wait
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::disabled()
    }
}
