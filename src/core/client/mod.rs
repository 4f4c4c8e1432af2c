//! Per-identifier validation with retries
//!
//! [`ValidationClient::validate`] derives the VAT number, then loops over
//! rate-limited lookups until the endpoint gives an answer or the attempt
//! budget runs out. Every failure, whatever its class, goes through the same
//! backoff call site. The call never fails: malformed identifiers and
//! exhausted budgets both end as [`ValidationStatus::Undetermined`].

mod diagnostics;
pub mod response;
mod transport;
mod types;


pub use diagnostics::{ConsoleDiagnostics, Diagnostics, NoopDiagnostics};
pub use transport::{ReqwestTransport, TransportError, TransportResponse, VatTransport};
pub use types::{AttemptFailure, FailureClass, OutcomeKind, ValidationOutcome, ValidationStatus};

#[cfg(test)]
pub use transport::MockVatTransport;

use crate::core::backoff::BackoffPolicy;
use crate::core::rate_limiter::RateLimiter;
use crate::core::vat::{VatNumber, derive_vat_number};
use std::sync::Arc;
use tracing::{debug, warn};

/// Validates one SIREN at a time; cheap to share across workers
#[derive(Clone)]
pub struct ValidationClient {
    transport: Arc<dyn VatTransport>,
    limiter: Arc<RateLimiter>,
    backoff: BackoffPolicy,
    max_attempts: u32,
    diagnostics: Arc<dyn Diagnostics>,
}

impl ValidationClient {
    pub fn new(
        transport: Arc<dyn VatTransport>,
        limiter: Arc<RateLimiter>,
        backoff: BackoffPolicy,
        max_attempts: u32,
    ) -> Self {
        Self {
            transport,
            limiter,
            backoff,
            max_attempts,
            diagnostics: Arc::new(NoopDiagnostics),
        }
    }

    /// Report retries and exhaustion to `diagnostics`
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Validate one identifier. Always returns exactly one outcome.
    pub async fn validate(&self, identifier: &str) -> ValidationOutcome {
        let vat = match derive_vat_number(identifier) {
            Ok(vat) => vat,
            Err(e) => {
                warn!("Skipping malformed identifier: {}", e);
                return ValidationOutcome::invalid_format(identifier);
            }
        };

        debug!("Validating {} -> {}", identifier, vat);

        for attempt in 0..self.max_attempts {
            let failure = match self.attempt(&vat).await {
                Ok(validity) => {
                    if validity.is_none() {
                        warn!("Unexpected answer for {}: no validity flag", vat);
                    }
                    return ValidationOutcome::answered(identifier, validity.into(), attempt + 1);
                }
                Err(failure) => failure,
            };

            if attempt + 1 >= self.max_attempts {
                debug!(
                    "Attempt {}/{} for {} failed: {}",
                    attempt + 1,
                    self.max_attempts,
                    vat,
                    failure
                );
                break;
            }

            let delay = self.backoff.delay(attempt);
            debug!(
                "Attempt {}/{} for {} failed: {} - waiting {:.1}s",
                attempt + 1,
                self.max_attempts,
                vat,
                failure,
                delay.as_secs_f64()
            );
            self.diagnostics.retry(failure.class);
            tokio::time::sleep(delay).await;
        }

        warn!(
            "Giving up on {} after {} attempts",
            identifier, self.max_attempts
        );
        self.diagnostics.exhausted(identifier, self.max_attempts);
        ValidationOutcome::exhausted(identifier, self.max_attempts)
    }

    async fn attempt(&self, vat: &VatNumber) -> Result<Option<bool>, AttemptFailure> {
        self.limiter.acquire().await;
        let response = self.transport.lookup(vat).await?;
        response::evaluate(&response)
    }
}
