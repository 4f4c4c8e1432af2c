//! Bounded fan-out over the validation client

use super::summary::BatchSummary;
use crate::config::Config;
use crate::core::backoff::BackoffPolicy;
use crate::core::client::{Diagnostics, ValidationClient, ValidationOutcome, VatTransport};
use crate::core::rate_limiter::RateLimiter;
use crate::utils::error::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info};

/// Receives outcomes in completion order
pub trait OutcomeSink: Send {
    fn record(&mut self, outcome: &ValidationOutcome) -> Result<()>;

    /// Called once after the last outcome
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl OutcomeSink for Vec<ValidationOutcome> {
    fn record(&mut self, outcome: &ValidationOutcome) -> Result<()> {
        self.push(outcome.clone());
        Ok(())
    }
}

/// Every outcome of a run, in completion order, with its aggregates
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub outcomes: Vec<ValidationOutcome>,
    pub summary: BatchSummary,
}

/// Runs one validation per identifier with at most `workers` in flight
pub struct BatchOrchestrator {
    client: ValidationClient,
    workers: usize,
}

impl BatchOrchestrator {
    pub fn new(client: ValidationClient, workers: usize) -> Self {
        Self {
            client,
            workers: workers.max(1),
        }
    }

    /// Wire a run from configuration. The rate limiter is created here,
    /// once, and shared by every worker of the run.
    pub fn from_config(
        config: &Config,
        transport: Arc<dyn VatTransport>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        let limiter = Arc::new(RateLimiter::new(config.batch.rate_limit));
        match limiter.min_interval() {
            Some(interval) => debug!(
                "Rate limiter: {} requests/minute ({:.3}s between requests)",
                config.batch.rate_limit,
                interval.as_secs_f64()
            ),
            None => debug!("Rate limiter disabled"),
        }

        let client = ValidationClient::new(
            transport,
            limiter,
            BackoffPolicy::new(&config.backoff),
            config.request.max_attempts,
        )
        .with_diagnostics(diagnostics);

        Self::new(client, config.batch.workers)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Validate every identifier, streaming outcomes to `sink`.
    ///
    /// Returns one outcome per identifier. Fails only if the sink does.
    pub async fn run<S>(&self, identifiers: Vec<String>, sink: &mut S) -> Result<BatchReport>
    where
        S: OutcomeSink + ?Sized,
    {
        let start = Instant::now();
        let expected = identifiers.len();
        info!(
            "Validating {} identifiers with {} workers",
            expected, self.workers
        );

        let client = &self.client;
        let mut pending = stream::iter(identifiers)
            .map(|identifier| async move { client.validate(&identifier).await })
            .buffer_unordered(self.workers);

        let mut outcomes = Vec::with_capacity(expected);
        while let Some(outcome) = pending.next().await {
            sink.record(&outcome)?;
            outcomes.push(outcome);
        }
        sink.finish()?;

        let summary = BatchSummary::from_outcomes(&outcomes, start.elapsed());
        debug!("Batch finished: {:?}", summary);

        Ok(BatchReport { outcomes, summary })
    }
}
