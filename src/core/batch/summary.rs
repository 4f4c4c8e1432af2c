//! Aggregate counts of a finished batch

use crate::core::client::{OutcomeKind, ValidationOutcome, ValidationStatus};
use std::time::Duration;

/// Summary of batch execution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    /// Identifiers processed
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Malformed or exhausted identifiers, plus answers without a validity flag
    pub undetermined: usize,
    /// Identifiers rejected before any request
    pub malformed: usize,
    /// Identifiers whose retry budget ran out
    pub exhausted: usize,
    /// Wall time of the whole run
    pub total_duration: Duration,
    /// Wall time divided by the number of identifiers
    pub avg_duration: Duration,
}

impl BatchSummary {
    /// Count outcomes in a single pass
    pub fn from_outcomes(outcomes: &[ValidationOutcome], total_duration: Duration) -> Self {
        let mut summary = Self {
            total: outcomes.len(),
            total_duration,
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome.status {
                ValidationStatus::Valid => summary.valid += 1,
                ValidationStatus::Invalid => summary.invalid += 1,
                ValidationStatus::Undetermined => summary.undetermined += 1,
            }
            match outcome.kind {
                OutcomeKind::InvalidFormat => summary.malformed += 1,
                OutcomeKind::Exhausted => summary.exhausted += 1,
                OutcomeKind::Answered => {}
            }
        }

        if summary.total > 0 {
            summary.avg_duration = total_duration.div_f64(summary.total as f64);
        }

        summary
    }
}
