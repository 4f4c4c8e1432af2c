//! Batch validation of a list of identifiers
//!
//! The orchestrator fans identifiers out to at most `workers` concurrent
//! validations, all gated by one rate limiter built for the run, and hands
//! each outcome to the sink as soon as it completes.

mod orchestrator;
mod summary;


pub use orchestrator::{BatchOrchestrator, BatchReport, OutcomeSink};
pub use summary::BatchSummary;
