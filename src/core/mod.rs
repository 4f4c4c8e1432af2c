//! Core validation logic
//!
//! Leaves first: [`vat`] key derivation, the [`rate_limiter`] and the
//! [`backoff`] policy, then the per-identifier [`client`] and the
//! [`batch`] orchestrator built on top of them.

pub mod backoff;
pub mod batch;
pub mod client;
pub mod rate_limiter;
pub mod vat;
