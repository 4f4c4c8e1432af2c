//! # vies-rs
//!
//! Bulk validation of French SIREN numbers against the EU VIES
//! (VAT Information Exchange System) REST API.
//!
//! Each SIREN is turned into its intra-community VAT number, looked up under
//! a global request-rate ceiling with bounded concurrency, and classified as
//! valid, invalid or undetermined. Temporary VIES failures are retried with
//! exponential backoff and jitter.
//!
//! ## Library use
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vies_rs::core::batch::BatchOrchestrator;
//! use vies_rs::core::client::{NoopDiagnostics, ReqwestTransport, ValidationOutcome};
//! use vies_rs::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let transport = Arc::new(ReqwestTransport::new(&config.request, &config.proxy)?);
//!     let batch = BatchOrchestrator::from_config(&config, transport, Arc::new(NoopDiagnostics));
//!
//!     let mut outcomes: Vec<ValidationOutcome> = Vec::new();
//!     let report = batch.run(vec!["380129866".to_string()], &mut outcomes).await?;
//!     println!("{} valid", report.summary.valid);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::batch::{BatchOrchestrator, BatchReport, BatchSummary};
pub use core::client::{ValidationClient, ValidationOutcome, ValidationStatus};
pub use core::vat::{VatNumber, derive_vat_number};
pub use utils::error::{Result, ViesError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version with the commit and build timestamp, shown by `vies --version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("GIT_HASH"),
    ", built at ",
    env!("BUILD_TIME"),
    ")"
);
