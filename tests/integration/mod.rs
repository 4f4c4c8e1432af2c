//! Integration tests for vies-rs
//!
//! The real HTTP client and orchestrator against a local wiremock server,
//! plus the binary itself on temporary files.

pub mod batch_tests;
pub mod cli_tests;
pub mod client_tests;
