//! End-to-end tests against the live VIES service
//!
//! These tests hit https://ec.europa.eu and are ignored by default.
//! Run with: `VIES_E2E=1 cargo test -- --ignored`
//!
//! Proxy settings come from `PROXY_HOST`, `PROXY_USER` and `PROXY_PWD`.

pub mod live_vies;
