//! Utility modules
//!
//! - **error**: crate error type
//! - **io**: identifier list reader and CSV result sink
//! - **logging**: tracing subscriber setup
//! - **sanitization**: secret masking for log output

pub mod error;
pub mod io;
pub mod logging;
pub mod sanitization;
