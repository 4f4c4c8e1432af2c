//! Error handling for the validator
//!
//! Startup and adapter failures flow through [`ViesError`]. Per-identifier
//! failures never reach this type: they are absorbed by the validation client.

mod helpers;
mod types;


pub use types::{Result, ViesError};
