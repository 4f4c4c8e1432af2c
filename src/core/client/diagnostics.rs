//! Progress markers for retries

use super::types::FailureClass;
use std::io::Write;

/// Receives retry and exhaustion events as they happen
pub trait Diagnostics: Send + Sync {
    /// An attempt failed and another one will follow
    fn retry(&self, class: FailureClass);

    /// Every attempt for `identifier` failed
    fn exhausted(&self, identifier: &str, attempts: u32);
}

/// Prints one marker per retry on stdout, as progress feedback
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn retry(&self, class: FailureClass) {
        if let Some(marker) = class.marker() {
            let mut stdout = std::io::stdout().lock();
            // Progress output only, write errors are ignored
            let _ = write!(stdout, "{}", marker);
            let _ = stdout.flush();
        }
    }

    fn exhausted(&self, identifier: &str, attempts: u32) {
        println!("\nFAILED for {} after {} attempts", identifier, attempts);
    }
}

/// Quiet mode
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn retry(&self, _class: FailureClass) {}

    fn exhausted(&self, _identifier: &str, _attempts: u32) {}
}
