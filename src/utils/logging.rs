//! Tracing subscriber setup
//!
//! Two layers share one registry: a console layer on stderr and an
//! append-only log file. `RUST_LOG` overrides the console level only; the
//! file always records INFO and above so a run can be reviewed after the fact.

use crate::utils::error::{Result, ViesError};
use chrono::Local;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Timestamp format shared by both layers
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock timer for log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Where and how much to log
#[derive(Debug, Clone, Default)]
pub struct LoggingOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub log_file: Option<PathBuf>,
}

impl LoggingOptions {
    /// Console level, `None` when the console is silenced
    pub fn console_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            None
        } else if self.verbose {
            Some(LevelFilter::DEBUG)
        } else {
            Some(LevelFilter::INFO)
        }
    }

    /// File level, never coarser than INFO
    pub fn file_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}

/// Install the global subscriber. Call once, before any work starts.
pub fn init_logging(options: &LoggingOptions) -> Result<()> {
    let console = options.console_level().map(|level| {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_timer(LocalTimestamp)
            .with_filter(filter)
    });

    let file = match &options.log_file {
        Some(path) => {
            let handle = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    ViesError::output(format!("Cannot open log file {}: {}", path.display(), e))
                })?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(handle))
                    .with_ansi(false)
                    .with_target(false)
                    .with_timer(LocalTimestamp)
                    .with_filter(options.file_level()),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| ViesError::internal(format!("Failed to initialise logging: {}", e)))
}
