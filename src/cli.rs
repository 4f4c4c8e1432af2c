//! Command-line interface

use crate::config::ConfigOverrides;
use crate::utils::logging::LoggingOptions;
use clap::Parser;
use std::path::PathBuf;

/// Default log file, appended to on every run
pub const DEFAULT_LOG_FILE: &str = "default.log";

/// Proxy password, read from the environment or `.env` only
pub const PROXY_PASSWORD_ENV: &str = "PROXY_PWD";

/// Bulk validation of French SIREN numbers against the EU VIES VAT service
#[derive(Debug, Clone, Parser)]
#[command(name = "vies", version, long_version = crate::LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// File with one SIREN per line (blank lines and `#` comments are skipped)
    pub file: PathBuf,

    /// Result file [default: <FILE>.out]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Concurrent validations [default: 10]
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Requests per minute across all workers, 0 disables the limit [default: 300]
    #[arg(short = 'r', long = "rate-limit", value_name = "N", allow_negative_numbers = true)]
    pub rate_limit: Option<i64>,

    /// Log file, appended to
    #[arg(long = "log", value_name = "FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Derive VAT numbers without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Per-attempt details on the console
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Nothing on the console; the log file is still written
    #[arg(short, long)]
    pub quiet: bool,

    /// Ignore proxy settings and connect directly
    #[arg(long)]
    pub no_proxy: bool,

    /// HTTP timeout in seconds [default: 90]
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Attempts per SIREN, the first one included [default: 50]
    #[arg(long = "max-retries", value_name = "N")]
    pub max_retries: Option<u32>,

    /// First backoff delay in seconds [default: 0.2]
    #[arg(long, value_name = "SECONDS")]
    pub initial_delay: Option<f64>,

    /// Backoff growth factor [default: 1.5]
    #[arg(long, value_name = "FACTOR")]
    pub backoff_multiplier: Option<f64>,

    /// Backoff ceiling in seconds [default: 30]
    #[arg(long, value_name = "SECONDS")]
    pub max_delay: Option<f64>,

    /// YAML configuration file; flags take precedence over it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Proxy `<host>:<port>`
    #[arg(long, env = "PROXY_HOST", hide_env_values = true)]
    pub proxy_host: Option<String>,

    /// Proxy user
    #[arg(long, env = "PROXY_USER", hide_env_values = true)]
    pub proxy_user: Option<String>,

}

impl Cli {
    /// Output path, `<FILE>.out` unless given
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| crate::utils::io::default_output_path(&self.file))
    }

    pub fn logging_options(&self) -> LoggingOptions {
        LoggingOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            log_file: Some(self.log_file.clone()),
        }
    }

    /// Flags that override configuration values
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            workers: self.workers,
            rate_limit: self.rate_limit,
            timeout: self.timeout,
            max_attempts: self.max_retries,
            initial_delay: self.initial_delay,
            backoff_multiplier: self.backoff_multiplier,
            max_delay: self.max_delay,
            api_base: None,
            no_proxy: self.no_proxy,
            proxy_host: self.proxy_host.clone(),
            proxy_user: self.proxy_user.clone(),
            proxy_password: std::env::var(PROXY_PASSWORD_ENV)
                .ok()
                .filter(|p| !p.is_empty()),
        }
    }
}
