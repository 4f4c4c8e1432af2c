//! Application runner: configuration, input, then a dry run or a batch

mod dry_run;

pub use dry_run::{DryRunReport, DryRunRow};

use crate::cli::Cli;
use crate::config::Config;
use crate::core::batch::{BatchOrchestrator, BatchSummary};
use crate::core::client::{ConsoleDiagnostics, Diagnostics, NoopDiagnostics, ReqwestTransport};
use crate::utils::io::{CsvSink, read_identifiers};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Run the tool for parsed command-line arguments
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli).await?;
    debug!("Effective configuration: {:?}", config);

    let identifiers = read_identifiers(&cli.file).await?;

    if cli.dry_run {
        println!("{}", DryRunReport::new(&identifiers));
        return Ok(());
    }

    run_batch(&cli, &config, identifiers).await?;
    Ok(())
}

/// Defaults, then the optional YAML file, then command-line flags
pub async fn load_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Loading {}", path.display()))?,
        None => Config::default(),
    };

    Ok(base.with_overrides(cli.overrides())?)
}

async fn run_batch(cli: &Cli, config: &Config, identifiers: Vec<String>) -> Result<BatchSummary> {
    debug!("Proxy: {}", config.proxy.sanitized());

    // Everything that can fail at startup is set up before the first request
    let transport = Arc::new(
        ReqwestTransport::new(&config.request, &config.proxy)
            .context("Building the HTTP client")?,
    );
    let output = cli.output_path();
    let mut sink = CsvSink::create(&output, !cli.quiet)?;

    let diagnostics: Arc<dyn Diagnostics> = if cli.quiet {
        Arc::new(NoopDiagnostics)
    } else {
        Arc::new(ConsoleDiagnostics)
    };
    let orchestrator = BatchOrchestrator::from_config(config, transport, diagnostics);

    info!("{}", "-".repeat(80));
    info!(
        "Processing file {} ({} workers)",
        cli.file.display(),
        orchestrator.workers()
    );
    if !cli.quiet {
        println!("Processing {} SIRENs...", identifiers.len());
    }

    let report = orchestrator.run(identifiers, &mut sink).await?;
    let summary = report.summary;

    info!(
        "Finished {} SIRENs from {} (duration: {:.2}s, mean: {:.2}s/SIREN)",
        summary.total,
        cli.file.display(),
        summary.total_duration.as_secs_f64(),
        summary.avg_duration.as_secs_f64()
    );
    info!(
        "{} valid, {} invalid, {} undetermined ({} malformed, {} exhausted)",
        summary.valid, summary.invalid, summary.undetermined, summary.malformed, summary.exhausted
    );

    if !cli.quiet {
        print_summary(&summary, sink.path());
    }

    Ok(summary)
}

fn print_summary(summary: &BatchSummary, output: &Path) {
    let rule = "=".repeat(40);
    println!();
    println!("{}", rule);
    println!(
        "Summary: {} valid, {} invalid, {} undetermined",
        summary.valid, summary.invalid, summary.undetermined
    );
    println!("Results written to: {}", output.display());
    println!("{}", rule);
}
