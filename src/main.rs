//! vies - bulk SIREN to VAT validation against the EU VIES service

#![allow(missing_docs)]

use clap::Parser;
use std::process::ExitCode;
use vies_rs::cli::Cli;
use vies_rs::utils::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.logging_options()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let quiet = cli.quiet;
    match vies_rs::app::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            // The console layer is off in quiet mode
            if quiet {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
