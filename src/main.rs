//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `smokepeer` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output and exit statuses
//!
//! Results (match lines, the dry-run config, the run summary) go to stdout.
//! Log records and the fatal error message go to stderr, and the process
//! exits with the status mapped from that error.
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use smokepeer::initialization::init_logger_with;
use smokepeer::{run_smokepeer, Config, RunReport};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real environment and flags still apply
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_smokepeer(config).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e) => {
            eprintln!("smokepeer error: {e}");
            process::exit(e.exit_status().code());
        }
    }
}

fn print_report(report: &RunReport) {
    for node in &report.matches {
        println!(
            "{} -- {} (Closest Airport: {})",
            node.location,
            node.city,
            node.airport.as_deref().unwrap_or("none")
        );
    }

    if let Some(document) = &report.document {
        print!("{document}");
    }

    println!(
        "Resolved {} address{}, {} reachable, {} target{}",
        report.resolved,
        if report.resolved == 1 { "" } else { "es" },
        report.reachable,
        report.targets,
        if report.targets == 1 { "" } else { "s" },
    );
    if let Some(path) = &report.written_to {
        println!("Smokeping config saved in {}", path.display());
    }
}
