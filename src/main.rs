//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing summary and exit code
//!
//! Exit codes: 0 when nothing regressed, 2 when any scenario regressed,
//! 1 when the suite could not run at all.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use redirect_check::initialization::init_logger_with;
use redirect_check::{run_suite, Config, Opt, SuiteReport};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set REDIRECT_CHECK_BASE_URL
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_suite(config).await {
        Ok(report) => {
            print_summary(&report);
            match report.exit_code() {
                0 => Ok(()),
                code => process::exit(code),
            }
        }
        Err(e) => {
            eprintln!("redirect_check error: {:#}", e);
            process::exit(1);
        }
    }
}

fn print_summary(report: &SuiteReport) {
    for outcome in report.regressions() {
        println!("FAILED {}", outcome.scenario);
        if let Some(detail) = &outcome.detail {
            for line in detail.lines() {
                println!("    {}", line);
            }
        }
    }
    println!(
        "{} scenario{}: {} passed, {} failed, {} expected failure{} in {:.1}s",
        report.total,
        if report.total == 1 { "" } else { "s" },
        report.passed,
        report.failed,
        report.expected_failures,
        if report.expected_failures == 1 { "" } else { "s" },
        report.elapsed_seconds
    );
}
