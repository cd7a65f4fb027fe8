//! Suite orchestration.
//!
//! Scenarios run one at a time: each probe is awaited and evaluated before
//! the next one is sent. Nothing is shared between scenarios except the
//! immutable HTTP client.

mod outcome;
mod task;

use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::export::JsonlWriter;
use crate::initialization::init_probe_client;
use crate::probe::RequestProbe;
use crate::scenario::{build_catalog, filter_catalog, Scenario};

pub use outcome::{OutcomeKind, ScenarioOutcome, SuiteReport};
pub use task::run_scenario;

/// Runs the whole scenario catalog for `config`.
///
/// Regressions do not make this return an error; they are counted in the
/// report. Errors are reserved for setup problems.
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid
/// - The HTTP client cannot be built
/// - The report file cannot be created or written
///
/// # Example
///
/// ```no_run
/// use redirect_check::{run_suite, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     base_url: "http://download.allizom.org".to_string(),
///     ..Default::default()
/// };
/// let report = run_suite(config).await?;
/// println!("{} passed, {} failed", report.passed, report.failed);
/// # Ok(())
/// # }
/// ```
pub async fn run_suite(config: Config) -> Result<SuiteReport> {
    config.validate().context("Invalid configuration")?;

    let client = init_probe_client(config.timeout_seconds)
        .map_err(InitializationError::from)
        .context("Failed to initialize HTTP client")?;
    let probe = RequestProbe::new(client);

    let catalog = build_catalog(&config).context("Failed to build scenario catalog")?;
    let catalog = filter_catalog(catalog, config.filter.as_deref());
    if catalog.is_empty() {
        warn!(
            "No scenarios match filter {:?}",
            config.filter.as_deref().unwrap_or_default()
        );
    }

    let mut writer = match &config.report {
        Some(path) => Some(JsonlWriter::create(path)?),
        None => None,
    };

    info!(
        "Running {} scenario{} against {}",
        catalog.len(),
        if catalog.len() == 1 { "" } else { "s" },
        config.base_url
    );

    let start = Instant::now();
    let mut report = run_scenarios(&probe, &catalog, writer.as_mut()).await?;
    report.elapsed_seconds = start.elapsed().as_secs_f64();

    if let Some(writer) = writer {
        let written = writer.finish()?;
        info!("Wrote {} outcome{} to report", written, if written == 1 { "" } else { "s" });
    }

    info!(
        "{} passed, {} failed, {} expected failure{} in {:.1}s",
        report.passed,
        report.failed,
        report.expected_failures,
        if report.expected_failures == 1 { "" } else { "s" },
        report.elapsed_seconds
    );

    Ok(report)
}

/// Runs `scenarios` in order and aggregates the outcomes.
///
/// # Errors
///
/// Only fails if writing to `writer` fails; scenario failures are recorded.
pub async fn run_scenarios(
    probe: &RequestProbe,
    scenarios: &[Scenario],
    mut writer: Option<&mut JsonlWriter>,
) -> Result<SuiteReport> {
    let mut report = SuiteReport::default();
    for scenario in scenarios {
        let outcome = run_scenario(probe, scenario).await;
        if let Some(writer) = writer.as_deref_mut() {
            writer.write_outcome(&outcome)?;
        }
        report.record(outcome);
    }
    Ok(report)
}
