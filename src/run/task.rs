//! Running a single scenario.

use std::time::Instant;

use log::{error, info, warn};

use crate::evaluate::{evaluate, format_transport_diagnostic, KnownFailure, Verdict};
use crate::probe::RequestProbe;
use crate::scenario::Scenario;

use super::outcome::{OutcomeKind, ScenarioOutcome};

/// Probes and evaluates one scenario.
///
/// The request is always sent, even for scenarios annotated as known
/// failures. For those, whatever happens is reported as an expected failure,
/// with the underlying result kept in `detail`.
///
/// Never fails: transport errors become `OutcomeKind::TransportError` so one
/// scenario cannot abort its siblings.
pub async fn run_scenario(probe: &RequestProbe, scenario: &Scenario) -> ScenarioOutcome {
    let start = Instant::now();
    let request = &scenario.request;

    let mut outcome = ScenarioOutcome {
        scenario: scenario.name.clone(),
        request_url: request
            .request_url()
            .map(|url| url.to_string())
            .unwrap_or_else(|_| request.base_url().to_string()),
        params: request.query_params().clone(),
        kind: OutcomeKind::Passed,
        final_url: None,
        status_code: None,
        backend_server: None,
        detail: None,
        reason: None,
        tracking_ref: None,
        elapsed_ms: 0,
    };

    match probe.probe(request).await {
        Ok(result) => {
            outcome.final_url = Some(result.final_url().to_string());
            outcome.status_code = Some(result.status_code());
            outcome.backend_server = result.backend_server().map(str::to_string);

            match evaluate(request, &result, &scenario.expectations) {
                Verdict::Pass => {}
                Verdict::Mismatch(mismatch) => {
                    outcome.kind = OutcomeKind::AssertionMismatch;
                    outcome.detail = Some(mismatch.diagnostic);
                }
                Verdict::ExpectedFailure(known) => {
                    mark_expected_failure(&mut outcome, &known);
                }
            }
        }
        Err(err) => {
            outcome.kind = OutcomeKind::TransportError;
            outcome.detail = Some(format_transport_diagnostic(request, &err));
        }
    }

    if let Some(known) = &scenario.known_failure {
        if outcome.kind == OutcomeKind::Passed {
            warn!(
                "{} passed but is marked as a known failure ({}); the annotation may be stale",
                scenario.name, known
            );
            outcome.detail = Some("passed unexpectedly".to_string());
        }
        mark_expected_failure(&mut outcome, known);
    }

    outcome.elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    log_outcome(&outcome);
    outcome
}

fn mark_expected_failure(outcome: &mut ScenarioOutcome, known: &KnownFailure) {
    outcome.kind = OutcomeKind::ExpectedFailure;
    outcome.reason = Some(known.reason().to_string());
    outcome.tracking_ref = known.tracking_ref().map(str::to_string);
}

fn log_outcome(outcome: &ScenarioOutcome) {
    match outcome.kind {
        OutcomeKind::Passed => info!(
            "{} {} -> {}",
            outcome.kind.label(),
            outcome.scenario,
            outcome.final_url.as_deref().unwrap_or_default()
        ),
        OutcomeKind::ExpectedFailure => warn!(
            "{} {}: {}{}",
            outcome.kind.label(),
            outcome.scenario,
            outcome.reason.as_deref().unwrap_or_default(),
            outcome
                .tracking_ref
                .as_deref()
                .map(|r| format!(" ({r})"))
                .unwrap_or_default()
        ),
        OutcomeKind::TransportError | OutcomeKind::AssertionMismatch => error!(
            "{} {}\n{}",
            outcome.kind.label(),
            outcome.scenario,
            outcome.detail.as_deref().unwrap_or_default()
        ),
    }
}
