//! Scenario outcomes and the suite report.

use std::collections::BTreeMap;

use serde::Serialize;

/// How a scenario ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Every expectation held.
    Passed,
    /// The probe never got a response (timeout, connection, TLS, redirect loop).
    TransportError,
    /// A response came back but an expectation did not hold.
    AssertionMismatch,
    /// The scenario is known to be broken; not counted against the suite.
    ExpectedFailure,
}

impl OutcomeKind {
    /// Whether this outcome should fail the suite.
    pub fn is_regression(&self) -> bool {
        matches!(
            self,
            OutcomeKind::TransportError | OutcomeKind::AssertionMismatch
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutcomeKind::Passed => "PASS",
            OutcomeKind::TransportError | OutcomeKind::AssertionMismatch => "FAIL",
            OutcomeKind::ExpectedFailure => "XFAIL",
        }
    }
}

/// Report entry for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub scenario: String,
    /// Full URL that was requested
    pub request_url: String,
    /// Query parameters sent
    pub params: BTreeMap<String, String>,
    /// How the scenario ended
    pub kind: OutcomeKind,
    /// Final URL after redirects, if a response came back
    pub final_url: Option<String>,
    /// Final status code, if a response came back
    pub status_code: Option<u16>,
    /// `X-Backend-Server` of the final response, if present
    pub backend_server: Option<String>,
    /// Diagnostic for failures; what was observed for expected failures
    pub detail: Option<String>,
    /// Known-failure reason
    pub reason: Option<String>,
    /// Known-failure bug tracker reference
    pub tracking_ref: Option<String>,
    /// Wall time of the probe in milliseconds
    pub elapsed_ms: u64,
}

/// Aggregated results of a suite run.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    /// Number of scenarios run
    pub total: usize,
    /// Scenarios where every expectation held
    pub passed: usize,
    /// Regressions: transport errors plus assertion mismatches
    pub failed: usize,
    /// Known failures
    pub expected_failures: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
    /// Every outcome, in catalog order
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    /// Adds an outcome and updates the counters.
    pub fn record(&mut self, outcome: ScenarioOutcome) {
        self.total += 1;
        match outcome.kind {
            OutcomeKind::Passed => self.passed += 1,
            OutcomeKind::ExpectedFailure => self.expected_failures += 1,
            OutcomeKind::TransportError | OutcomeKind::AssertionMismatch => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn has_regressions(&self) -> bool {
        self.failed > 0
    }

    pub fn regressions(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| o.kind.is_regression())
    }

    /// Process exit code for this report: 0 when nothing regressed, 2 otherwise.
    ///
    /// Exit code 1 is left for runs that could not start at all.
    pub fn exit_code(&self) -> i32 {
        if self.has_regressions() {
            2
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, kind: OutcomeKind) -> ScenarioOutcome {
        ScenarioOutcome {
            scenario: name.to_string(),
            request_url: "http://x/".to_string(),
            params: BTreeMap::new(),
            kind,
            final_url: None,
            status_code: None,
            backend_server: None,
            detail: None,
            reason: None,
            tracking_ref: None,
            elapsed_ms: 0,
        }
    }

    #[test]
    fn test_report_counters() {
        let mut report = SuiteReport::default();
        report.record(outcome("a", OutcomeKind::Passed));
        report.record(outcome("b", OutcomeKind::ExpectedFailure));
        report.record(outcome("c", OutcomeKind::TransportError));
        report.record(outcome("d", OutcomeKind::AssertionMismatch));

        assert_eq!(report.total, 4);
        assert_eq!(report.passed, 1);
        assert_eq!(report.expected_failures, 1);
        assert_eq!(report.failed, 2);
        assert!(report.has_regressions());
        let names: Vec<_> = report.regressions().map(|o| o.scenario.as_str()).collect();
        assert_eq!(names, vec!["c", "d"]);
    }

    #[test]
    fn test_expected_failures_are_not_regressions() {
        let mut report = SuiteReport::default();
        report.record(outcome("a", OutcomeKind::ExpectedFailure));
        assert!(!report.has_regressions());
        assert!(!OutcomeKind::ExpectedFailure.is_regression());
        assert_eq!(OutcomeKind::ExpectedFailure.label(), "XFAIL");
    }

    #[test]
    fn test_outcome_serializes_snake_case_kind() {
        let json = serde_json::to_value(outcome("a", OutcomeKind::AssertionMismatch)).unwrap();
        assert_eq!(json["kind"], "assertion_mismatch");
        assert_eq!(json["scenario"], "a");
    }
}
