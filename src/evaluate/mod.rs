//! Evaluating probe results against expectations.
//!
//! The evaluator knows nothing about products, locales or user agents. All of
//! the redirect service's business rules are expressed as scenario data in
//! `crate::scenario`; this module only compares.

mod diagnostic;
mod expectation;

use std::collections::BTreeMap;

use thiserror::Error;
use url::form_urlencoded;

use crate::probe::{ProbeResult, RequestSpec};

pub use diagnostic::{format_diagnostic, format_transport_diagnostic};
pub use expectation::{Expectation, KnownFailure};

/// An expectation that did not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{diagnostic}")]
pub struct AssertionMismatch {
    /// The expectation that failed
    pub expectation: Expectation,
    /// What was observed instead
    pub actual: String,
    /// Self-contained failure message
    pub diagnostic: String,
}

/// Result of evaluating one probe result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every expectation held.
    Pass,
    /// The first expectation that failed.
    Mismatch(AssertionMismatch),
    /// Evaluation reached a `KnownFailure` expectation.
    ExpectedFailure(KnownFailure),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Checks `result` against `expectations` in order.
///
/// Stops at the first mismatch, or at the first `KnownFailure` expectation.
/// An empty expectation list passes.
pub fn evaluate(request: &RequestSpec, result: &ProbeResult, expectations: &[Expectation]) -> Verdict {
    for expectation in expectations {
        let actual = match expectation {
            Expectation::KnownFailure(known) => return Verdict::ExpectedFailure(known.clone()),
            Expectation::StatusEquals(code) => {
                (result.status_code() != *code).then(|| result.status_code().to_string())
            }
            Expectation::SchemeEquals(scheme) => {
                (result.scheme() != scheme.as_str()).then(|| format!("{:?}", result.scheme()))
            }
            Expectation::HostEquals(host) => {
                let actual = result.host();
                (actual != *host).then(|| format!("{actual:?}"))
            }
            Expectation::PathContains(fragment) => {
                (!result.path().contains(fragment.as_str())).then(|| format!("{:?}", result.path()))
            }
            Expectation::QueryEquals(params) => {
                let actual = canonical_query(result.query());
                (actual != canonical_query_from_map(params)).then(|| format!("{actual:?}"))
            }
        };

        if let Some(actual) = actual {
            let diagnostic = format_diagnostic(request, result, expectation, &actual);
            return Verdict::Mismatch(AssertionMismatch {
                expectation: expectation.clone(),
                actual,
                diagnostic,
            });
        }
    }
    Verdict::Pass
}

/// Re-encodes a raw query string with its pairs sorted.
///
/// Two queries are equivalent when they carry the same pairs, regardless of
/// order or of `%20` versus `+` for spaces.
pub fn canonical_query(query: &str) -> String {
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    pairs.sort();
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Canonical encoding of a parameter map, comparable with [`canonical_query`].
pub fn canonical_query_from_map(params: &BTreeMap<String, String>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn request() -> RequestSpec {
        RequestSpec::download("http://download.mozilla.org", "firefox-16.0b6", "kitty_language", "stella")
            .build()
    }

    fn result(url: &str, status: u16) -> ProbeResult {
        ProbeResult::new(
            Url::parse(url).unwrap(),
            status,
            BTreeMap::from([("x-backend-server".to_string(), "bouncer1".to_string())]),
        )
    }

    #[test]
    fn test_all_expectations_hold() {
        let request = request();
        let result = result(
            "http://download.mozilla.org/?product=firefox-16.0b6&lang=kitty_language&os=stella",
            404,
        );
        let expectations = vec![
            Expectation::status(404),
            Expectation::scheme("http"),
            Expectation::host("download.mozilla.org"),
            Expectation::query(request.query_params().clone()),
        ];
        assert_eq!(evaluate(&request, &result, &expectations), Verdict::Pass);
    }

    #[test]
    fn test_empty_expectations_pass() {
        assert!(evaluate(&request(), &result("http://x/", 500), &[]).is_pass());
    }

    #[test]
    fn test_first_mismatch_stops_evaluation() {
        let result = result("https://download.mozilla.org/", 200);
        let expectations = vec![
            Expectation::status(404),
            Expectation::scheme("http"),
        ];
        match evaluate(&request(), &result, &expectations) {
            Verdict::Mismatch(mismatch) => {
                assert_eq!(mismatch.expectation, Expectation::status(404));
                assert_eq!(mismatch.actual, "200");
                assert!(mismatch.diagnostic.contains("X-Backend-Server: bouncer1"));
                assert!(mismatch.to_string().starts_with("Expected status == 404, got 200"));
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_scheme_mismatch_reports_https_escalation() {
        let result = result("https://download.mozilla.org/", 404);
        let verdict = evaluate(&request(), &result, &[Expectation::scheme("http")]);
        match verdict {
            Verdict::Mismatch(mismatch) => assert_eq!(mismatch.actual, "\"https\""),
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_path_contains() {
        let result = result(
            "http://download.cdn.mozilla.net/pub/firefox/releases/19.0/win32/en-US/Firefox%20Setup%2019.0.exe",
            200,
        );
        assert!(evaluate(&request(), &result, &[Expectation::path_contains("19.0.exe")]).is_pass());
        assert!(!evaluate(&request(), &result, &[Expectation::path_contains("19.0.1")]).is_pass());
    }

    #[test]
    fn test_host_mismatch() {
        let result = result("http://download-origin.cdn.mozilla.net/x", 200);
        let verdict = evaluate(
            &request(),
            &result,
            &[Expectation::host("download.cdn.mozilla.net")],
        );
        assert!(matches!(verdict, Verdict::Mismatch(_)));
    }

    #[test]
    fn test_query_equals_ignores_order_and_space_encoding() {
        let params = BTreeMap::from([
            ("a".to_string(), "x y".to_string()),
            ("b".to_string(), "1".to_string()),
        ]);
        let reordered = result("http://x/?b=1&a=x%20y", 404);
        assert!(evaluate(&request(), &reordered, &[Expectation::query(params.clone())]).is_pass());

        let result_extra = result("http://x/?b=1&a=x%20y&c=2", 404);
        assert!(!evaluate(&request(), &result_extra, &[Expectation::query(params)]).is_pass());
    }

    #[test]
    fn test_known_failure_short_circuits() {
        let known = KnownFailure::tracked("alias returns 404", "bug 813968").unwrap();
        let expectations = vec![
            Expectation::known_failure(known.clone()),
            Expectation::status(200),
        ];
        let verdict = evaluate(&request(), &result("http://x/", 404), &expectations);
        assert_eq!(verdict, Verdict::ExpectedFailure(known));
    }

    #[test]
    fn test_mismatch_before_known_failure_wins() {
        let expectations = vec![
            Expectation::status(200),
            Expectation::known_failure(KnownFailure::new("later").unwrap()),
        ];
        let verdict = evaluate(&request(), &result("http://x/", 404), &expectations);
        assert!(matches!(verdict, Verdict::Mismatch(_)));
    }

    #[test]
    fn test_canonical_query() {
        assert_eq!(canonical_query("os=win&lang=en-US"), "lang=en-US&os=win");
        assert_eq!(canonical_query(""), "");
    }
}
