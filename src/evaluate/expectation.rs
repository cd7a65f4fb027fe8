//! Declarative expectations about where a probe should end up.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error_handling::ConfigError;

/// A scenario that is known to be broken upstream.
///
/// The scenario still runs, but whatever happens is reported as an expected
/// failure rather than a regression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownFailure {
    reason: String,
    tracking_ref: Option<String>,
}

impl KnownFailure {
    /// A known failure without a tracker reference.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyKnownFailureReason` if `reason` is blank.
    pub fn new(reason: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            reason: non_blank_reason(reason.into())?,
            tracking_ref: None,
        })
    }

    /// A known failure with a bug tracker reference.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyKnownFailureReason` if `reason` is blank.
    pub fn tracked(
        reason: impl Into<String>,
        tracking_ref: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            reason: non_blank_reason(reason.into())?,
            tracking_ref: Some(tracking_ref.into()),
        })
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn tracking_ref(&self) -> Option<&str> {
        self.tracking_ref.as_deref()
    }
}

fn non_blank_reason(reason: String) -> Result<String, ConfigError> {
    if reason.trim().is_empty() {
        Err(ConfigError::EmptyKnownFailureReason)
    } else {
        Ok(reason)
    }
}

impl fmt::Display for KnownFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tracking_ref {
            Some(tracking_ref) => write!(f, "{} ({})", self.reason, tracking_ref),
            None => f.write_str(&self.reason),
        }
    }
}

/// One check against a probe result. Scenarios hold these in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "expected", rename_all = "snake_case")]
pub enum Expectation {
    /// Exact status code of the final response.
    StatusEquals(u16),
    /// Exact scheme of the final URL.
    SchemeEquals(String),
    /// Exact network location of the final URL.
    HostEquals(String),
    /// Substring of the final URL's path.
    PathContains(String),
    /// Final query string, compared in canonical form.
    QueryEquals(BTreeMap<String, String>),
    /// Stop evaluating and report an expected failure.
    KnownFailure(KnownFailure),
}

impl Expectation {
    pub fn status(code: u16) -> Self {
        Expectation::StatusEquals(code)
    }

    pub fn scheme(scheme: impl Into<String>) -> Self {
        Expectation::SchemeEquals(scheme.into())
    }

    pub fn host(host: impl Into<String>) -> Self {
        Expectation::HostEquals(host.into())
    }

    pub fn path_contains(fragment: impl Into<String>) -> Self {
        Expectation::PathContains(fragment.into())
    }

    pub fn query(params: BTreeMap<String, String>) -> Self {
        Expectation::QueryEquals(params)
    }

    pub fn known_failure(known: KnownFailure) -> Self {
        Expectation::KnownFailure(known)
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::StatusEquals(code) => write!(f, "status == {code}"),
            Expectation::SchemeEquals(scheme) => write!(f, "scheme == {scheme:?}"),
            Expectation::HostEquals(host) => write!(f, "host == {host:?}"),
            Expectation::PathContains(fragment) => write!(f, "path contains {fragment:?}"),
            Expectation::QueryEquals(params) => {
                write!(f, "query == {:?}", super::canonical_query_from_map(params))
            }
            Expectation::KnownFailure(known) => write!(f, "known failure: {known}"),
        }
    }
}
