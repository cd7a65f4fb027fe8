//! Test scenarios for the redirect service.
//!
//! A scenario pairs one probe request with the ordered expectations its
//! final response must meet, plus an optional known-failure annotation.

mod catalog;
mod platform;

use crate::evaluate::{Expectation, KnownFailure};
use crate::probe::RequestSpec;

pub use catalog::{
    build_catalog, filter_catalog, ProductAlias, CDN_HOST, LEGACY_WINDOWS_USER_AGENT,
    LOCALE_CHECK_PRODUCT, PRODUCT_ALIASES, STUB_INSTALLER_HOST, UA_GATED_PRODUCT, WIN8_USER_AGENT,
};
pub use platform::{resolve_locale, Platform, FIREFOX_LOCALES};

/// One request/evaluate cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Unique, human-readable name used in reports and filters
    pub name: String,
    /// The probe to send
    pub request: RequestSpec,
    /// Checked in order against the probe result
    pub expectations: Vec<Expectation>,
    /// When set, the scenario still runs but can never count as a regression
    pub known_failure: Option<KnownFailure>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, request: RequestSpec) -> Self {
        Self {
            name: name.into(),
            request,
            expectations: Vec::new(),
            known_failure: None,
        }
    }

    /// Appends an expectation.
    pub fn expect(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Marks the scenario as known to fail.
    pub fn known_failure(mut self, known: KnownFailure) -> Self {
        self.known_failure = Some(known);
        self
    }
}
