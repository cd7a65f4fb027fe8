//! Configuration constants.
//!
//! This module defines the constants used throughout the harness, including
//! probe timeouts, redirect limits and default request values.

/// Default base URL of the redirect service under test.
pub const DEFAULT_BASE_URL: &str = "http://download.mozilla.org";

/// Staging deployment of the redirect service.
///
/// A few scenarios behave differently against staging (aliases that are not
/// deployed there, a 404 handling bug).
pub const STAGING_BASE_URL: &str = "http://download.allizom.org";
pub const STAGING_HOST: &str = "download.allizom.org";

/// Default product used by the stub installer scenario.
pub const DEFAULT_PRODUCT: &str = "firefox-stub";

/// Per-probe timeout in seconds.
///
/// Covers the whole redirect chain, not a single hop.
pub const PROBE_TIMEOUT_SECS: u64 = 15;

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops between misconfigured backends
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for probes.
///
/// A desktop Firefox on Mac OS X. The redirect service only gates on the
/// user agent for Windows builds, so a Mac string gives the ungated answer.
///
/// Individual scenarios override this to exercise user-agent gating.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.7; rv:10.0.1) Gecko/20100101 Firefox/10.0.1";

/// Default `accept-language` value for probes.
pub const DEFAULT_LOCALE: &str = "en-US";

// URL validation
pub const URL_SCHEME_PATTERN: &str = r"^https?://";

/// Placeholder rendered in diagnostics when a response header is absent.
pub const MISSING_HEADER_VALUE: &str = "<missing>";
