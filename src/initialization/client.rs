//! HTTP client initialization.
//!
//! This module builds the single HTTP client shared by every probe.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::MAX_REDIRECT_HOPS;

/// Initializes the probe HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - A fixed timeout covering the whole redirect chain
/// - Redirect following enabled (up to `MAX_REDIRECT_HOPS` hops)
/// - TLS certificate verification disabled, since staging deployments of the
///   redirect service present non-production certificates
///
/// No default User-Agent is set here: every probe sends its own.
///
/// # Arguments
///
/// * `timeout_seconds` - Per-probe timeout
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_probe_client(timeout_seconds: u64) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(Arc::new(client))
}
