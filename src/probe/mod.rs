//! Issuing probes against the redirect service.
//!
//! A probe is a single HEAD request. The shared client follows the redirect
//! chain; the probe records where it ended up and what the last response said.

mod request;
mod result;

use std::sync::Arc;

use log::debug;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};

use crate::error_handling::{categorize_reqwest_error, ProbeError};

pub use request::{DisplayParams, RequestSpec, RequestSpecBuilder, PARAM_LANG, PARAM_OS, PARAM_PRODUCT};
pub use result::{url_authority, ProbeResult};

/// Sends probes through a shared HTTP client.
///
/// Holds no mutable state, so clones can be used from any number of tasks.
#[derive(Debug, Clone)]
pub struct RequestProbe {
    client: Arc<reqwest::Client>,
}

impl RequestProbe {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Sends one HEAD request for `spec` and returns the terminal response.
    ///
    /// The request carries the `user-agent`, `accept-language` and query
    /// parameters of `spec`. One attempt only.
    ///
    /// # Errors
    ///
    /// - `ProbeError::InvalidUrl` if the base URL does not parse (nothing is sent)
    /// - `ProbeError::Transport` on timeout, connection, TLS or redirect failures
    pub async fn probe(&self, spec: &RequestSpec) -> Result<ProbeResult, ProbeError> {
        let url = spec
            .request_url()
            .map_err(|source| ProbeError::InvalidUrl {
                url: spec.base_url().to_string(),
                source,
            })?;

        debug!(
            "HEAD {} (user-agent: {:?}, accept-language: {})",
            url,
            spec.user_agent(),
            spec.locale()
        );

        let response = self
            .client
            .head(url.clone())
            .header(USER_AGENT, spec.user_agent())
            .header(ACCEPT_LANGUAGE, spec.locale())
            .send()
            .await
            .map_err(|source| ProbeError::Transport {
                url: url.to_string(),
                kind: categorize_reqwest_error(&source),
                source,
            })?;

        let result = ProbeResult::from_response(&response);
        debug!(
            "{} -> {} {}",
            url,
            result.status_code(),
            result.final_url()
        );
        Ok(result)
    }
}
