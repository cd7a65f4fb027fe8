//! Probe results.

use std::collections::BTreeMap;

use url::Url;

use crate::config::HEADER_X_BACKEND_SERVER;

/// The terminal response of a probe, after all redirects were followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    final_url: Url,
    status_code: u16,
    response_headers: BTreeMap<String, String>,
}

impl ProbeResult {
    /// Creates a result. Header names are lowercased.
    pub fn new(final_url: Url, status_code: u16, response_headers: BTreeMap<String, String>) -> Self {
        let response_headers = response_headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        Self {
            final_url,
            status_code,
            response_headers,
        }
    }

    /// Builds a result from a `reqwest` response.
    ///
    /// Repeated headers are joined with `", "`. Values that are not valid
    /// visible ASCII are stored as empty strings.
    pub fn from_response(response: &reqwest::Response) -> Self {
        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in response.headers() {
            let value = value.to_str().unwrap_or_default();
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }
        Self::new(response.url().clone(), response.status().as_u16(), headers)
    }

    pub fn final_url(&self) -> &Url {
        &self.final_url
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn response_headers(&self) -> &BTreeMap<String, String> {
        &self.response_headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Value of `X-Backend-Server`, if the response carried one.
    pub fn backend_server(&self) -> Option<&str> {
        self.header(HEADER_X_BACKEND_SERVER)
    }

    pub fn scheme(&self) -> &str {
        self.final_url.scheme()
    }

    /// Network location of the final URL (host, plus port when non-default).
    pub fn host(&self) -> String {
        url_authority(&self.final_url)
    }

    pub fn path(&self) -> &str {
        self.final_url.path()
    }

    /// Raw query string of the final URL, empty when there is none.
    pub fn query(&self) -> &str {
        self.final_url.query().unwrap_or_default()
    }
}

/// Host of a URL, with `:port` appended when the port is not the scheme default.
pub fn url_authority(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}
