//! Probe request description.
//!
//! A [`RequestSpec`] is everything needed to issue one probe: where to send
//! it, which user agent and locale to claim, and which query parameters to
//! pass to the redirect service.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::Url;

use crate::config::{DEFAULT_LOCALE, DEFAULT_USER_AGENT};

/// Query parameter naming the product (or product alias) to download.
pub const PARAM_PRODUCT: &str = "product";
/// Query parameter naming the locale of the build.
pub const PARAM_LANG: &str = "lang";
/// Query parameter naming the target operating system.
pub const PARAM_OS: &str = "os";

/// One probe request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestSpec {
    base_url: String,
    user_agent: String,
    locale: String,
    query_params: BTreeMap<String, String>,
}

impl RequestSpec {
    /// Starts a builder with the default user agent and `en-US` locale.
    pub fn builder(base_url: impl Into<String>) -> RequestSpecBuilder {
        RequestSpecBuilder {
            base_url: base_url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            query_params: BTreeMap::new(),
        }
    }

    /// Shorthand for the common `product`/`lang`/`os` request.
    pub fn download(base_url: &str, product: &str, lang: &str, os: &str) -> RequestSpecBuilder {
        Self::builder(base_url)
            .param(PARAM_PRODUCT, product)
            .param(PARAM_LANG, lang)
            .param(PARAM_OS, os)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query_params
    }

    /// Builds the URL actually requested: the base URL with the query
    /// parameters form-encoded and appended.
    ///
    /// # Errors
    ///
    /// Returns a `url::ParseError` if the base URL does not parse.
    pub fn request_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.base_url)?;
        if !self.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query_params);
        }
        Ok(url)
    }
}

/// Renders the query parameters as `{key: value, ...}` for diagnostics.
pub struct DisplayParams<'a>(pub &'a BTreeMap<String, String>);

impl fmt::Display for DisplayParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value:?}")?;
        }
        f.write_str("}")
    }
}

/// Builder for [`RequestSpec`].
#[derive(Debug, Clone)]
pub struct RequestSpecBuilder {
    base_url: String,
    user_agent: String,
    locale: String,
    query_params: BTreeMap<String, String>,
}

impl RequestSpecBuilder {
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> RequestSpec {
        RequestSpec {
            base_url: self.base_url,
            user_agent: self.user_agent,
            locale: self.locale,
            query_params: self.query_params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let spec = RequestSpec::builder("http://download.mozilla.org").build();
        assert_eq!(spec.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(spec.locale(), "en-US");
        assert!(spec.query_params().is_empty());
    }

    #[test]
    fn test_request_url_without_params_has_no_query() {
        let spec = RequestSpec::builder("http://download.mozilla.org/").build();
        let url = spec.request_url().unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.as_str(), "http://download.mozilla.org/");
    }

    #[test]
    fn test_request_url_form_encodes_params() {
        let spec = RequestSpec::download(
            "http://download.mozilla.org",
            "firefox-16.0b6",
            "ja-JP-mac",
            "osx",
        )
        .param("extra", "a b&c")
        .build();
        let url = spec.request_url().unwrap();
        assert_eq!(
            url.query(),
            Some("extra=a+b%26c&lang=ja-JP-mac&os=osx&product=firefox-16.0b6")
        );
    }

    #[test]
    fn test_request_url_rejects_garbage() {
        let spec = RequestSpec::builder("download.mozilla.org").build();
        assert!(spec.request_url().is_err());
    }

    #[test]
    fn test_overrides() {
        let spec = RequestSpec::builder("http://x")
            .user_agent("UA")
            .locale("de")
            .param(PARAM_OS, "win")
            .param(PARAM_OS, "linux")
            .build();
        assert_eq!(spec.user_agent(), "UA");
        assert_eq!(spec.locale(), "de");
        assert_eq!(spec.query_params().get(PARAM_OS).map(String::as_str), Some("linux"));
    }

    #[test]
    fn test_display_params() {
        let spec = RequestSpec::download("http://x", "firefox-19.0", "en-US", "win").build();
        assert_eq!(
            DisplayParams(spec.query_params()).to_string(),
            r#"{"lang": "en-US", "os": "win", "product": "firefox-19.0"}"#
        );
    }
}
