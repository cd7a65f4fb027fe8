//! The scenario catalog.
//!
//! Each scenario encodes one business rule of the redirect service as data:
//! which request to send and where it must land. The catalog is built once
//! from the configuration and never changes afterwards.

use std::collections::HashSet;

use url::Url;

use crate::config::{Config, STAGING_BASE_URL, STAGING_HOST};
use crate::error_handling::ConfigError;
use crate::evaluate::{Expectation, KnownFailure};
use crate::probe::{url_authority, RequestSpec, RequestSpecBuilder};

use super::platform::{resolve_locale, Platform};
use super::Scenario;

/// Product used for the locale/OS matrix and the invalid-parameter check.
pub const LOCALE_CHECK_PRODUCT: &str = "firefox-16.0b6";

/// Product whose Windows build is gated on the user agent.
pub const UA_GATED_PRODUCT: &str = "firefox-19.0";

/// Internet Explorer 10 on Windows 8 (NT 6.2).
pub const WIN8_USER_AGENT: &str = "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Trident/6.0)";

/// Internet Explorer 8 on Windows Vista (NT 6.0).
pub const LEGACY_WINDOWS_USER_AGENT: &str =
    "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.0; Trident/4.0)";

/// CDN host serving regular installers.
pub const CDN_HOST: &str = "download.cdn.mozilla.net";

/// CDN host serving stub installers.
pub const STUB_INSTALLER_HOST: &str = "download-installer.cdn.mozilla.net";

/// A product alias and the locale it is checked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductAlias {
    pub product: &'static str,
    pub lang: &'static str,
}

/// Aliases checked on Windows.
pub const PRODUCT_ALIASES: &[ProductAlias] = &[
    ProductAlias {
        product: "firefox-beta-latest",
        lang: "en-US",
    },
    ProductAlias {
        product: "firefox-latest-euballot",
        lang: "en-GB",
    },
    ProductAlias {
        product: "firefox-latest",
        lang: "en-US",
    },
];

/// Aliases whose download path has no platform directory.
const PLATFORMLESS_ALIASES: &[&str] = &[
    "firefox-nightly-latest",
    "firefox-aurora-latest",
    "firefox-latest-euballot",
];

const EUBALLOT_ALIAS: &str = "firefox-latest-euballot";

/// Builds the full scenario catalog for `config`.
///
/// Order: invalid parameters, user-agent gating, the locale × platform
/// matrix, the stub installer, then the product aliases.
///
/// # Errors
///
/// Returns `ConfigError::UnparseableBaseUrl` if the base URL does not parse.
pub fn build_catalog(config: &Config) -> Result<Vec<Scenario>, ConfigError> {
    let base = Url::parse(&config.base_url).map_err(|source| ConfigError::UnparseableBaseUrl {
        url: config.base_url.clone(),
        source,
    })?;

    let mut catalog = vec![
        incorrect_query_values(config, &base)?,
        user_agent_gated(
            config,
            "win8_user_agent_gets_patched_build",
            WIN8_USER_AGENT,
            "19.0.1",
        ),
        user_agent_gated(
            config,
            "legacy_windows_user_agent_gets_pinned_build",
            LEGACY_WINDOWS_USER_AGENT,
            "19.0.exe",
        ),
    ];

    let mut seen = HashSet::new();
    for lang in config.locales.iter().map(|l| l.trim()) {
        if lang.is_empty() || !seen.insert(lang) {
            continue;
        }
        for &platform in &config.platforms {
            catalog.push(locale_and_platform(config, lang, platform));
        }
    }

    catalog.push(stub_installer(config)?);

    for alias in PRODUCT_ALIASES {
        catalog.push(product_alias(config, alias)?);
    }

    Ok(catalog)
}

/// Keeps only scenarios whose name contains `filter`.
pub fn filter_catalog(catalog: Vec<Scenario>, filter: Option<&str>) -> Vec<Scenario> {
    match filter {
        Some(needle) => catalog
            .into_iter()
            .filter(|scenario| scenario.name.contains(needle))
            .collect(),
        None => catalog,
    }
}

fn download(config: &Config, product: &str, lang: &str, os: &str) -> RequestSpecBuilder {
    RequestSpec::download(&config.base_url, product, lang, os).user_agent(&config.user_agent)
}

fn is_staging(config: &Config) -> bool {
    config.base_url.trim_end_matches('/') == STAGING_BASE_URL
}

/// Garbage `lang`/`os` must 404 on the service itself, over plain http, with
/// the query passed through untouched.
fn incorrect_query_values(config: &Config, base: &Url) -> Result<Scenario, ConfigError> {
    let request = download(config, LOCALE_CHECK_PRODUCT, "kitty_language", "stella").build();
    let params = request.query_params().clone();
    let scenario = Scenario::new("incorrect_query_values", request)
        .expect(Expectation::status(404))
        .expect(Expectation::scheme("http"))
        .expect(Expectation::host(url_authority(base)))
        .expect(Expectation::query(params));

    if is_staging(config) {
        Ok(scenario.known_failure(KnownFailure::tracked(
            "fails when run against stage",
            "https://bugzilla.mozilla.org/show_bug.cgi?id=801928",
        )?))
    } else {
        Ok(scenario)
    }
}

fn user_agent_gated(
    config: &Config,
    name: &str,
    user_agent: &str,
    path_fragment: &str,
) -> Scenario {
    let request = download(config, UA_GATED_PRODUCT, "en-US", Platform::Win.as_str())
        .user_agent(user_agent)
        .build();
    Scenario::new(name, request).expect(Expectation::path_contains(path_fragment))
}

fn locale_and_platform(config: &Config, lang: &str, platform: Platform) -> Scenario {
    let request = download(
        config,
        LOCALE_CHECK_PRODUCT,
        resolve_locale(lang, platform),
        platform.as_str(),
    )
    .build();
    Scenario::new(format!("locale_os[{lang}-{platform}]"), request)
        .expect(Expectation::status(200))
        .expect(Expectation::scheme("http"))
}

fn stub_installer(config: &Config) -> Result<Scenario, ConfigError> {
    let request = download(config, &config.product, "en-US", Platform::Win.as_str()).build();
    let known = KnownFailure::new(
        "there currently is not a stub installer -- expected to fail until one lands in the wild",
    )?;
    Ok(Scenario::new("stub_installer_en_us_win", request)
        .expect(Expectation::status(200))
        .expect(Expectation::scheme("https"))
        .expect(Expectation::host(STUB_INSTALLER_HOST))
        .known_failure(known))
}

fn product_alias(config: &Config, alias: &ProductAlias) -> Result<Scenario, ConfigError> {
    let request = download(config, alias.product, alias.lang, Platform::Win.as_str()).build();
    let scenario = Scenario::new(format!("alias[{}-{}]", alias.product, alias.lang), request);

    // Any response is accepted for euballot on staging
    if alias.product == EUBALLOT_ALIAS && config.base_url.contains(STAGING_HOST) {
        return Ok(scenario);
    }

    let mut scenario = scenario
        .expect(Expectation::status(200))
        .expect(Expectation::scheme("http"))
        .expect(Expectation::host(CDN_HOST));
    if !PLATFORMLESS_ALIASES.contains(&alias.product) {
        scenario = scenario.expect(Expectation::path_contains("/win32/"));
    }

    if alias.product == "firefox-latest" && alias.lang == "en-US" {
        scenario = scenario.known_failure(KnownFailure::tracked(
            "Alias returns 404",
            "https://bugzilla.mozilla.org/show_bug.cgi?id=813968",
        )?);
    }
    Ok(scenario)
}
