//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the CLI-free library configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use regex::Regex;
use strum::IntoEnumIterator;

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_PRODUCT, DEFAULT_USER_AGENT, PROBE_TIMEOUT_SECS, URL_SCHEME_PATTERN,
};
use crate::error_handling::ConfigError;
use crate::scenario::{Platform, FIREFOX_LOCALES};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Parsed by `clap` and converted into a [`Config`] with `Config::from`.
///
/// # Examples
///
/// ```bash
/// # Check production with the full locale list
/// redirect_check
///
/// # Check staging, only a couple of locales, write a report
/// redirect_check --base-url http://download.allizom.org --locales en-US,ja --report out.jsonl
///
/// # Only the alias scenarios
/// redirect_check --filter alias
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "redirect_check",
    about = "Checks download redirects for every product/locale/OS combination."
)]
pub struct Opt {
    /// Base URL of the redirect service
    #[arg(long, env = "REDIRECT_CHECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Product used by the stub installer scenario
    #[arg(long, default_value = DEFAULT_PRODUCT)]
    pub product: String,

    /// Comma-separated locales to check (defaults to the Firefox release locales)
    #[arg(long, value_delimiter = ',')]
    pub locales: Vec<String>,

    /// Comma-separated platforms to check: win,osx,linux (defaults to all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub platforms: Vec<Platform>,

    /// HTTP User-Agent for scenarios that don't set their own
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-probe timeout in seconds
    #[arg(long, default_value_t = PROBE_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Only run scenarios whose name contains this substring
    #[arg(long)]
    pub filter: Option<String>,

    /// Write a JSON Lines report of every scenario outcome to this file
    #[arg(long, value_parser)]
    pub report: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through `clap`.
///
/// # Examples
///
/// ```no_run
/// use redirect_check::Config;
///
/// let config = Config {
///     base_url: "http://download.allizom.org".to_string(),
///     locales: vec!["en-US".to_string(), "ja".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the redirect service
    pub base_url: String,

    /// Product used by the stub installer scenario
    pub product: String,

    /// Locales crossed with `platforms` for the locale/OS scenarios
    pub locales: Vec<String>,

    /// Platforms crossed with `locales`
    pub platforms: Vec<Platform>,

    /// Default HTTP User-Agent header value
    pub user_agent: String,

    /// Per-probe timeout in seconds
    pub timeout_seconds: u64,

    /// Scenario name filter
    pub filter: Option<String>,

    /// JSON Lines report path
    pub report: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            product: DEFAULT_PRODUCT.to_string(),
            locales: FIREFOX_LOCALES.iter().map(|l| l.to_string()).collect(),
            platforms: Platform::iter().collect(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: PROBE_TIMEOUT_SECS,
            filter: None,
            report: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let defaults = Config::default();
        Self {
            base_url: opt.base_url,
            product: opt.product,
            locales: if opt.locales.is_empty() {
                defaults.locales
            } else {
                opt.locales
            },
            platforms: if opt.platforms.is_empty() {
                defaults.platforms
            } else {
                opt.platforms
            },
            user_agent: opt.user_agent,
            timeout_seconds: opt.timeout_seconds,
            filter: opt.filter,
            report: opt.report,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

impl Config {
    /// Checks the configuration before any network work starts.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the base URL is not http(s), if the locale or
    /// platform list is empty, or if the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scheme = Regex::new(URL_SCHEME_PATTERN).map_err(|e| ConfigError::Pattern(e.to_string()))?;
        if !scheme.is_match(&self.base_url) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.locales.iter().all(|l| l.trim().is_empty()) {
            return Err(ConfigError::NoLocales);
        }
        if self.platforms.is_empty() {
            return Err(ConfigError::NoPlatforms);
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
