//! Error type definitions.
//!
//! This module defines the error types used throughout the harness.
//! Assertion mismatches live next to the evaluator in `crate::evaluate`.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for invalid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Base URL does not use http or https.
    #[error("Base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),

    /// Base URL has an http(s) prefix but is not a valid URL.
    #[error("Base URL {url:?} could not be parsed: {source}")]
    UnparseableBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Known-failure annotation without a reason.
    #[error("Known-failure reason must not be empty")]
    EmptyKnownFailureReason,

    /// No usable locale was configured.
    #[error("At least one locale is required")]
    NoLocales,

    /// No platform was configured.
    #[error("At least one platform is required")]
    NoPlatforms,

    /// Probe timeout of zero seconds.
    #[error("Timeout must be at least one second")]
    ZeroTimeout,

    /// Internal validation pattern failed to compile.
    #[error("Invalid validation pattern: {0}")]
    Pattern(String),
}

/// Categories of network-level probe failures.
///
/// None of these are retried; each one is reported as a scenario failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    /// The probe did not complete within the configured timeout.
    Timeout,
    /// TCP connection could not be established.
    Connect,
    /// TLS handshake failed.
    Tls,
    /// Redirect chain exceeded the hop limit or looped.
    Redirect,
    /// Request could not be built.
    Builder,
    /// Request failed while sending.
    Request,
    /// Anything reqwest does not classify.
    Other,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connection error",
            TransportErrorKind::Tls => "TLS error",
            TransportErrorKind::Redirect => "redirect error",
            TransportErrorKind::Builder => "request builder error",
            TransportErrorKind::Request => "request error",
            TransportErrorKind::Other => "transport error",
        }
    }
}

/// Errors raised while issuing a probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The base URL could not be parsed, so no request was sent.
    #[error("Invalid request URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Network-level failure (timeout, connection, TLS, redirect loop).
    #[error("{kind} requesting {url}: {source}")]
    Transport {
        url: String,
        kind: TransportErrorKind,
        #[source]
        source: ReqwestError,
    },
}

impl ProbeError {
    /// Returns the transport category, if this was a network failure.
    pub fn transport_kind(&self) -> Option<TransportErrorKind> {
        match self {
            ProbeError::Transport { kind, .. } => Some(*kind),
            ProbeError::InvalidUrl { .. } => None,
        }
    }
}
