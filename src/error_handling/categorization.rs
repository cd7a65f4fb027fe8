//! Transport error categorization.

use std::error::Error as StdError;

use super::types::TransportErrorKind;

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// reqwest has no dedicated TLS flag, so connection errors whose source chain
/// mentions certificates or TLS are reported as `Tls`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_redirect() {
        TransportErrorKind::Redirect
    } else if error.is_builder() {
        TransportErrorKind::Builder
    } else if error.is_connect() {
        if error_chain_mentions_tls(error) {
            TransportErrorKind::Tls
        } else {
            TransportErrorKind::Connect
        }
    } else if error.is_request() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Other
    }
}

/// Walks the source chain looking for TLS-related failures.
pub(crate) fn error_chain_mentions_tls(error: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        let msg = err.to_string().to_lowercase();
        if msg.contains("certificate") || msg.contains("tls") || msg.contains("ssl") {
            return true;
        }
        current = err.source();
    }
    false
}
