//! Failure diagnostics.
//!
//! Every failure message is built here so they all carry the same context:
//! the request, its parameters, where it was redirected, and which backend
//! answered.

use std::fmt::Write;

use crate::config::{DIAGNOSTIC_HEADERS, HEADER_X_BACKEND_SERVER, MISSING_HEADER_VALUE};
use crate::error_handling::ProbeError;
use crate::probe::{DisplayParams, ProbeResult, RequestSpec};

use super::Expectation;

/// Formats the diagnostic for a failed expectation.
///
/// The text is self-contained: request URL, parameters, user agent, final
/// URL, status and the `X-Backend-Server` value (`<missing>` when absent).
pub fn format_diagnostic(
    request: &RequestSpec,
    result: &ProbeResult,
    expectation: &Expectation,
    actual: &str,
) -> String {
    let mut out = format!("Expected {expectation}, got {actual}\n");
    push_request_context(&mut out, request);
    let _ = writeln!(out, "Response URL: {}", result.final_url());
    let _ = write!(out, "Response status: {}", result.status_code());
    for &name in DIAGNOSTIC_HEADERS {
        match result.header(name) {
            Some(value) => {
                let _ = write!(out, "\n{}: {}", display_header_name(name), value);
            }
            None if name == HEADER_X_BACKEND_SERVER => {
                let _ = write!(out, "\n{}: {}", display_header_name(name), MISSING_HEADER_VALUE);
            }
            None => {}
        }
    }
    out
}

/// Formats the diagnostic for a probe that never produced a response.
pub fn format_transport_diagnostic(request: &RequestSpec, error: &ProbeError) -> String {
    let mut out = format!("Probe failed: {error}\n");
    push_request_context(&mut out, request);
    out.truncate(out.trim_end().len());
    out
}

fn push_request_context(out: &mut String, request: &RequestSpec) {
    let _ = writeln!(out, "Failed on {}", request.base_url());
    let _ = writeln!(out, "Using {}", DisplayParams(request.query_params()));
    let _ = writeln!(
        out,
        "User-Agent: {} (accept-language: {})",
        request.user_agent(),
        request.locale()
    );
}

fn display_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
