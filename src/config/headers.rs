//! HTTP header name constants.
//!
//! Header names are lowercase so they can be used directly as keys into
//! `ProbeResult::response_headers`.

/// Identifies which backend instance served the response.
///
/// Every failure diagnostic includes this value so instance-specific
/// regressions can be triaged without log correlation.
pub const HEADER_X_BACKEND_SERVER: &str = "x-backend-server";

/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "server";

/// Via header (proxy chain information)
pub const HEADER_VIA: &str = "via";

/// Headers quoted in diagnostics, in display order.
///
/// `X-Backend-Server` is always first and always rendered, even when absent.
/// The others are only rendered when present.
pub const DIAGNOSTIC_HEADERS: &[&str] = &[HEADER_X_BACKEND_SERVER, HEADER_SERVER, HEADER_VIA];
