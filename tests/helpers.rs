// Shared test helpers for mock redirect services.
//
// The mock mirrors the behaviour of the real download redirector closely
// enough for the catalog's own rules: known products redirect to a download
// path on the same server, unknown parameters 404 without redirecting.

use redirect_check::initialization::init_probe_client;
use redirect_check::RequestProbe;
use wiremock::matchers::{header_regex, method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Backend identifier the mock sends on download responses.
#[allow(dead_code)] // Used by other test files
pub const BACKEND: &str = "bouncer-test-1";

/// Creates a probe with a short timeout for tests.
#[allow(dead_code)] // Used by other test files
pub fn test_probe(timeout_seconds: u64) -> RequestProbe {
    let client = init_probe_client(timeout_seconds).expect("Failed to build probe client");
    RequestProbe::new(client)
}

/// A 302 pointing at `path` on the mock server.
#[allow(dead_code)] // Used by other test files
pub fn redirect_to(server: &MockServer, path: &str) -> ResponseTemplate {
    ResponseTemplate::new(302)
        .insert_header("Location", format!("{}{}", server.uri(), path))
        .insert_header("X-Backend-Server", "bouncer-redirector")
}

/// Serves every download path with 200 and a backend header.
#[allow(dead_code)] // Used by other test files
pub async fn mount_downloads(server: &MockServer) {
    Mock::given(method("HEAD"))
        .and(path_regex(r"^/pub/"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Backend-Server", BACKEND))
        .mount(server)
        .await;
}

/// Mounts a mock redirect service implementing the rules the catalog checks:
///
/// - `firefox-16.0b6` redirects for any known locale, but `ja` on `osx` is
///   unknown (only `ja-JP-mac` exists there)
/// - `firefox-19.0` on Windows redirects to 19.0.1 for NT 6.2+ and to 19.0
///   for older NT versions
/// - anything else 404s in place, over http
#[allow(dead_code)] // Used by other test files
pub async fn mount_redirect_service(server: &MockServer) {
    mount_downloads(server).await;

    Mock::given(method("HEAD"))
        .and(query_param("lang", "kitty_language"))
        .respond_with(ResponseTemplate::new(404).insert_header("X-Backend-Server", BACKEND))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("HEAD"))
        .and(query_param("lang", "ja"))
        .and(query_param("os", "osx"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("HEAD"))
        .and(query_param("product", "firefox-16.0b6"))
        .and(query_param("os", "osx"))
        .respond_with(redirect_to(
            server,
            "/pub/firefox/releases/16.0b6/mac/ja-JP-mac/Firefox%2016.0b6.dmg",
        ))
        .with_priority(2)
        .mount(server)
        .await;

    Mock::given(method("HEAD"))
        .and(query_param("product", "firefox-16.0b6"))
        .and(path_regex(r"^/$"))
        .respond_with(redirect_to(
            server,
            "/pub/firefox/releases/16.0b6/win32/en-US/Firefox%20Setup%2016.0b6.exe",
        ))
        .with_priority(3)
        .mount(server)
        .await;

    Mock::given(method("HEAD"))
        .and(query_param("product", "firefox-19.0"))
        .and(header_regex("user-agent", r"Windows NT (6\.[2-9]|[7-9]\.|1\d)"))
        .respond_with(redirect_to(
            server,
            "/pub/firefox/releases/19.0.1/win32/en-US/Firefox%20Setup%2019.0.1.exe",
        ))
        .with_priority(2)
        .mount(server)
        .await;

    Mock::given(method("HEAD"))
        .and(query_param("product", "firefox-19.0"))
        .respond_with(redirect_to(
            server,
            "/pub/firefox/releases/19.0/win32/en-US/Firefox%20Setup%2019.0.exe",
        ))
        .with_priority(3)
        .mount(server)
        .await;

    Mock::given(method("HEAD"))
        .and(path_regex(r"^/$"))
        .respond_with(ResponseTemplate::new(404).insert_header("X-Backend-Server", BACKEND))
        .with_priority(10)
        .mount(server)
        .await;
}
