//! redirect_check library: functional checks for a download redirect service
//!
//! The redirect service maps `product`/`lang`/`os` query parameters to a
//! concrete download URL via HTTP redirect. This library sends HEAD probes
//! for a catalog of parameter combinations and checks where each one lands:
//! status code, scheme, host, path and query.
//!
//! # Example
//!
//! ```no_run
//! use redirect_check::{run_suite, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     base_url: "http://download.allizom.org".to_string(),
//!     locales: vec!["en-US".to_string(), "ja".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_suite(config).await?;
//! println!("{} passed, {} failed, {} expected failures",
//!          report.passed, report.failed, report.expected_failures);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod config;
pub mod error_handling;
pub mod evaluate;
pub mod export;
pub mod initialization;
pub mod probe;
pub mod run;
pub mod scenario;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{ConfigError, ProbeError, TransportErrorKind};
pub use evaluate::{evaluate, AssertionMismatch, Expectation, KnownFailure, Verdict};
pub use probe::{ProbeResult, RequestProbe, RequestSpec};
pub use run::{run_scenario, run_scenarios, run_suite, OutcomeKind, ScenarioOutcome, SuiteReport};
pub use scenario::{build_catalog, Platform, Scenario};
