//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, configuration and probes
//! - Categorization of transport failures from `reqwest` errors
//!
//! Transport failures are never retried: flakiness is surfaced, not hidden.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ConfigError, InitializationError, ProbeError, TransportErrorKind};
