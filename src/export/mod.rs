//! Report export.
//!
//! Scenario outcomes can be written to a JSON Lines file as the suite runs.

mod jsonl;

pub use jsonl::JsonlWriter;
