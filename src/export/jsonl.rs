//! JSONL report writer.
//!
//! Writes one JSON object per scenario outcome, one per line, as each
//! scenario finishes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::run::ScenarioOutcome;

/// Streams scenario outcomes to a JSON Lines file.
pub struct JsonlWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    record_count: usize,
}

impl JsonlWriter {
    /// Creates (or truncates) the report file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            record_count: 0,
        })
    }

    /// Appends one outcome as a JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_outcome(&mut self, outcome: &ScenarioOutcome) -> Result<()> {
        serde_json::to_writer(&mut self.writer, outcome)
            .with_context(|| format!("Failed to serialize outcome for {}", outcome.scenario))?;
        self.writer
            .write_all(b"\n")
            .with_context(|| format!("Failed to write report file: {}", self.path.display()))?;
        self.record_count += 1;
        Ok(())
    }

    /// Flushes the file and returns the number of records written.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn finish(mut self) -> Result<usize> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush report file: {}", self.path.display()))?;
        Ok(self.record_count)
    }
}
