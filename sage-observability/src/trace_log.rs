//! Newline-delimited JSON trace persistence.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use sage_core::errors::SageResult;
use serde::Serialize;

/// Appends one compact JSON document per line. Never truncates.
#[derive(Debug, Clone)]
pub struct JsonlTraceWriter {
    path: PathBuf,
}

impl JsonlTraceWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `record` and append it as a single line, creating parent dirs as needed.
    pub fn append<T: Serialize>(&self, record: &T) -> SageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        tracing::debug!(path = %self.path.display(), bytes = line.len(), "trace line appended");
        Ok(())
    }
}
