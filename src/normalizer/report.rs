//! Per-file outcomes and the run summary

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::path::PathBuf;

use super::Normalized;
use crate::core::NormalizeResult;

/// Printed once after every file has been processed
pub const COMPLETION_LINE: &str = "Done! BOM removed from all files.";

/// Result of processing one target
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: NormalizeResult<Normalized>,
}

impl FileOutcome {
    pub fn new(path: PathBuf, result: NormalizeResult<Normalized>) -> Self {
        Self { path, result }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Human-readable status line
    pub fn to_line(&self) -> String {
        match &self.result {
            Ok(_) => format!("✓ Fixed {}", self.path.display()),
            Err(e) => format!("✗ Error fixing {}: {}", self.path.display(), e.cause()),
        }
    }
}

impl Serialize for FileOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FileOutcome", 4)?;
        state.serialize_field("path", &self.path)?;
        match &self.result {
            Ok(normalized) => {
                state.serialize_field("status", "fixed")?;
                state.serialize_field("had_bom", &normalized.had_bom)?;
                state.serialize_field("bytes_written", &normalized.bytes_written)?;
            }
            Err(e) => {
                state.serialize_field("status", "error")?;
                state.serialize_field("kind", &e.kind())?;
                state.serialize_field("error", &e.cause())?;
            }
        }
        state.end()
    }
}

/// Ordered outcomes of a whole run
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Number of files that actually carried a BOM
    pub fn boms_removed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, Ok(Normalized { had_bom: true, .. })))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

impl Serialize for RunReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RunReport", 4)?;
        state.serialize_field("outcomes", &self.outcomes)?;
        state.serialize_field("succeeded", &self.succeeded())?;
        state.serialize_field("failed", &self.failed())?;
        state.serialize_field("boms_removed", &self.boms_removed())?;
        state.end()
    }
}
