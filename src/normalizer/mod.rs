/*!
# BOM Normalizer

Rewrites files from "UTF-8, optionally BOM-prefixed" to "UTF-8, no BOM",
in place. Files are processed one at a time, in list order; a failure on
one file is recorded and the run moves on to the next.
*/

pub mod report;

pub use report::{FileOutcome, RunReport, COMPLETION_LINE};

use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::configuration::{TargetList, WriteMode};
use crate::core::{read_text_strip_bom, write_text_atomic, write_text_in_place, NormalizeResult};

/// Options for a normalization run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub write_mode: WriteMode,
}

impl NormalizeOptions {
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}

/// What a successful normalization did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Normalized {
    /// A leading BOM was present and has been removed
    pub had_bom: bool,
    /// Size of the rewritten file
    pub bytes_written: usize,
}

/// Normalize one file with default options (in-place write).
pub fn normalize<P: AsRef<Path>>(path: P) -> NormalizeResult<Normalized> {
    normalize_with(path, &NormalizeOptions::default())
}

/// Read `path` with BOM-aware decoding and write it back without a BOM.
///
/// The file is always rewritten, with or without a BOM, so running this on a
/// clean file leaves its bytes unchanged.
pub fn normalize_with<P: AsRef<Path>>(
    path: P,
    options: &NormalizeOptions,
) -> NormalizeResult<Normalized> {
    let path = path.as_ref();
    let decoded = read_text_strip_bom(path)?;
    if decoded.had_bom {
        tracing::debug!("BOM found in {}", path.display());
    }

    let bytes_written = match options.write_mode {
        WriteMode::InPlace => write_text_in_place(path, &decoded.text)?,
        WriteMode::Atomic => write_text_atomic(path, &decoded.text)?,
    };
    tracing::debug!(
        "Wrote {} bytes to {} ({})",
        bytes_written,
        path.display(),
        options.write_mode
    );

    Ok(Normalized {
        had_bom: decoded.had_bom,
        bytes_written,
    })
}

/// Normalize every target, handing each outcome to `on_outcome` as it lands.
///
/// Only an error from `on_outcome` stops the run; per-file failures are kept
/// in the report.
pub fn run_with<F>(
    targets: &TargetList,
    options: &NormalizeOptions,
    mut on_outcome: F,
) -> io::Result<RunReport>
where
    F: FnMut(&FileOutcome) -> io::Result<()>,
{
    tracing::info!(
        "Normalizing {} files ({} write)",
        targets.len(),
        options.write_mode
    );

    let mut report = RunReport::default();
    for path in targets {
        let outcome = FileOutcome::new(path.clone(), normalize_with(path, options));
        if let Err(e) = &outcome.result {
            tracing::warn!("Failed to normalize {}: {}", path.display(), e.cause());
        }
        on_outcome(&outcome)?;
        report.push(outcome);
    }

    tracing::info!(
        "Normalization finished: {} fixed, {} failed",
        report.succeeded(),
        report.failed()
    );
    Ok(report)
}

/// Normalize every target, writing one plain line per file and a final
/// completion line to `out`.
pub fn run<W: Write>(
    targets: &TargetList,
    options: &NormalizeOptions,
    out: &mut W,
) -> io::Result<RunReport> {
    let report = run_with(targets, options, |outcome| writeln!(out, "{}", outcome.to_line()))?;
    writeln!(out)?;
    writeln!(out, "{}", COMPLETION_LINE)?;
    out.flush()?;
    Ok(report)
}
