//! Report directory persistence: write/read/verify a run to/from disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json          canonical JSON of the SearchReport
//!   report_digest.txt    ASCII digest string ("sha256:...")
//!   path.txt             rendered solution path (observational)
//! ```
//!
//! The directory path is never part of the digest. Reading is fail-closed:
//! a missing file, a non-canonical report or a digest mismatch is an error.

use std::path::Path;

use lodestar_search::report::report_digest;

use crate::runner::RunOutcome;

const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";
const PATH_FILENAME: &str = "path.txt";

/// Error persisting or loading a report directory.
#[derive(Debug)]
pub enum ReportDirError {
    /// I/O error.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// `report.json` is not valid JSON.
    ParseError { detail: String },
    /// `report.json` is valid JSON but not in canonical form.
    NonCanonical,
    /// `report_digest.txt` does not match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportDirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ParseError { detail } => write!(f, "report parse error: {detail}"),
            Self::NonCanonical => write!(f, "report.json is not canonical JSON"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(f, "digest mismatch: stored={stored}, recomputed={recomputed}")
            }
        }
    }
}

impl std::error::Error for ReportDirError {}

/// A verified report read back from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReport {
    pub report: serde_json::Value,
    pub digest: String,
    pub rendered_path: String,
}

/// Write `outcome` to `dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`ReportDirError::Io`] on any filesystem failure.
pub fn write_report_dir(outcome: &RunOutcome, dir: &Path) -> Result<(), ReportDirError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    let bytes = outcome.report.to_canonical_json_bytes();
    let digest = report_digest(&bytes);

    write_atomic(&dir.join(REPORT_FILENAME), &bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), digest.as_bytes())?;
    write_atomic(
        &dir.join(PATH_FILENAME),
        outcome.rendered_path.join("\n").as_bytes(),
    )?;

    log::info!("wrote report {digest} to {}", dir.display());
    Ok(())
}

/// Read `dir` and verify the stored digest against the report bytes.
///
/// # Errors
///
/// Returns [`ReportDirError`] on any missing file, parse failure,
/// non-canonical report, or digest mismatch.
pub fn read_report_dir(dir: &Path) -> Result<StoredReport, ReportDirError> {
    let bytes = read_required(dir, REPORT_FILENAME)?;
    let stored = read_required(dir, DIGEST_FILENAME)?;
    let rendered = read_required(dir, PATH_FILENAME)?;

    let report: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ReportDirError::ParseError {
            detail: e.to_string(),
        })?;
    if report.to_string().as_bytes() != bytes.as_slice() {
        return Err(ReportDirError::NonCanonical);
    }

    let stored = String::from_utf8_lossy(&stored).trim().to_string();
    let recomputed = report_digest(&bytes);
    if stored != recomputed {
        return Err(ReportDirError::DigestMismatch { stored, recomputed });
    }

    Ok(StoredReport {
        report,
        digest: recomputed,
        rendered_path: String::from_utf8_lossy(&rendered).into_owned(),
    })
}

/// Write to a temp file in the same directory, then rename.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportDirError> {
    let dir = path.parent().ok_or_else(|| ReportDirError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_path = dir.join(format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    std::fs::write(&temp_path, content).map_err(|e| ReportDirError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportDirError::Io {
        detail: format!("rename {} to {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirError::MissingFile {
        filename: filename.to_string(),
    })
}
