//! Report directory persistence: write/read a run's report to/from disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   search_report.json   canonical JSON of SearchReportV1
//!   walkthrough.txt      plain-text walkthrough (observational)
//!   report_digest.txt    ASCII digest of search_report.json ("sha256:...")
//! ```
//!
//! Reading is fail-closed: missing files, extra files, non-canonical report
//! bytes and digest mismatches are all errors.

use std::collections::BTreeSet;
use std::path::Path;

use arcosphere_kernel::proof::canon::canonical_json_bytes;
use arcosphere_kernel::proof::hash::{canonical_hash, ContentHash};
use arcosphere_kernel::proof::hash_domain::HashDomain;

use crate::runner::PlanRunV1;

pub const REPORT_FILENAME: &str = "search_report.json";
pub const WALKTHROUGH_FILENAME: &str = "walkthrough.txt";
pub const DIGEST_FILENAME: &str = "report_digest.txt";

const ALL_FILENAMES: &[&str] = &[REPORT_FILENAME, WALKTHROUGH_FILENAME, DIGEST_FILENAME];

/// Error writing a report directory.
#[derive(Debug)]
pub enum ReportDirWriteError {
    Io { detail: String },
    CanonError { detail: String },
}

impl std::fmt::Display for ReportDirWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ReportDirWriteError {}

/// Error reading a report directory.
#[derive(Debug)]
pub enum ReportDirReadError {
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// A file other than the three report files exists.
    ExtraFile { name: String },
    /// `search_report.json` is not valid JSON, or the walkthrough is not UTF-8.
    ParseError { detail: String },
    /// `search_report.json` is valid JSON but not in canonical form.
    NonCanonical,
    /// `report_digest.txt` does not match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportDirReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ExtraFile { name } => write!(f, "unexpected extra file: {name}"),
            Self::ParseError { detail } => write!(f, "parse error: {detail}"),
            Self::NonCanonical => write!(f, "{REPORT_FILENAME} is not canonical JSON"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(
                    f,
                    "digest mismatch: stored={stored}, recomputed={recomputed}"
                )
            }
        }
    }
}

impl std::error::Error for ReportDirReadError {}

/// A report directory loaded from disk and verified.
#[derive(Debug, Clone)]
pub struct LoadedReportV1 {
    pub report_bytes: Vec<u8>,
    pub report: serde_json::Value,
    pub walkthrough: String,
    pub digest: ContentHash,
}

/// Write `run` to `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns [`ReportDirWriteError`] on I/O failure or canonical JSON error.
pub fn write_report_dir(run: &PlanRunV1, dir: &Path) -> Result<ContentHash, ReportDirWriteError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirWriteError::Io {
        detail: format!("create_dir_all {}: {e}", dir.display()),
    })?;

    let bytes =
        run.report
            .to_canonical_json_bytes()
            .map_err(|e| ReportDirWriteError::CanonError {
                detail: e.to_string(),
            })?;
    let digest = canonical_hash(HashDomain::SearchReport, &bytes);

    write_atomic(dir.join(REPORT_FILENAME), &bytes)?;
    write_atomic(dir.join(WALKTHROUGH_FILENAME), run.walkthrough.as_bytes())?;
    write_atomic(dir.join(DIGEST_FILENAME), digest.as_str().as_bytes())?;

    tracing::debug!(dir = %dir.display(), digest = digest.as_str(), "report directory written");
    Ok(digest)
}

/// Read and verify a report directory.
///
/// # Errors
///
/// Returns [`ReportDirReadError`] if any file is missing or extra, the report
/// is not canonical JSON, or the stored digest does not match.
pub fn read_report_dir(dir: &Path) -> Result<LoadedReportV1, ReportDirReadError> {
    let present = list_files(dir)?;
    if let Some(extra) = present
        .iter()
        .find(|name| !ALL_FILENAMES.contains(&name.as_str()))
    {
        return Err(ReportDirReadError::ExtraFile {
            name: extra.clone(),
        });
    }

    let report_bytes = read_required(dir, REPORT_FILENAME)?;
    let walkthrough_bytes = read_required(dir, WALKTHROUGH_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;

    let report: serde_json::Value =
        serde_json::from_slice(&report_bytes).map_err(|e| ReportDirReadError::ParseError {
            detail: format!("{REPORT_FILENAME}: {e}"),
        })?;
    let recanonical =
        canonical_json_bytes(&report).map_err(|_| ReportDirReadError::NonCanonical)?;
    if recanonical != report_bytes {
        return Err(ReportDirReadError::NonCanonical);
    }

    let walkthrough =
        String::from_utf8(walkthrough_bytes).map_err(|e| ReportDirReadError::ParseError {
            detail: format!("{WALKTHROUGH_FILENAME}: {e}"),
        })?;

    let stored = String::from_utf8_lossy(&digest_bytes).trim().to_string();
    let digest = canonical_hash(HashDomain::SearchReport, &report_bytes);
    if stored != digest.as_str() {
        return Err(ReportDirReadError::DigestMismatch {
            stored,
            recomputed: digest.as_str().to_string(),
        });
    }

    Ok(LoadedReportV1 {
        report_bytes,
        report,
        walkthrough,
        digest,
    })
}

/// Write bytes via temp file + rename.
fn write_atomic(path: impl AsRef<Path>, content: &[u8]) -> Result<(), ReportDirWriteError> {
    let path = path.as_ref();
    let dir = path.parent().ok_or_else(|| ReportDirWriteError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, content).map_err(|e| ReportDirWriteError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportDirWriteError::Io {
        detail: format!("rename {} to {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirReadError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirReadError::MissingFile {
        filename: filename.to_string(),
    })
}

/// Regular files in `dir`, skipping leftover temp files.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirReadError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ReportDirReadError::Io {
        detail: format!("read_dir {}: {e}", dir.display()),
    })?;
    let mut files = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportDirReadError::Io {
            detail: format!("dir entry: {e}"),
        })?;
        let file_type = entry.file_type().map_err(|e| ReportDirReadError::Io {
            detail: format!("file_type: {e}"),
        })?;
        if file_type.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with(".tmp_") {
                    files.insert(name.to_string());
                }
            }
        }
    }
    Ok(files)
}
