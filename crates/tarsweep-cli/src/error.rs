//! Error conversion utilities for CLI.
//!
//! Converts tarsweep-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::fmt::Write;
use std::path::Path;
use tarsweep_core::ExtractionError;
use tarsweep_core::RunError;

/// Converts `RunError` to user-friendly anyhow error with context
pub fn convert_run_error(err: RunError) -> anyhow::Error {
    match err {
        RunError::DirectoryNotFound { path } => {
            anyhow!(
                "Archive directory '{}' does not exist\n\
                 HINT: Use --directory (or TARSWEEP_DIR) to point at the directory holding the archives.",
                path.display()
            )
        }
        RunError::NotADirectory { path } => {
            anyhow!(
                "'{}' is not a directory\n\
                 HINT: --directory expects the directory that contains the archives, not an archive.",
                path.display()
            )
        }
        RunError::DirectoryUnreadable { path, source } => {
            anyhow!(
                "Cannot read archive directory '{}': {}\n\
                 HINT: Check that the directory is readable by the current user.",
                path.display(),
                source
            )
        }
        RunError::InvalidConfig { reason } => anyhow!("Invalid configuration: {reason}"),
        RunError::Extraction { archive, source } => convert_extraction_error(source, &archive),
        RunError::ArchivesFailed {
            failed,
            total,
            report,
        } => {
            let mut message = format!("{failed} of {total} archives failed to extract:");
            for (archive, error) in report.failures() {
                let _ = write!(message, "\n  - {}: {error}", archive.display());
            }
            anyhow!("{message}")
        }
    }
}

/// Converts the error of a single archive, naming the archive
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or truncated. Use --keep-going to extract the remaining archives anyway.",
                archive.display(),
                reason
            )
        }
        ExtractionError::Io(io_err) => {
            anyhow!(
                "I/O error while extracting '{}': {}\n\
                 HINT: Check free disk space and write permissions in the archive directory.",
                archive.display(),
                io_err
            )
        }
    }
}
