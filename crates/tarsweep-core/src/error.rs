//! Error types for batch extraction.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

use crate::report::RunReport;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors raised while extracting a single archive.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed (missing file, permissions, disk full).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive is corrupted, truncated or not a tar archive.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),
}

impl ExtractionError {
    /// Returns `true` if the archive itself is broken rather than the
    /// environment it is extracted into.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarsweep_core::ExtractionError;
    ///
    /// let err = ExtractionError::InvalidArchive("checksum mismatch".to_string());
    /// assert!(err.is_corrupt());
    ///
    /// let err = ExtractionError::Io(std::io::Error::other("disk full"));
    /// assert!(!err.is_corrupt());
    /// ```
    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::InvalidArchive(_))
    }
}

/// Errors that end a batch run.
#[derive(Error, Debug)]
pub enum RunError {
    /// The archive directory does not exist.
    #[error("archive directory not found: {}", path.display())]
    DirectoryNotFound {
        /// The configured directory.
        path: PathBuf,
    },

    /// The configured path exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The configured directory.
        path: PathBuf,
    },

    /// The archive directory could not be listed.
    #[error("cannot read archive directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// The configured directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration was rejected before the run started.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// An archive failed to extract and the run stopped there.
    #[error("failed to extract {}: {source}", archive.display())]
    Extraction {
        /// The archive that failed.
        archive: PathBuf,
        /// What went wrong.
        #[source]
        source: ExtractionError,
    },

    /// One or more archives failed while the run kept going.
    #[error("{failed} of {total} archives failed to extract")]
    ArchivesFailed {
        /// Number of failed archives.
        failed: usize,
        /// Number of archives attempted.
        total: usize,
        /// Full outcome of the run, including the successful archives.
        report: Box<RunReport>,
    },
}

impl RunError {
    /// Returns the archive that stopped the run, if a single one did.
    #[must_use]
    pub fn archive(&self) -> Option<&Path> {
        match self {
            Self::Extraction { archive, .. } => Some(archive),
            _ => None,
        }
    }

    /// Returns `true` if the run never reached the extraction stage.
    #[must_use]
    pub const fn is_directory_error(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. }
                | Self::NotADirectory { .. }
                | Self::DirectoryUnreadable { .. }
        )
    }
}
