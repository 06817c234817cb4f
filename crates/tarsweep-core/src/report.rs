//! Per-archive and per-run reporting.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ExtractionError;

/// Report of a single archive extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Number of archive members written (files, directories, links).
    pub entries_extracted: usize,

    /// Number of regular files written.
    pub files_extracted: usize,

    /// Number of directories created.
    pub directories_created: usize,

    /// Number of symlinks and hardlinks created.
    pub links_created: usize,

    /// Total bytes of regular file data written.
    pub bytes_written: u64,

    /// Members refused because they would land outside the destination.
    pub entries_skipped: usize,

    /// Member paths in archive order, as stored in the archive.
    pub members: Vec<PathBuf>,

    /// Warnings generated during extraction.
    pub warnings: Vec<String>,

    /// Duration of the extraction.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Outcome of one archive within a run.
#[derive(Debug)]
pub enum ArchiveOutcome {
    /// The archive was fully extracted.
    Extracted {
        /// Archive path.
        archive: PathBuf,
        /// Extraction statistics.
        report: ExtractionReport,
    },
    /// The archive failed to extract.
    Failed {
        /// Archive path.
        archive: PathBuf,
        /// What went wrong.
        error: ExtractionError,
    },
}

impl ArchiveOutcome {
    /// Returns the archive path.
    #[must_use]
    pub fn archive(&self) -> &Path {
        match self {
            Self::Extracted { archive, .. } | Self::Failed { archive, .. } => archive,
        }
    }

    /// Returns the extraction report when the archive succeeded.
    #[must_use]
    pub const fn report(&self) -> Option<&ExtractionReport> {
        match self {
            Self::Extracted { report, .. } => Some(report),
            Self::Failed { .. } => None,
        }
    }

    /// Returns the error when the archive failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ExtractionError> {
        match self {
            Self::Extracted { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}

/// Report of a whole batch run, in processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Directory that was scanned.
    pub directory: PathBuf,

    /// Outcome of every attempted archive.
    pub outcomes: Vec<ArchiveOutcome>,

    /// Duration of the whole run.
    pub duration: Duration,
}

impl RunReport {
    /// Creates an empty report for `directory`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Number of archives attempted.
    #[must_use]
    pub fn archives_attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of archives fully extracted.
    #[must_use]
    pub fn archives_extracted(&self) -> usize {
        self.extracted().count()
    }

    /// Number of archives that failed.
    #[must_use]
    pub fn archives_failed(&self) -> usize {
        self.failures().count()
    }

    /// Returns `true` if no archive failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.archives_failed() == 0
    }

    /// Total members extracted across all archives.
    #[must_use]
    pub fn entries_extracted(&self) -> usize {
        self.extracted().map(|(_, r)| r.entries_extracted).sum()
    }

    /// Total bytes written across all archives.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.extracted().map(|(_, r)| r.bytes_written).sum()
    }

    /// Successful archives with their reports.
    pub fn extracted(&self) -> impl Iterator<Item = (&Path, &ExtractionReport)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.report().map(|r| (o.archive(), r)))
    }

    /// Failed archives with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ExtractionError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error().map(|e| (o.archive(), e)))
    }
}

/// Callback trait for progress reporting during a run.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tarsweep_core::ExtractionError;
/// use tarsweep_core::ExtractionReport;
/// use tarsweep_core::RunObserver;
/// use tarsweep_core::RunReport;
///
/// struct PrintObserver;
///
/// impl RunObserver for PrintObserver {
///     fn on_archive_start(&mut self, archive: &Path, index: usize, total: usize) {
///         println!("[{index}/{total}] extracting {}", archive.display());
///     }
///
///     fn on_entry_extracted(&mut self, _archive: &Path, entry: &Path) {
///         println!("  {}", entry.display());
///     }
///
///     fn on_archive_complete(&mut self, _archive: &Path, _report: &ExtractionReport) {}
///
///     fn on_archive_failed(&mut self, archive: &Path, error: &ExtractionError) {
///         eprintln!("{} failed: {error}", archive.display());
///     }
///
///     fn on_complete(&mut self, _report: &RunReport) {
///         println!("all extracted");
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called before an archive is extracted.
    ///
    /// # Arguments
    ///
    /// * `archive` - Path of the archive about to be extracted
    /// * `index` - Position of the archive in the run (1-indexed)
    /// * `total` - Number of archives found
    fn on_archive_start(&mut self, archive: &Path, index: usize, total: usize);

    /// Called after each archive member is written.
    fn on_entry_extracted(&mut self, archive: &Path, entry: &Path);

    /// Called when an archive has been completely extracted.
    fn on_archive_complete(&mut self, archive: &Path, report: &ExtractionReport);

    /// Called when an archive fails to extract.
    fn on_archive_failed(&mut self, archive: &Path, error: &ExtractionError);

    /// Called once after every archive was extracted without failure.
    fn on_complete(&mut self, report: &RunReport);
}

/// No-op implementation of `RunObserver`.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {
    fn on_archive_start(&mut self, _archive: &Path, _index: usize, _total: usize) {}

    fn on_entry_extracted(&mut self, _archive: &Path, _entry: &Path) {}

    fn on_archive_complete(&mut self, _archive: &Path, _report: &ExtractionReport) {}

    fn on_archive_failed(&mut self, _archive: &Path, _error: &ExtractionError) {}

    fn on_complete(&mut self, _report: &RunReport) {}
}
