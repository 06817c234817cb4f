//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tarsweep_core::ExtractionError;
use tarsweep_core::RunReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Announce the archive about to be extracted
    fn format_archive_start(&self, archive: &Path, index: usize, total: usize);

    /// Report one extracted archive member
    fn format_entry(&self, entry: &Path);

    /// Report an archive that failed while the run keeps going
    fn format_archive_failed(&self, archive: &Path, error: &ExtractionError);

    /// Format the result of a fully successful run
    fn format_run_result(&self, report: &RunReport) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }

    pub fn warning(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Warning,
            data: Some(data),
        }
    }
}

/// File name of `path` for display, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
