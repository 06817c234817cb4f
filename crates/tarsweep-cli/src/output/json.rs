//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::display_name;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use tarsweep_core::ExtractionError;
use tarsweep_core::RunReport;

/// Emits a single JSON document on stdout once the run succeeds; progress
/// events are not printed and warnings go to stderr.
pub struct JsonFormatter {
    include_members: bool,
}

#[derive(Serialize)]
struct ArchiveOutput {
    archive: String,
    entries_extracted: usize,
    bytes_written: u64,
    entries_skipped: usize,
    duration_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<Vec<String>>,
}

#[derive(Serialize)]
struct RunOutput {
    directory: String,
    archives: Vec<ArchiveOutput>,
    archives_extracted: usize,
    entries_extracted: usize,
    bytes_written: u64,
    duration_ms: u128,
}

impl JsonFormatter {
    pub const fn new(include_members: bool) -> Self {
        Self { include_members }
    }

    fn output<T: Serialize>(value: &T, out: &mut dyn Write) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(out, "{json}")?;
        Ok(())
    }

    fn run_output(&self, report: &RunReport) -> RunOutput {
        let archives = report
            .extracted()
            .map(|(archive, r)| ArchiveOutput {
                archive: display_name(archive),
                entries_extracted: r.entries_extracted,
                bytes_written: r.bytes_written,
                entries_skipped: r.entries_skipped,
                duration_ms: r.duration.as_millis(),
                members: self.include_members.then(|| {
                    r.members
                        .iter()
                        .map(|m| m.display().to_string())
                        .collect()
                }),
            })
            .collect();

        RunOutput {
            directory: report.directory.display().to_string(),
            archives,
            archives_extracted: report.archives_extracted(),
            entries_extracted: report.entries_extracted(),
            bytes_written: report.bytes_written(),
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_archive_start(&self, _archive: &Path, _index: usize, _total: usize) {}

    fn format_entry(&self, _entry: &Path) {}

    fn format_archive_failed(&self, _archive: &Path, _error: &ExtractionError) {}

    fn format_run_result(&self, report: &RunReport) -> Result<()> {
        let output = JsonOutput::success("extract", self.run_output(report));
        Self::output(&output, &mut io::stdout())
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::warning(
            "extract",
            WarningData {
                message: message.to_string(),
            },
        );
        // stdout carries only the final document
        let _ = Self::output(&output, &mut io::stderr());
    }
}
