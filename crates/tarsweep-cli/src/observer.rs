//! Bridges runner events to the output formatter and progress bar.

use crate::output::OutputFormatter;
use crate::output::display_name;
use crate::progress::CliProgress;
use std::path::Path;
use tarsweep_core::ExtractionError;
use tarsweep_core::ExtractionReport;
use tarsweep_core::RunObserver;
use tarsweep_core::RunReport;

pub struct CliObserver<'a> {
    formatter: &'a dyn OutputFormatter,
    show_progress: bool,
    progress: Option<CliProgress>,
    /// Print per-archive failures; in fail-fast runs the final error does it.
    report_failures: bool,
}

impl<'a> CliObserver<'a> {
    pub fn new(
        formatter: &'a dyn OutputFormatter,
        show_progress: bool,
        report_failures: bool,
    ) -> Self {
        Self {
            formatter,
            show_progress,
            progress: None,
            report_failures,
        }
    }

    fn print<F: FnOnce(&dyn OutputFormatter)>(&self, f: F) {
        let formatter = self.formatter;
        match &self.progress {
            Some(progress) => progress.suspend(|| f(formatter)),
            None => f(formatter),
        }
    }
}

impl RunObserver for CliObserver<'_> {
    fn on_archive_start(&mut self, archive: &Path, index: usize, total: usize) {
        if self.show_progress && self.progress.is_none() {
            self.progress = Some(CliProgress::new(total));
        }
        if let Some(progress) = &self.progress {
            progress.set_current(display_name(archive));
        }

        self.print(|f| f.format_archive_start(archive, index, total));
    }

    fn on_entry_extracted(&mut self, _archive: &Path, entry: &Path) {
        self.print(|f| f.format_entry(entry));
    }

    fn on_archive_complete(&mut self, _archive: &Path, report: &ExtractionReport) {
        if let Some(progress) = &self.progress {
            progress.advance();
        }
        for warning in &report.warnings {
            self.print(|f| f.format_warning(warning));
        }
    }

    fn on_archive_failed(&mut self, archive: &Path, error: &ExtractionError) {
        if let Some(progress) = &self.progress {
            progress.advance();
        }
        if self.report_failures {
            self.print(|f| f.format_archive_failed(archive, error));
        }
    }

    fn on_complete(&mut self, _report: &RunReport) {
        if let Some(progress) = self.progress.take() {
            progress.finish();
        }
    }
}
