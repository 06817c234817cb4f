//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use super::formatter::display_name;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use tarsweep_core::ExtractionError;
use tarsweep_core::RunReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn progress_line(archive: &Path) -> String {
        format!("Extracting {}...", display_name(archive))
    }

    fn entry_line(entry: &Path) -> String {
        format!("  {}", entry.display())
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_archive_start(&self, archive: &Path, _index: usize, _total: usize) {
        if self.quiet {
            return;
        }

        let _ = self.term.write_line(&Self::progress_line(archive));
    }

    fn format_entry(&self, entry: &Path) {
        if self.quiet {
            return;
        }

        let _ = self.term.write_line(&Self::entry_line(entry));
    }

    fn format_archive_failed(&self, archive: &Path, error: &ExtractionError) {
        // Always show failures, even in quiet mode
        if self.use_colors {
            let _ = self.err_term.write_line(&format!(
                "{} {}: {error}",
                style("✗").red().bold(),
                display_name(archive)
            ));
        } else {
            let _ = self
                .err_term
                .write_line(&format!("FAILED {}: {error}", display_name(archive)));
        }
    }

    fn format_run_result(&self, report: &RunReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} All archives extracted.",
                style("✓").green().bold()
            ));
        } else {
            let _ = self.term.write_line("All archives extracted.");
        }

        let _ = self
            .term
            .write_line(&format!("  Archives: {}", report.archives_extracted()));
        let _ = self
            .term
            .write_line(&format!("  Entries: {}", report.entries_extracted()));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written())
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Directory: {}", report.directory.display()));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}
