//! Extraction capability used by the runner.
//!
//! The runner only sees the [`Extractor`] trait, so the concrete unpacking
//! mechanism can be swapped out (tests use in-memory fakes).

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use tar::EntryType;
use tracing::debug;
use tracing::warn;

use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::report::RunObserver;

/// Trait for archive extraction backends.
pub trait Extractor {
    /// Unpacks every member of `archive` into `dest`.
    ///
    /// Implementations report each written member through
    /// [`RunObserver::on_entry_extracted`].
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be read or a member cannot be
    /// written.
    fn extract(
        &mut self,
        archive: &Path,
        dest: &Path,
        observer: &mut dyn RunObserver,
    ) -> Result<ExtractionReport>;

    /// Returns the archive format name.
    fn format_name(&self) -> &str;
}

/// Tar archive extractor backed by the `tar` crate.
///
/// Existing files in the destination are overwritten and modification times
/// are restored. Members whose path would escape the destination are
/// skipped and reported as warnings.
#[derive(Debug, Clone)]
pub struct TarExtractor {
    preserve_permissions: bool,
}

impl TarExtractor {
    /// Creates a tar extractor that restores file modes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            preserve_permissions: true,
        }
    }

    /// Sets whether file modes stored in the archive are restored.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }
}

impl Default for TarExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for TarExtractor {
    fn extract(
        &mut self,
        archive: &Path,
        dest: &Path,
        observer: &mut dyn RunObserver,
    ) -> Result<ExtractionReport> {
        let start = Instant::now();
        let file = File::open(archive)?;
        let archive_len = file.metadata()?.len();

        let mut tar = tar::Archive::new(BufReader::new(file));
        tar.set_preserve_permissions(self.preserve_permissions);
        tar.set_preserve_mtime(true);
        tar.set_overwrite(true);

        let mut member = MemberContext {
            archive,
            archive_len,
            dest,
            report: ExtractionReport::new(),
        };

        let mut directories = Vec::new();
        for entry in tar.entries().map_err(invalid_archive)? {
            let entry = entry.map_err(invalid_archive)?;
            if entry.header().entry_type() == EntryType::Directory {
                directories.push(entry);
                continue;
            }
            member.unpack(entry, observer)?;
        }

        // Directories go last, deepest first, so a read-only mode never
        // blocks writing their contents.
        directories.sort_by(|a, b| b.path_bytes().cmp(&a.path_bytes()));
        for entry in directories {
            member.unpack(entry, observer)?;
        }

        let mut report = member.report;
        report.duration = start.elapsed();
        Ok(report)
    }

    fn format_name(&self) -> &str {
        "tar"
    }
}

/// Per-archive state shared by every member unpack.
struct MemberContext<'a> {
    archive: &'a Path,
    archive_len: u64,
    dest: &'a Path,
    report: ExtractionReport,
}

impl MemberContext<'_> {
    fn unpack<R: Read>(
        &mut self,
        mut entry: tar::Entry<'_, R>,
        observer: &mut dyn RunObserver,
    ) -> Result<()> {
        let member = entry.path().map_err(invalid_archive)?.into_owned();
        let entry_type = entry.header().entry_type();
        let size = entry.size();

        if entry.raw_file_position().saturating_add(size) > self.archive_len {
            return Err(ExtractionError::InvalidArchive(format!(
                "{}: member data truncated ({size} bytes expected, archive is {} bytes)",
                member.display(),
                self.archive_len
            )));
        }

        if !entry.unpack_in(self.dest)? {
            warn!(
                archive = %self.archive.display(),
                member = %member.display(),
                "skipping member outside extraction directory"
            );
            self.report.entries_skipped += 1;
            self.report.add_warning(format!(
                "skipped {}: path escapes extraction directory",
                member.display()
            ));
            return Ok(());
        }

        match entry_type {
            EntryType::Regular | EntryType::Continuous => {
                self.report.files_extracted += 1;
                self.report.bytes_written = self.report.bytes_written.saturating_add(size);
            }
            EntryType::Directory => self.report.directories_created += 1,
            EntryType::Symlink | EntryType::Link => self.report.links_created += 1,
            _ => {}
        }
        self.report.entries_extracted += 1;

        debug!(member = %member.display(), size, "extracted");
        observer.on_entry_extracted(self.archive, &member);
        self.report.members.push(member);
        Ok(())
    }
}

/// Header-level read failures mean the archive itself is broken.
#[allow(clippy::needless_pass_by_value)]
fn invalid_archive(err: io::Error) -> ExtractionError {
    ExtractionError::InvalidArchive(err.to_string())
}
