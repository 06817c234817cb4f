//! Test helpers: tar builders, a recording observer and a scripted extractor.
//!
//! # Panics
//!
//! Helpers panic on I/O errors; they are only compiled for tests.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::extractor::Extractor;
use crate::report::RunObserver;
use crate::report::RunReport;

/// Builder for tar test archives with various entry types.
pub struct TarTestBuilder {
    builder: tar::Builder<Vec<u8>>,
}

impl TarTestBuilder {
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(path, data, 0o644)
    }

    pub fn add_file_with_mode(mut self, path: &str, data: &[u8], mode: u32) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(mode);
        header.set_cksum();
        self.builder.append_data(&mut header, path, data).unwrap();
        self
    }

    pub fn add_directory(self, path: &str) -> Self {
        self.add_directory_with_mode(path, 0o755)
    }

    pub fn add_directory_with_mode(mut self, path: &str, mode: u32) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(mode);
        header.set_entry_type(tar::EntryType::Directory);
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    pub fn add_symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o777);
        header.set_entry_type(tar::EntryType::Symlink);
        header.set_link_name(target).unwrap();
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a file whose stored name bypasses the builder's path checks.
    pub fn add_raw_path_file(mut self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_old();
        let name = &mut header.as_old_mut().name;
        name[..path.len()].copy_from_slice(path.as_bytes());
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        header.set_cksum();
        self.builder.append(&header, data).unwrap();
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }

    /// Writes the archive to `path` and returns the path.
    pub fn write_to(self, path: &Path) -> PathBuf {
        fs::write(path, self.build()).unwrap();
        path.to_path_buf()
    }
}

impl Default for TarTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer that records every event as text.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    /// `start:<name>`, `done:<name>`, `failed:<name>` and `complete` events.
    pub events: Vec<String>,
    /// Extracted member paths.
    pub entries: Vec<String>,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl RunObserver for RecordingObserver {
    fn on_archive_start(&mut self, archive: &Path, _index: usize, _total: usize) {
        self.events.push(format!("start:{}", file_name(archive)));
    }

    fn on_entry_extracted(&mut self, _archive: &Path, entry: &Path) {
        self.entries.push(entry.to_string_lossy().into_owned());
    }

    fn on_archive_complete(&mut self, archive: &Path, _report: &ExtractionReport) {
        self.events.push(format!("done:{}", file_name(archive)));
    }

    fn on_archive_failed(&mut self, archive: &Path, _error: &ExtractionError) {
        self.events.push(format!("failed:{}", file_name(archive)));
    }

    fn on_complete(&mut self, _report: &RunReport) {
        self.events.push("complete".to_string());
    }
}

/// Extractor that never touches the filesystem and fails on chosen names.
#[derive(Debug, Default)]
pub struct ScriptedExtractor {
    failing: HashSet<String>,
    /// File names passed to `extract`, in call order.
    pub calls: Vec<String>,
}

impl ScriptedExtractor {
    pub fn failing_on(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(ToString::to_string).collect(),
            calls: Vec::new(),
        }
    }
}

impl Extractor for ScriptedExtractor {
    fn extract(
        &mut self,
        archive: &Path,
        _dest: &Path,
        observer: &mut dyn RunObserver,
    ) -> Result<ExtractionReport> {
        let name = file_name(archive);
        self.calls.push(name.clone());
        if self.failing.contains(&name) {
            return Err(ExtractionError::InvalidArchive(format!("{name} is broken")));
        }

        let member = PathBuf::from(format!("{name}.member"));
        observer.on_entry_extracted(archive, &member);
        Ok(ExtractionReport {
            entries_extracted: 1,
            files_extracted: 1,
            members: vec![member],
            ..ExtractionReport::new()
        })
    }

    fn format_name(&self) -> &str {
        "scripted"
    }
}
