//! Archive discovery in the configured directory.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::config::ArchivePattern;
use crate::error::RunError;

/// Checks that `dir` exists and is a directory.
///
/// # Errors
///
/// - [`RunError::DirectoryNotFound`] if nothing exists at `dir`
/// - [`RunError::NotADirectory`] if `dir` is a file
/// - [`RunError::DirectoryUnreadable`] if its metadata cannot be read
pub fn ensure_directory(dir: &Path) -> Result<(), RunError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(RunError::NotADirectory {
            path: dir.to_path_buf(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(RunError::DirectoryNotFound {
            path: dir.to_path_buf(),
        }),
        Err(source) => Err(RunError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Lists the archives in `dir` whose file name matches `pattern`.
///
/// Only the top level of `dir` is scanned. Directories are skipped even when
/// their name matches; symlinks are followed. Results are sorted by file
/// name. Names that are not valid UTF-8 never match.
///
/// # Errors
///
/// Returns [`RunError::DirectoryUnreadable`] if the directory cannot be
/// listed, plus the errors of [`ensure_directory`].
pub fn find_archives(dir: &Path, pattern: &ArchivePattern) -> Result<Vec<PathBuf>, RunError> {
    ensure_directory(dir)?;

    let unreadable = |source| RunError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut archives = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!(path = %entry.path().display(), "skipping file name that is not UTF-8");
            continue;
        };
        if !pattern.matches(name) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            debug!(path = %path.display(), "skipping directory matching archive pattern");
            continue;
        }
        archives.push(path);
    }

    archives.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(
        directory = %dir.display(),
        pattern = %pattern,
        count = archives.len(),
        "archives discovered"
    );
    Ok(archives)
}
