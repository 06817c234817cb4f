//! High-level public API for batch extraction.

use crate::RunError;
use crate::RunReport;
use crate::RunnerConfig;
use crate::extractor::TarExtractor;
use crate::report::NoopObserver;
use crate::report::RunObserver;
use crate::runner::Runner;

/// Extracts every matching tar archive in `config.directory` into that
/// directory.
///
/// # Errors
///
/// Returns an error if the directory is missing or unreadable, or if an
/// archive fails to extract (see [`Runner::run`]).
///
/// # Examples
///
/// ```no_run
/// use tarsweep_core::RunnerConfig;
/// use tarsweep_core::extract_all;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_all(&RunnerConfig::default())?;
/// println!("{} members extracted", report.entries_extracted());
/// # Ok(())
/// # }
/// ```
pub fn extract_all(config: &RunnerConfig) -> Result<RunReport, RunError> {
    extract_all_with_observer(config, &mut NoopObserver)
}

/// Like [`extract_all`], reporting progress to `observer`.
///
/// # Errors
///
/// Same as [`extract_all`].
pub fn extract_all_with_observer(
    config: &RunnerConfig,
    observer: &mut dyn RunObserver,
) -> Result<RunReport, RunError> {
    let extractor =
        TarExtractor::new().with_preserve_permissions(config.preserve_permissions);
    Runner::new(config.clone(), extractor).run(observer)
}
