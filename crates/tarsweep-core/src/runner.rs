//! The batch runner: discover archives, extract them one by one, report.

use std::time::Instant;

use tracing::info;
use tracing::warn;

use crate::config::FailurePolicy;
use crate::config::RunnerConfig;
use crate::discovery::find_archives;
use crate::error::RunError;
use crate::extractor::Extractor;
use crate::report::ArchiveOutcome;
use crate::report::RunObserver;
use crate::report::RunReport;

/// Sequential batch extractor.
///
/// Archives are extracted strictly one at a time into the configured
/// directory, in file name order. Nothing is retried.
pub struct Runner<E> {
    config: RunnerConfig,
    extractor: E,
}

impl<E: Extractor> Runner<E> {
    /// Creates a runner using `extractor` for every archive.
    pub fn new(config: RunnerConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    /// Returns the runner configuration.
    pub const fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Returns the extractor, e.g. to inspect a test double after a run.
    pub const fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Runs the batch.
    ///
    /// `observer.on_complete` fires exactly once, and only when every
    /// archive extracted successfully (zero archives included).
    ///
    /// # Errors
    ///
    /// - directory errors before any archive is touched
    /// - [`RunError::Extraction`] for the first failed archive under
    ///   [`FailurePolicy::FailFast`]
    /// - [`RunError::ArchivesFailed`] after all archives were attempted under
    ///   [`FailurePolicy::KeepGoing`] and at least one failed
    pub fn run(&mut self, observer: &mut dyn RunObserver) -> Result<RunReport, RunError> {
        let start = Instant::now();
        self.config.validate()?;

        let dir = self.config.directory.as_path();
        let archives = find_archives(dir, &self.config.pattern)?;
        let total = archives.len();
        info!(
            directory = %dir.display(),
            pattern = %self.config.pattern,
            archives = total,
            "starting batch extraction"
        );

        let mut report = RunReport::new(dir);
        for (index, archive) in archives.into_iter().enumerate() {
            observer.on_archive_start(&archive, index + 1, total);

            match self.extractor.extract(&archive, dir, observer) {
                Ok(extracted) => {
                    info!(
                        archive = %archive.display(),
                        entries = extracted.entries_extracted,
                        bytes = extracted.bytes_written,
                        "archive extracted"
                    );
                    observer.on_archive_complete(&archive, &extracted);
                    report.outcomes.push(ArchiveOutcome::Extracted {
                        archive,
                        report: extracted,
                    });
                }
                Err(error) => {
                    warn!(archive = %archive.display(), %error, "archive failed");
                    observer.on_archive_failed(&archive, &error);

                    if self.config.failure_policy == FailurePolicy::FailFast {
                        return Err(RunError::Extraction {
                            archive,
                            source: error,
                        });
                    }
                    report.outcomes.push(ArchiveOutcome::Failed { archive, error });
                }
            }
        }

        report.duration = start.elapsed();
        let failed = report.archives_failed();
        if failed > 0 {
            return Err(RunError::ArchivesFailed {
                failed,
                total,
                report: Box::new(report),
            });
        }

        info!(
            archives = total,
            duration_ms = report.duration.as_millis(),
            "all archives extracted"
        );
        observer.on_complete(&report);
        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingObserver;
    use crate::test_utils::ScriptedExtractor;
    use std::fs;
    use tempfile::TempDir;

    fn dir_with(names: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in names {
            fs::write(temp.path().join(name), "x").unwrap();
        }
        temp
    }

    fn runner(temp: &TempDir, failing: &[&str], policy: FailurePolicy) -> Runner<ScriptedExtractor> {
        let config = RunnerConfig::default()
            .with_directory(temp.path())
            .with_failure_policy(policy);
        Runner::new(config, ScriptedExtractor::failing_on(failing))
    }

    #[test]
    fn test_zero_archives_still_completes() {
        let temp = dir_with(&["readme.txt"]);
        let mut runner = runner(&temp, &[], FailurePolicy::FailFast);
        let mut observer = RecordingObserver::default();

        let report = runner.run(&mut observer).unwrap();

        assert_eq!(report.archives_attempted(), 0);
        assert_eq!(observer.events, vec!["complete"]);
        assert!(runner.extractor().calls.is_empty());
    }

    #[test]
    fn test_all_archives_in_order() {
        let temp = dir_with(&["b.tar", "a.tar", "c.tar"]);
        let mut runner = runner(&temp, &[], FailurePolicy::FailFast);
        let mut observer = RecordingObserver::default();

        let report = runner.run(&mut observer).unwrap();

        assert_eq!(report.archives_extracted(), 3);
        assert_eq!(
            observer.events,
            vec![
                "start:a.tar",
                "done:a.tar",
                "start:b.tar",
                "done:b.tar",
                "start:c.tar",
                "done:c.tar",
                "complete"
            ]
        );
        assert_eq!(
            observer.entries,
            vec!["a.tar.member", "b.tar.member", "c.tar.member"]
        );
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let temp = dir_with(&["a.tar", "b.tar", "c.tar"]);
        let mut runner = runner(&temp, &["b.tar"], FailurePolicy::FailFast);
        let mut observer = RecordingObserver::default();

        let err = runner.run(&mut observer).unwrap_err();

        assert!(matches!(err, RunError::Extraction { .. }));
        assert_eq!(err.archive().unwrap().file_name().unwrap(), "b.tar");
        assert_eq!(runner.extractor().calls, vec!["a.tar", "b.tar"]);
        assert_eq!(
            observer.events,
            vec!["start:a.tar", "done:a.tar", "start:b.tar", "failed:b.tar"]
        );
    }

    #[test]
    fn test_keep_going_attempts_everything() {
        let temp = dir_with(&["a.tar", "b.tar", "c.tar"]);
        let mut runner = runner(&temp, &["a.tar", "c.tar"], FailurePolicy::KeepGoing);
        let mut observer = RecordingObserver::default();

        let err = runner.run(&mut observer).unwrap_err();

        match err {
            RunError::ArchivesFailed {
                failed,
                total,
                report,
            } => {
                assert_eq!((failed, total), (2, 3));
                assert_eq!(report.archives_extracted(), 1);
            }
            other => panic!("expected ArchivesFailed, got {other:?}"),
        }
        assert_eq!(runner.extractor().calls, vec!["a.tar", "b.tar", "c.tar"]);
        assert!(!observer.events.contains(&"complete".to_string()));
    }

    #[test]
    fn test_missing_directory_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let config = RunnerConfig::default().with_directory(temp.path().join("missing"));
        let mut runner = Runner::new(config, ScriptedExtractor::default());
        let mut observer = RecordingObserver::default();

        let err = runner.run(&mut observer).unwrap_err();

        assert!(matches!(err, RunError::DirectoryNotFound { .. }));
        assert!(observer.events.is_empty());
        assert!(runner.extractor().calls.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_before_scan() {
        let config = RunnerConfig::default().with_directory("");
        let mut runner = Runner::new(config, ScriptedExtractor::default());
        let err = runner.run(&mut RecordingObserver::default()).unwrap_err();
        assert!(matches!(err, RunError::InvalidConfig { .. }));
    }
}
