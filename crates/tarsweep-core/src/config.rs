//! Configuration for batch extraction runs.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::RunError;

/// Directory scanned when none is configured.
pub const DEFAULT_DIRECTORY: &str = "archives";

/// File name pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "*.tar";

/// What to do when an archive fails to extract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failed archive; later archives are never attempted.
    #[default]
    FailFast,
    /// Attempt every archive, then report all failures together.
    KeepGoing,
}

/// Glob-style file name pattern selecting archives.
///
/// Supports `*` (any run of characters, including none) and `?` (exactly
/// one character). Matching is case-sensitive and applies to the file name
/// only, never to directory components.
///
/// # Examples
///
/// ```
/// use tarsweep_core::ArchivePattern;
///
/// let pattern: ArchivePattern = "*.tar".parse().unwrap();
/// assert!(pattern.matches("backup.tar"));
/// assert!(!pattern.matches("backup.tar.gz"));
/// assert!(!pattern.matches("backup.TAR"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePattern {
    pattern: String,
}

impl ArchivePattern {
    /// Creates a pattern, rejecting empty patterns and patterns containing
    /// path separators.
    pub fn new(pattern: impl Into<String>) -> Result<Self, RunError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(RunError::InvalidConfig {
                reason: "archive pattern must not be empty".to_string(),
            });
        }
        if pattern.contains('/') || pattern.contains('\\') {
            return Err(RunError::InvalidConfig {
                reason: format!("archive pattern must be a file name pattern: {pattern}"),
            });
        }
        Ok(Self { pattern })
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` if `name` matches the pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        wildcard_matches(self.pattern.as_bytes(), name.as_bytes())
    }
}

impl Default for ArchivePattern {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl FromStr for ArchivePattern {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ArchivePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Iterative wildcard match with single-star backtracking.
///
/// Works on bytes; `?` therefore matches one byte, which only differs from a
/// character match for non-ASCII names.
fn wildcard_matches(pattern: &[u8], name: &[u8]) -> bool {
    let (mut p, mut n) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some(b'*') => {
                star = Some((p, n));
                p += 1;
            }
            Some(&c) if c == b'?' || c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match star {
                Some((star_p, star_n)) => {
                    p = star_p + 1;
                    n = star_n + 1;
                    star = Some((star_p, star_n + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == b'*')
}

/// Configuration for a batch extraction run.
///
/// # Examples
///
/// ```
/// use tarsweep_core::FailurePolicy;
/// use tarsweep_core::RunnerConfig;
///
/// // Scan ./archives for *.tar and stop at the first failure
/// let config = RunnerConfig::default();
///
/// let custom = RunnerConfig::default()
///     .with_directory("/srv/dumps")
///     .with_failure_policy(FailurePolicy::KeepGoing);
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory holding the archives; extraction happens into it too.
    ///
    /// Default: `archives`.
    pub directory: PathBuf,

    /// File name pattern selecting archives.
    ///
    /// Default: `*.tar`.
    pub pattern: ArchivePattern,

    /// Behavior when an archive fails.
    ///
    /// Default: [`FailurePolicy::FailFast`].
    pub failure_policy: FailurePolicy,

    /// Restore file modes stored in the archives.
    ///
    /// Default: `true`.
    pub preserve_permissions: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            pattern: ArchivePattern::default(),
            failure_policy: FailurePolicy::default(),
            preserve_permissions: true,
        }
    }
}

impl RunnerConfig {
    /// Creates a new `RunnerConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive directory.
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Sets the archive file name pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: ArchivePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Sets whether file modes from the archives are restored.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::InvalidConfig`] if the directory path is empty.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.directory.as_os_str().is_empty() {
            return Err(RunError::InvalidConfig {
                reason: "archive directory must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
