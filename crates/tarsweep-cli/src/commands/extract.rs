//! Batch extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::convert_run_error;
use crate::observer::CliObserver;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use tarsweep_core::FailurePolicy;
use tarsweep_core::RunnerConfig;
use tarsweep_core::extract_all_with_observer;

/// Maps CLI arguments onto the runner configuration.
pub fn build_config(args: &ExtractArgs) -> RunnerConfig {
    let policy = if args.keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::FailFast
    };

    RunnerConfig::default()
        .with_directory(&args.directory)
        .with_pattern(args.pattern.clone())
        .with_failure_policy(policy)
        .with_preserve_permissions(!args.no_same_permissions)
}

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter, progress: bool) -> Result<()> {
    let config = build_config(args);

    // Use progress bar if TTY is detected (not quiet, not JSON, not verbose)
    let show_progress = progress && CliProgress::should_show();
    let mut observer = CliObserver::new(formatter, show_progress, args.keep_going);

    let report = extract_all_with_observer(&config, &mut observer).map_err(convert_run_error)?;

    formatter.format_run_result(&report)?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::try_parse_from(["tarsweep"]).unwrap();
        let config = build_config(&cli.extract);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert!(config.preserve_permissions);
        assert_eq!(config.pattern.as_str(), "*.tar");
    }

    #[test]
    fn test_build_config_flags() {
        let cli = Cli::try_parse_from([
            "tarsweep",
            "--directory",
            "/srv/dumps",
            "--keep-going",
            "--no-same-permissions",
        ])
        .unwrap();
        let config = build_config(&cli.extract);
        assert_eq!(config.directory, PathBuf::from("/srv/dumps"));
        assert_eq!(config.failure_policy, FailurePolicy::KeepGoing);
        assert!(!config.preserve_permissions);
    }
}
