//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays reserved for progress lines and JSON.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Picks the log filter directive.
///
/// `RUST_LOG` wins when set; then `--log-level` / `TARSWEEP_LOG`; then a
/// level derived from the verbosity flags.
fn filter_directive(log_level: Option<&str>, verbose: bool, quiet: bool) -> String {
    if let Ok(directive) = std::env::var(EnvFilter::DEFAULT_ENV)
        && !directive.is_empty()
    {
        return directive;
    }

    match log_level {
        Some(level) => level.to_string(),
        None if quiet => "error".to_string(),
        None if verbose => "info".to_string(),
        None => "warn".to_string(),
    }
}

/// Initializes the global tracing subscriber.
pub fn init_logging(log_level: Option<&str>, verbose: bool, quiet: bool) {
    let directive = filter_directive(log_level, verbose, quiet);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if initialized {
        debug!(filter = %directive, "logging initialized");
    }
}
