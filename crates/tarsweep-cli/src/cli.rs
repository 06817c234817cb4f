//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;
use tarsweep_core::ArchivePattern;
use tarsweep_core::config::DEFAULT_DIRECTORY;
use tarsweep_core::config::DEFAULT_PATTERN;

#[derive(Parser)]
#[command(name = "tarsweep")]
#[command(author, version, long_about = None)]
#[command(about = "Command-line utility that extracts every tar archive in a directory")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub extract: ExtractArgs,

    /// Show extra detail (run directory, duration, JSON member lists)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub json: bool,

    /// Diagnostic log level written to stderr (RUST_LOG takes precedence)
    #[arg(
        long,
        global = true,
        env = "TARSWEEP_LOG",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Directory holding the archives; they are extracted into it
    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        env = "TARSWEEP_DIR",
        default_value = DEFAULT_DIRECTORY
    )]
    pub directory: PathBuf,

    /// File name pattern selecting archives (`*` and `?` wildcards)
    #[arg(
        short,
        long,
        value_name = "GLOB",
        env = "TARSWEEP_PATTERN",
        default_value = DEFAULT_PATTERN,
        value_parser = parse_pattern
    )]
    pub pattern: ArchivePattern,

    /// Keep extracting remaining archives after a failure
    #[arg(short, long)]
    pub keep_going: bool,

    /// Do not restore file modes stored in the archives
    #[arg(long)]
    pub no_same_permissions: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_pattern(s: &str) -> Result<ArchivePattern, String> {
    ArchivePattern::new(s).map_err(|e| e.to_string())
}
