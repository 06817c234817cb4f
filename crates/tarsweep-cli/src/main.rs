//! Tarsweep CLI - extracts every tar archive in a directory, in place.

mod cli;
mod commands;
mod error;
mod logging;
mod observer;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.verbose, cli.quiet);

    match &cli.command {
        Some(cli::Commands::Completion(args)) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
        None => {
            let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
            let show_progress = !(cli.json || cli.quiet || cli.verbose);
            commands::extract::execute(&cli.extract, &*formatter, show_progress)
        }
    }
}
