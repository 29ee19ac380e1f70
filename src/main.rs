//! caption-pipeline: deterministic caption generation from prompt sheets.
//!
//! This is the main entry point for the CLI. It parses arguments, sets up
//! logging, dispatches to the command handler, and maps errors to exit codes.

mod caption;
mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
mod output;
mod pipeline;
pub mod prompt;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init_logging(&cli.global) {
        eprintln!("Error: {:#}", err);
        return ExitCode::from(exit_codes::IO_FAILURE as u8);
    }

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
