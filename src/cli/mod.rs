//! CLI argument parsing for caption-pipeline.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::pipeline::{DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Caption pipeline: turn a prompt sheet into reviewable captions.
///
/// Reads prompts (title, hook, call-to-action) from a CSV export, assigns
/// each one a content pillar from the workflow config in round-robin order,
/// and writes a Markdown document with one caption section per prompt.
#[derive(Parser, Debug)]
#[command(name = "caption-pipeline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the caption document from a prompt CSV.
    ///
    /// Creates the output directory if needed. Nothing is written if any
    /// prompt row is invalid.
    Generate(GenerateArgs),

    /// Validate a prompt CSV and config without writing anything.
    ///
    /// Prints the project name and the pillar each prompt would receive.
    Check(CheckArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the prompt CSV export.
    pub csv: PathBuf,

    /// Location to write generated captions.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Path to the workflow configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Print the document to stdout instead of writing the output file.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the prompt CSV export.
    pub csv: PathBuf,

    /// Path to the workflow configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
