//! Command-line interface module.
//!
//! This module defines the CLI structure using Clap, including
//! all commands, arguments, and options.
//!
//! # Commands
//!
//! - `check`: Scan directories for `.tf` files and report formatting drift
//! - `init`: Create an example configuration file
//! - `validate`: Validate a configuration file
//!
//! # Example Usage
//!
//! ```bash
//! # Check the current directory
//! tfrefmt check
//!
//! # Check specific directories
//! tfrefmt check ./env/prod ./modules
//!
//! # Fail the build when drift exists
//! tfrefmt check --strict
//!
//! # Machine-readable report
//! tfrefmt check --format json --output drift.json
//!
//! # Only the changed-line counters, no diff bodies
//! tfrefmt check --counts-only
//!
//! # Initialize configuration
//! tfrefmt init
//!
//! # Validate configuration
//! tfrefmt validate tfrefmt.yaml
//! ```

use crate::types::ReportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tfrefmt - Report-only formatting drift checker for Terraform/OpenTofu files.
#[derive(Parser, Debug)]
#[command(
    name = "tfrefmt",
    author,
    version,
    about = "Report-only formatting drift checker for Terraform/OpenTofu files",
    long_about = "tfrefmt scans directories for Terraform/OpenTofu files, re-serializes each \
                  file through the canonical HCL formatter, and reports the difference as a \
                  unified diff with changed-line counters. No file is ever written back."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "TFREFMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check directories for formatting drift
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Create an example configuration file
    Init,

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Paths to check (directories containing Terraform files, default: current directory)
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when any file would change
    #[arg(long)]
    pub strict: bool,

    /// Number of context lines around each diff hunk (overrides the configured value)
    #[arg(long, value_name = "N")]
    pub context: Option<usize>,

    /// Only report changed-line counts, without diff bodies
    #[arg(long)]
    pub counts_only: bool,

    /// Patterns to exclude from scanning (glob patterns)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude_patterns: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Abort on the first file that fails to read or parse
    #[arg(long)]
    pub fail_fast: bool,
}

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(id = "config_file", value_name = "FILE", default_value = "tfrefmt.yaml")]
    pub config: PathBuf,
}
