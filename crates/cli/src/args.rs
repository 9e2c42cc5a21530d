//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind the overlay path flag to its environment variable.
//!
//! Non-responsibilities:
//! - Does not resolve configuration (see `main`).
//! - Does not render output (see `output` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inventory-cli")]
#[command(about = "Resolve and inspect the inventory application configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  inventory-cli show\n  inventory-cli --profile default show -o json\n  inventory-cli --env-file ./deploy/.env profiles\n  ENVIRONMENT_MODE=staging inventory-cli --strict-profile show\n"
)]
pub struct Cli {
    /// Path to the .env overlay file (defaults to .env next to the executable)
    #[arg(long, global = true, env = "INVENTORY_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Profile to select (overrides ENVIRONMENT_MODE)
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Fail instead of falling back when the profile name is not registered
    #[arg(long, global = true)]
    pub strict_profile: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Emit log events as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved configuration with secrets redacted
    Show,

    /// List registered profiles and mark the selected one
    Profiles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
