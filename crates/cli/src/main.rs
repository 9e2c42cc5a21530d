//! Inventory CLI - resolve and inspect the application configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Run the resolver exactly as the application does at startup:
//!   overlay, environment, CLI overrides, build.
//! - Print the resolved configuration or the profile registry.
//!
//! Does NOT handle:
//! - Resolution rules themselves (see `crates/config`).
//!
//! Invariants:
//! - The `.env` overlay runs before any environment variable is read.
//! - `--profile` takes precedence over `ENVIRONMENT_MODE`.
//! - Secrets are never printed.

mod args;
mod error;
mod output;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use inventory_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Resolve the configuration the way the application does at startup.
fn resolve(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored so the default location still applies.
    if let Some(ref path) = cli.env_file
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_env_file(path.clone());
    }

    loader = loader
        .load_dotenv()
        .context("Failed to load environment overlay")?;

    loader = loader.from_env().with_strict_profile(cli.strict_profile);
    if let Some(ref profile) = cli.profile {
        loader = loader.with_profile_name(profile.clone());
    }

    let config = loader.build().context("Failed to build configuration")?;

    if config.is_using_default_secret_key() && !config.debug {
        tracing::warn!(
            profile = %config.profile,
            "Using the placeholder SECRET_KEY outside development. Set SECRET_KEY before production use."
        );
    }

    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve(cli)?;

    let rendered = match cli.command {
        Commands::Show => output::render_config(&config, cli.output)?,
        Commands::Profiles => output::render_profiles(config.profile, cli.output)?,
    };
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}
