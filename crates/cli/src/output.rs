//! Rendering of resolved configuration for humans and scripts.
//!
//! Responsibilities:
//! - Build display views of `Config` with every secret redacted.
//! - Render views as aligned tables or pretty JSON.
//!
//! Invariants:
//! - Secret values never reach a view; only `REDACTED` or an empty string does.

use anyhow::Result;
use inventory_config::constants::REDACTED;
use inventory_config::{Config, EngineOptions, Profile};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::fmt::Write as _;

use crate::args::OutputFormat;

/// Redacted view of the resolved configuration.
#[derive(Debug, Serialize)]
pub struct ConfigView<'a> {
    pub profile: Profile,
    pub debug: bool,
    pub secret_key: &'static str,
    pub database_url: String,
    pub database: DatabaseView<'a>,
    pub track_modifications: bool,
    pub engine_options: EngineOptions,
}

#[derive(Debug, Serialize)]
pub struct DatabaseView<'a> {
    pub user: &'a str,
    pub password: &'static str,
    pub host: &'a str,
    pub port: &'a str,
    pub name: &'a str,
}

impl<'a> From<&'a Config> for ConfigView<'a> {
    fn from(config: &'a Config) -> Self {
        let password = if config.database.password.expose_secret().is_empty() {
            ""
        } else {
            REDACTED
        };

        Self {
            profile: config.profile,
            debug: config.debug,
            secret_key: REDACTED,
            database_url: config.database.redacted_url(),
            database: DatabaseView {
                user: &config.database.user,
                password,
                host: &config.database.host,
                port: &config.database.port,
                name: &config.database.name,
            },
            track_modifications: config.track_modifications,
            engine_options: config.engine_options,
        }
    }
}

/// One registry entry in `profiles` output.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub name: &'static str,
    pub debug: bool,
    pub selected: bool,
}

/// List every registered profile, marking `selected`.
pub fn profile_views(selected: Profile) -> Vec<ProfileView> {
    Profile::ALL
        .into_iter()
        .map(|profile| ProfileView {
            name: profile.name(),
            debug: profile.debug(),
            selected: profile == selected,
        })
        .collect()
}

pub fn render_config(config: &Config, format: OutputFormat) -> Result<String> {
    let view = ConfigView::from(config);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
        OutputFormat::Table => {
            let rows = [
                ("profile", view.profile.to_string()),
                ("debug", view.debug.to_string()),
                ("secret_key", view.secret_key.to_string()),
                ("database_url", view.database_url.clone()),
                ("database.user", view.database.user.to_string()),
                ("database.password", view.database.password.to_string()),
                ("database.host", view.database.host.to_string()),
                ("database.port", view.database.port.to_string()),
                ("database.name", view.database.name.to_string()),
                ("track_modifications", view.track_modifications.to_string()),
                (
                    "engine_options.pool_pre_ping",
                    view.engine_options.pool_pre_ping.to_string(),
                ),
            ];
            render_table(&rows)
        }
    }
}

pub fn render_profiles(selected: Profile, format: OutputFormat) -> Result<String> {
    let views = profile_views(selected);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&views)?),
        OutputFormat::Table => {
            let mut output = String::new();
            for view in &views {
                let marker = if view.selected { "*" } else { " " };
                writeln!(output, "{} {:<12} debug={}", marker, view.name, view.debug)?;
            }
            Ok(output)
        }
    }
}

fn render_table(rows: &[(&str, String)]) -> Result<String> {
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (key, value) in rows {
        writeln!(output, "{:<width$}  {}", key, value, width = width)?;
    }
    Ok(output)
}
