//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that collects field values.
//! - Gate and run the `.env` overlay.
//! - Build the final `Config`, filling gaps with defaults and applying the
//!   selected profile.
//!
//! Does NOT handle:
//! - Direct environment variable reading (delegated to env.rs).
//! - `.env` parsing and injection (delegated to overlay.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before the overlay file is opened.
//! - `build()` only fails for an unknown profile under strict selection.

use secrecy::SecretString;
use std::path::{Path, PathBuf};

use super::env::{apply_env, env_var_or_none};
use super::error::ConfigError;
use super::overlay::{OverlayReport, apply_overlay, default_env_path};
use crate::constants::{
    DEFAULT_DATABASE_HOST, DEFAULT_DATABASE_NAME, DEFAULT_DATABASE_PASSWORD,
    DEFAULT_DATABASE_PORT, DEFAULT_DATABASE_USER, DEFAULT_PROFILE_NAME, DEFAULT_SECRET_KEY,
    DOTENV_DISABLED_VAR, ENV_FILE_VAR,
};
use crate::types::{Config, DatabaseConfig, Profile};

/// Configuration loader that builds config from environment variables and builder overrides.
///
/// Every `with_*` setter, `with_profile_name` included, follows the same
/// precedence: called after `from_env()` it wins over the environment,
/// called before it is replaced by any variable that is set.
/// `with_env_file` and `with_strict_profile` are not read from the
/// environment and are never replaced.
#[derive(Default)]
pub struct ConfigLoader {
    secret_key: Option<SecretString>,
    database_user: Option<String>,
    database_password: Option<SecretString>,
    database_host: Option<String>,
    database_port: Option<String>,
    database_name: Option<String>,
    profile_name: Option<String>,
    env_file: Option<PathBuf>,
    strict_profile: bool,
    overlay: Option<OverlayReport>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Overlay the `.env` file onto the process environment if present.
    ///
    /// The file is taken from `with_env_file()`, then `INVENTORY_ENV_FILE`,
    /// then `.env` next to the running executable.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvIo` if the file exists but cannot be read.
    /// Missing files and malformed lines are not errors.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let path = self
            .env_file
            .clone()
            .or_else(|| env_var_or_none(ENV_FILE_VAR).map(PathBuf::from))
            .unwrap_or_else(default_env_path);
        self.load_dotenv_from(&path)
    }

    /// Overlay a specific `.env` file onto the process environment.
    ///
    /// Same gate and error semantics as [`ConfigLoader::load_dotenv`].
    pub fn load_dotenv_from(mut self, path: &Path) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("DOTENV_DISABLED is set, skipping .env overlay");
            return Ok(self);
        }

        self.overlay = Some(apply_overlay(path)?);
        Ok(self)
    }

    /// Outcome of the last overlay attempt, if one ran.
    pub fn overlay_report(&self) -> Option<OverlayReport> {
        self.overlay
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the overlay file path used by `load_dotenv()`.
    pub fn with_env_file(mut self, path: PathBuf) -> Self {
        self.env_file = Some(path);
        self
    }

    /// Set the profile selector name.
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    /// Reject unknown profile names in `build()` instead of falling back.
    pub fn with_strict_profile(mut self, strict: bool) -> Self {
        self.strict_profile = strict;
        self
    }

    /// Set the application secret key.
    pub fn with_secret_key(mut self, secret_key: String) -> Self {
        self.secret_key = Some(SecretString::new(secret_key.into()));
        self
    }

    /// Set the database user.
    pub fn with_database_user(mut self, user: String) -> Self {
        self.database_user = Some(user);
        self
    }

    /// Set the database password.
    pub fn with_database_password(mut self, password: String) -> Self {
        self.database_password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the database host.
    pub fn with_database_host(mut self, host: String) -> Self {
        self.database_host = Some(host);
        self
    }

    /// Set the database port.
    pub fn with_database_port(mut self, port: String) -> Self {
        self.database_port = Some(port);
        self
    }

    /// Set the database name.
    pub fn with_database_name(mut self, name: String) -> Self {
        self.database_name = Some(name);
        self
    }

    pub fn profile_name(&self) -> Option<&str> {
        self.profile_name.as_deref()
    }

    pub(super) fn set_secret_key(&mut self, value: Option<SecretString>) {
        self.secret_key = value;
    }

    pub(super) fn set_database_user(&mut self, value: Option<String>) {
        self.database_user = value;
    }

    pub(super) fn set_database_password(&mut self, value: Option<SecretString>) {
        self.database_password = value;
    }

    pub(super) fn set_database_host(&mut self, value: Option<String>) {
        self.database_host = value;
    }

    pub(super) fn set_database_port(&mut self, value: Option<String>) {
        self.database_port = value;
    }

    pub(super) fn set_database_name(&mut self, value: Option<String>) {
        self.database_name = value;
    }

    pub(super) fn set_profile_name(&mut self, value: Option<String>) {
        self.profile_name = value;
    }

    /// Resolve the profile from the selector name.
    ///
    /// With no selector the default name ("development") applies. A selector
    /// that is set but empty is looked up as-is and falls back to
    /// `Profile::Default`, or fails under strict selection.
    pub fn resolve_profile(&self) -> Result<Profile, ConfigError> {
        let name = self.profile_name.as_deref().unwrap_or(DEFAULT_PROFILE_NAME);
        if self.strict_profile && Profile::lookup(name).is_none() {
            return Err(ConfigError::UnknownProfile {
                name: name.to_string(),
                expected: Profile::ALL.map(Profile::name).join(", "),
            });
        }
        Ok(Profile::select(Some(name)))
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let profile = self.resolve_profile()?;
        tracing::debug!(profile = %profile, "Selected configuration profile");

        let database = DatabaseConfig {
            user: self
                .database_user
                .unwrap_or_else(|| DEFAULT_DATABASE_USER.to_string()),
            password: self
                .database_password
                .unwrap_or_else(|| SecretString::new(DEFAULT_DATABASE_PASSWORD.into())),
            host: self
                .database_host
                .unwrap_or_else(|| DEFAULT_DATABASE_HOST.to_string()),
            port: self
                .database_port
                .unwrap_or_else(|| DEFAULT_DATABASE_PORT.to_string()),
            name: self
                .database_name
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
        };
        let secret_key = self
            .secret_key
            .unwrap_or_else(|| SecretString::new(DEFAULT_SECRET_KEY.into()));

        Ok(Config::new(secret_key, database, profile))
    }
}
