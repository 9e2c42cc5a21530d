//! Environment variable reading for configuration.
//!
//! Responsibilities:
//! - Read the resolver's environment variables into a ConfigLoader instance.
//! - Provide a helper for reading env vars with empty-value filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (see overlay.rs).
//!
//! Invariants:
//! - Unset and empty record variables are treated the same: the field keeps its default.
//! - The profile selector is read unfiltered: an empty `ENVIRONMENT_MODE` is a
//!   name like any other and misses the registry. Only an unset selector
//!   leaves the loader's "development" default in place.
//! - Non-empty values are returned verbatim, surrounding whitespace included.
//! - Non-UTF-8 values are treated as unset.

use secrecy::SecretString;

use super::builder::ConfigLoader;
use crate::constants::{
    DATABASE_HOST_VAR, DATABASE_NAME_VAR, DATABASE_PASSWORD_VAR, DATABASE_PORT_VAR,
    DATABASE_USER_VAR, PROFILE_SELECTOR_VAR, SECRET_KEY_VAR,
};

/// Read an environment variable, returning None if unset or empty.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Apply environment variable configuration to the loader.
///
/// Values read here replace earlier builder values, so builder overrides
/// belong after `from_env()`.
pub fn apply_env(loader: &mut ConfigLoader) {
    if let Some(secret_key) = env_var_or_none(SECRET_KEY_VAR) {
        loader.set_secret_key(Some(SecretString::new(secret_key.into())));
    }
    if let Some(user) = env_var_or_none(DATABASE_USER_VAR) {
        loader.set_database_user(Some(user));
    }
    if let Some(password) = env_var_or_none(DATABASE_PASSWORD_VAR) {
        loader.set_database_password(Some(SecretString::new(password.into())));
    }
    if let Some(host) = env_var_or_none(DATABASE_HOST_VAR) {
        loader.set_database_host(Some(host));
    }
    if let Some(port) = env_var_or_none(DATABASE_PORT_VAR) {
        loader.set_database_port(Some(port));
    }
    if let Some(name) = env_var_or_none(DATABASE_NAME_VAR) {
        loader.set_database_name(Some(name));
    }

    if let Ok(profile) = std::env::var(PROFILE_SELECTOR_VAR) {
        loader.set_profile_name(Some(profile));
    }
}
