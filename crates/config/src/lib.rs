//! Configuration resolver for the inventory web application.
//!
//! This crate reads environment variables (optionally overlaid from a local
//! `.env` file), maps them into a typed [`Config`], and selects the named
//! [`Profile`] that specializes it.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, OverlayReport, default_env_path, env_var_or_none};
pub use types::{Config, DatabaseConfig, EngineOptions, Profile};
