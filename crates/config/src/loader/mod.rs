//! Configuration loader for environment variables and `.env` overlays.
//!
//! Responsibilities:
//! - Overlay a `.env` file onto the process environment without overwriting.
//! - Provide a builder-pattern `ConfigLoader` that resolves each field as
//!   builder value > environment variable > hardcoded default.
//! - Select the active profile from `ENVIRONMENT_MODE`.
//!
//! Does NOT handle:
//! - Anything the web application does with the resulting `Config`.
//!
//! Invariants / Assumptions:
//! - Process environment takes precedence over `.env` file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before any file is opened.
//! - Missing variables never cause errors; only an unreadable overlay file or
//!   an unknown profile under strict mode do.

mod builder;
mod env;
mod error;
mod overlay;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use overlay::{OverlayReport, default_env_path};
