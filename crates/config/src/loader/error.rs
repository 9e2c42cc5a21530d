//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for the few ways resolution can fail.
//!
//! Invariants:
//! - Missing or empty variables are never errors; they resolve to defaults.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `.env` file exists but could not be opened or read.
    #[error(
        "Failed to read .env file at {path}: {kind}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file at {path}. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown { path: PathBuf },

    /// The selector named a profile that is not registered and strict
    /// profile selection was requested.
    #[error("Unknown profile '{name}' (expected one of: {expected})")]
    UnknownProfile { name: String, expected: String },
}
