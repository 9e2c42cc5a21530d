//! `.env` overlay onto the process environment.
//!
//! Responsibilities:
//! - Resolve the default overlay location next to the running executable.
//! - Parse the overlay with `dotenvy` and inject variables that are not
//!   already present in the process environment.
//!
//! Does NOT handle:
//! - The `DOTENV_DISABLED` gate or path selection (see builder.rs).
//!
//! Invariants:
//! - Variables already set in the process environment are never overwritten,
//!   even when set to an empty string.
//! - A missing file is a no-op.
//! - Malformed lines are skipped with a warning; surrounding lines still apply.
//! - Log events and errors never include raw line contents.
//! - This is the only module that mutates the process environment.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::DEFAULT_ENV_FILE_NAME;

/// Outcome of applying an overlay file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayReport {
    /// Whether the overlay file was found and read.
    pub found: bool,
    /// Variables injected into the process environment.
    pub applied: usize,
    /// Variables left alone because the process already defined them.
    pub preserved: usize,
    /// Lines skipped because they could not be parsed.
    pub malformed: usize,
}

/// Default overlay location: `.env` in the directory of the running executable.
///
/// Falls back to `.env` relative to the working directory when the executable
/// path cannot be determined.
pub fn default_env_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_ENV_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE_NAME))
}

/// Inject the variables from `path` that the process does not already define.
pub(crate) fn apply_overlay(path: &Path) -> Result<OverlayReport, ConfigError> {
    let mut report = OverlayReport::default();

    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No .env file found, skipping overlay");
            return Ok(report);
        }
        Err(err) => return Err(overlay_error(path, err)),
    };
    report.found = true;

    for (position, entry) in entries.enumerate() {
        match entry {
            Ok((key, value)) => {
                if std::env::var_os(&key).is_some() {
                    report.preserved += 1;
                    continue;
                }
                // SAFETY: the overlay runs once at startup, before the
                // application spawns threads that read the environment.
                unsafe {
                    std::env::set_var(&key, &value);
                }
                report.applied += 1;
            }
            Err(dotenvy::Error::LineParse(_, error_index)) => {
                tracing::warn!(
                    path = %path.display(),
                    entry = position + 1,
                    error_index,
                    "Skipping malformed .env line"
                );
                report.malformed += 1;
            }
            Err(err) => return Err(overlay_error(path, err)),
        }
    }

    tracing::debug!(
        path = %path.display(),
        applied = report.applied,
        preserved = report.preserved,
        malformed = report.malformed,
        "Applied .env overlay"
    );
    Ok(report)
}

fn overlay_error(path: &Path, err: dotenvy::Error) -> ConfigError {
    match err {
        dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        },
        _ => ConfigError::DotenvUnknown {
            path: path.to_path_buf(),
        },
    }
}
