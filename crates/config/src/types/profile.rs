//! Named configuration profiles.
//!
//! Responsibilities:
//! - Define the closed set of profiles the application can run under.
//! - Map selector names to profiles (case-sensitive).
//! - Apply each profile's field overrides to a configuration record.
//!
//! Does NOT handle:
//! - Reading the selector from the environment (see `loader` module).
//! - Rejecting unknown names; strict mode is enforced by `ConfigLoader::build`.
//!
//! Invariants:
//! - `Profile::select` is total: unset or unknown names yield `Profile::Default`.
//! - `Development` differs from `Default` only in `debug = true`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::record::Config;

/// A named specialization of the configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Local development: debug output enabled.
    Development,
    /// Baseline record with no overrides.
    Default,
}

impl Profile {
    /// Every registered profile, in registry order.
    pub const ALL: [Profile; 2] = [Profile::Development, Profile::Default];

    /// The selector name of this profile.
    pub const fn name(self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Default => "default",
        }
    }

    /// Look up a profile by exact name.
    pub fn lookup(name: &str) -> Option<Profile> {
        Self::ALL.into_iter().find(|profile| profile.name() == name)
    }

    /// Resolve a selector value, falling back to `Profile::Default`.
    pub fn select(selector: Option<&str>) -> Profile {
        match selector {
            Some(name) => Self::lookup(name).unwrap_or_else(|| {
                tracing::warn!(
                    profile = name,
                    fallback = Profile::Default.name(),
                    "Unknown profile name, falling back"
                );
                Profile::Default
            }),
            None => Profile::Default,
        }
    }

    /// Whether this profile turns on debug mode.
    pub const fn debug(self) -> bool {
        matches!(self, Profile::Development)
    }

    pub(crate) fn apply(self, config: &mut Config) {
        config.debug = self.debug();
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
