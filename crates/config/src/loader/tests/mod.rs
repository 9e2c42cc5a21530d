//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test builder methods and default resolution.
//! - Test environment variable handling and precedence.
//! - Test `.env` overlay behavior.
//! - Test profile selection, including strict mode.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every test touching the environment runs inside `with_resolver_env`, so
//!   variables the overlay injects are rolled back afterwards.

use std::sync::Mutex;

use crate::constants::{DOTENV_DISABLED_VAR, ENV_FILE_VAR, RESOLVER_VARS};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every resolver variable unset except the given overrides.
///
/// Extra keys in `overrides` are set too and restored afterwards.
pub fn with_resolver_env<F, R>(overrides: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut keys: Vec<&str> = RESOLVER_VARS.to_vec();
    keys.extend([DOTENV_DISABLED_VAR, ENV_FILE_VAR]);
    for (key, _) in overrides {
        if !keys.contains(key) {
            keys.push(*key);
        }
    }

    let vars: Vec<(&str, Option<&str>)> = keys
        .into_iter()
        .map(|key| {
            let value = overrides
                .iter()
                .find(|(candidate, _)| *candidate == key)
                .map(|(_, value)| *value);
            (key, value)
        })
        .collect();

    temp_env::with_vars(vars, f)
}
