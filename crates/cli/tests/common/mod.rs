//! Shared test utilities for inventory-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;

const RESOLVER_VARS: &[&str] = &[
    "SECRET_KEY",
    "MYSQL_USER",
    "MYSQL_PASSWORD",
    "MYSQL_HOST",
    "MYSQL_PORT",
    "MYSQL_DB",
    "ENVIRONMENT_MODE",
    "INVENTORY_ENV_FILE",
];

/// Returns a hermetic `inventory-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Resolver variables are cleared to ensure no leakage from the host.
pub fn inventory_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("inventory-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for key in RESOLVER_VARS {
        cmd.env_remove(key);
    }

    cmd
}

/// Returns a hermetic command with the `.env` overlay enabled.
#[allow(dead_code)]
pub fn inventory_cmd_with_dotenv() -> Command {
    let mut cmd = inventory_cmd();
    cmd.env_remove("DOTENV_DISABLED");
    cmd
}
