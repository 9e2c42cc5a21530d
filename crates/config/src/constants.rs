//! Centralized names and defaults for the configuration resolver.
//!
//! Every environment variable the resolver consumes is listed here together
//! with the value used when it is unset or empty.

// =============================================================================
// Application Secrets
// =============================================================================

/// Environment variable holding the application secret key.
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";

/// Secret key used when `SECRET_KEY` is unset or empty.
pub const DEFAULT_SECRET_KEY: &str = "change-me";

// =============================================================================
// Database Connection
// =============================================================================

pub const DATABASE_USER_VAR: &str = "MYSQL_USER";
pub const DATABASE_PASSWORD_VAR: &str = "MYSQL_PASSWORD";
pub const DATABASE_HOST_VAR: &str = "MYSQL_HOST";
pub const DATABASE_PORT_VAR: &str = "MYSQL_PORT";
pub const DATABASE_NAME_VAR: &str = "MYSQL_DB";

pub const DEFAULT_DATABASE_USER: &str = "root";
pub const DEFAULT_DATABASE_PASSWORD: &str = "";
pub const DEFAULT_DATABASE_HOST: &str = "127.0.0.1";
pub const DEFAULT_DATABASE_PORT: &str = "3306";
pub const DEFAULT_DATABASE_NAME: &str = "inventory";

/// URL scheme of the composed database connection string.
pub const DATABASE_URL_SCHEME: &str = "mysql";

// =============================================================================
// Profile Selection
// =============================================================================

/// Environment variable naming the active profile.
pub const PROFILE_SELECTOR_VAR: &str = "ENVIRONMENT_MODE";

/// Profile name used when `ENVIRONMENT_MODE` is unset or empty.
pub const DEFAULT_PROFILE_NAME: &str = "development";

// =============================================================================
// Overlay File
// =============================================================================

/// File name of the overlay, resolved next to the running executable.
pub const DEFAULT_ENV_FILE_NAME: &str = ".env";

/// Environment variable overriding the overlay file location.
pub const ENV_FILE_VAR: &str = "INVENTORY_ENV_FILE";

/// Setting this to `1` or `true` skips the overlay entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Every variable that feeds the configuration record.
pub const RESOLVER_VARS: &[&str] = &[
    SECRET_KEY_VAR,
    DATABASE_USER_VAR,
    DATABASE_PASSWORD_VAR,
    DATABASE_HOST_VAR,
    DATABASE_PORT_VAR,
    DATABASE_NAME_VAR,
    PROFILE_SELECTOR_VAR,
];

/// Placeholder printed in place of secret values.
pub const REDACTED: &str = "********";
