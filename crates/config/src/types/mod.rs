//! Configuration type definitions for the inventory application.
//!
//! Responsibilities:
//! - Define the resolved configuration record and its database sub-fields.
//! - Define the closed set of named profiles and their field overrides.
//!
//! Does NOT handle:
//! - Reading environment variables or `.env` files (see `loader` module).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - A `Config` is immutable once built; callers receive it by value.

mod profile;
mod record;

pub use profile::Profile;
pub use record::{Config, DatabaseConfig, EngineOptions};
