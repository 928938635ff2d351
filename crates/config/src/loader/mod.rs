//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges defaults, `.env`,
//!   environment variables and command-line overrides into a `PopupConfig`.
//! - Enforce the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Command-line parsing (see the `info-popup` binary).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
