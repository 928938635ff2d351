//! Configuration for the info popup.
//!
//! This crate provides the popup's construction-time style, the color
//! themes, shared constants, and a loader that reads overrides from the
//! environment and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ColorTheme, Decorator, PopupConfig, PopupStyle, Theme};
