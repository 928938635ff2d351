//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `INFO_POPUP_*` environment variables.
//! - Apply the parsed values to a `ConfigLoader`.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return a `ConfigError` naming the variable.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_CENTER_DELAY_MS, ENV_THEME, ENV_TICK_MS, MAX_CENTER_DELAY_MS, MAX_UI_TICK_MS,
    MIN_UI_TICK_MS,
};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_millis(var: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a whole number of milliseconds".to_string(),
    })
}

/// Validate a centering delay in milliseconds.
pub fn validate_center_delay(ms: u64) -> Result<Duration, ConfigError> {
    if ms > MAX_CENTER_DELAY_MS {
        return Err(ConfigError::InvalidCenterDelay {
            message: format!("must be between 0 and {MAX_CENTER_DELAY_MS} (got {ms})"),
        });
    }
    Ok(Duration::from_millis(ms))
}

/// Validate a UI tick interval in milliseconds.
pub fn validate_tick(ms: u64) -> Result<Duration, ConfigError> {
    if !(MIN_UI_TICK_MS..=MAX_UI_TICK_MS).contains(&ms) {
        return Err(ConfigError::InvalidTickInterval {
            message: format!(
                "must be between {MIN_UI_TICK_MS} and {MAX_UI_TICK_MS} (got {ms})"
            ),
        });
    }
    Ok(Duration::from_millis(ms))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let theme: ColorTheme = theme.parse().map_err(|message| ConfigError::InvalidValue {
            var: ENV_THEME.to_string(),
            message,
        })?;
        loader.set_theme(Some(theme));
    }
    if let Some(delay) = env_var_or_none(ENV_CENTER_DELAY_MS) {
        let ms = parse_millis(ENV_CENTER_DELAY_MS, &delay)?;
        loader.set_center_delay(Some(validate_center_delay(ms)?));
    }
    if let Some(tick) = env_var_or_none(ENV_TICK_MS) {
        let ms = parse_millis(ENV_TICK_MS, &tick)?;
        loader.set_tick_interval(Some(validate_tick(ms)?));
    }
    Ok(())
}
