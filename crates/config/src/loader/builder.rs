//! Builder-pattern loader that merges defaults, `.env`, environment and CLI values.

use std::time::Duration;

use super::env::{apply_env, validate_center_delay};
use super::error::ConfigError;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::types::{ColorTheme, PopupConfig};

/// Configuration loader.
///
/// Precedence (highest first): explicit overrides, environment, defaults.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    theme: Option<ColorTheme>,
    center_delay: Option<Duration>,
    tick_interval: Option<Duration>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        std::env::var(ENV_DOTENV_DISABLED).is_ok_and(|v| !v.trim().is_empty())
    }

    /// Load a `.env` file from the working directory, if one exists.
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    /// Skipped entirely when `DOTENV_DISABLED` is set.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read `INFO_POPUP_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Override the theme (CLI precedence).
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Override the centering delay in milliseconds (CLI precedence).
    pub fn with_center_delay_ms(mut self, ms: u64) -> Result<Self, ConfigError> {
        self.center_delay = Some(validate_center_delay(ms)?);
        Ok(self)
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_center_delay(&mut self, delay: Option<Duration>) {
        self.center_delay = delay;
    }

    pub(crate) fn set_tick_interval(&mut self, tick: Option<Duration>) {
        self.tick_interval = tick;
    }

    pub fn build(self) -> PopupConfig {
        let defaults = PopupConfig::default();
        PopupConfig {
            theme: self.theme.unwrap_or(defaults.theme),
            style: defaults.style,
            center_delay: self.center_delay.unwrap_or(defaults.center_delay),
            tick_interval: self.tick_interval.unwrap_or(defaults.tick_interval),
        }
    }
}

