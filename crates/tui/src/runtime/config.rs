//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration from `.env`, environment variables and CLI arguments.
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > defaults.
//! - `load_dotenv()` is called before reading the environment.

use anyhow::{Context, Result};
use info_popup_config::{ConfigLoader, PopupConfig};

use crate::cli::Cli;

/// Resolve the configuration for this run.
pub fn load_config(cli: &Cli) -> Result<PopupConfig> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?
        .from_env()
        .context("Invalid INFO_POPUP_* environment configuration")?;

    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    if let Some(ms) = cli.center_delay_ms {
        loader = loader
            .with_center_delay_ms(ms)
            .context("Invalid --center-delay-ms")?;
    }

    let config = loader.build();
    tracing::info!(
        theme = %config.theme,
        center_delay_ms = config.center_delay.as_millis() as u64,
        tick_ms = config.tick_interval.as_millis() as u64,
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use info_popup_config::ColorTheme;
    use serial_test::serial;
    use std::time::Duration;

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        temp_env::with_vars(
            [
                ("DOTENV_DISABLED", Some("1")),
                ("INFO_POPUP_THEME", Some("dark")),
                ("INFO_POPUP_CENTER_DELAY_MS", Some("300")),
            ],
            || {
                let cli = Cli::parse_from([
                    "info-popup",
                    "--theme",
                    "monochrome",
                    "--center-delay-ms",
                    "5",
                ]);
                let config = load_config(&cli).unwrap();
                assert_eq!(config.theme, ColorTheme::Monochrome);
                assert_eq!(config.center_delay, Duration::from_millis(5));
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_env_is_reported() {
        temp_env::with_vars(
            [
                ("DOTENV_DISABLED", Some("1")),
                ("INFO_POPUP_TICK_MS", Some("fast")),
            ],
            || {
                let cli = Cli::parse_from(["info-popup"]);
                let err = load_config(&cli).unwrap_err();
                assert!(format!("{err:#}").contains("INFO_POPUP_TICK_MS"));
            },
        );
    }
}
