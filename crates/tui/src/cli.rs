//! Command-line argument parsing for info-popup.
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - CLI values take precedence over `INFO_POPUP_*` environment variables.

use clap::Parser;
use info_popup_config::ColorTheme;
use std::path::PathBuf;

/// Command-line arguments for info-popup.
#[derive(Debug, Parser)]
#[command(
    name = "info-popup",
    about = "Terminal demo of a reusable centered or anchored info popup",
    version,
    after_help = "Examples:\n  info-popup\n  info-popup --theme dark\n  info-popup --center-delay-ms 0 --no-mouse\n"
)]
pub struct Cli {
    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Color theme (default, dark, high_contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// Delay before the popup is centered after being shown, in milliseconds
    #[arg(long)]
    pub center_delay_ms: Option<u64>,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["info-popup"]);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert_eq!(cli.theme, None);
        assert_eq!(cli.center_delay_ms, None);
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_theme_flag() {
        let cli = Cli::parse_from(["info-popup", "--theme", "high_contrast"]);
        assert_eq!(cli.theme, Some(ColorTheme::HighContrast));
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        assert!(Cli::try_parse_from(["info-popup", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_no_mouse_flag() {
        let cli = Cli::parse_from(["info-popup", "--no-mouse"]);
        assert!(cli.no_mouse);
    }
}
