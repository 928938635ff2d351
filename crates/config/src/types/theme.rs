//! Theme types for the info popup.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//!
//! Does NOT handle:
//! - Actual rendering (see the `info-popup` crate).
//! - Popup geometry (see `style.rs`).
//!
//! Invariants:
//! - `ColorTheme` is the selectable representation; `Theme` is the runtime representation.
//! - `ColorTheme` parsing ignores case and treats `-` and `_` alike.

use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Default,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "default" => Ok(Self::Default),
            "dark" => Ok(Self::Dark),
            "high_contrast" => Ok(Self::HighContrast),
            "monochrome" => Ok(Self::Monochrome),
            other => Err(format!(
                "unknown theme '{other}' (expected default, dark, high_contrast or monochrome)"
            )),
        }
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Host surface
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,

    // Popup
    pub popup_background: Color,
    pub popup_text: Color,
    pub popup_border: Color,
    pub icon_waiting: Color,
    pub icon_info: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Reset,
                text: Color::White,
                text_dim: Color::Gray,
                accent: Color::Cyan,

                popup_background: Color::Rgb(0xf0, 0xf0, 0xf0),
                popup_text: Color::Black,
                popup_border: Color::DarkGray,
                icon_waiting: Color::Rgb(0xb3, 0x6b, 0x00),
                icon_info: Color::Blue,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::Gray,
                text_dim: Color::DarkGray,
                accent: Color::LightBlue,

                popup_background: Color::Rgb(0x30, 0x30, 0x30),
                popup_text: Color::White,
                popup_border: Color::Gray,
                icon_waiting: Color::Yellow,
                icon_info: Color::LightCyan,
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                accent: Color::Yellow,

                popup_background: Color::Black,
                popup_text: Color::White,
                popup_border: Color::Yellow,
                icon_waiting: Color::Yellow,
                icon_info: Color::White,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Reset,
                text: Color::Reset,
                text_dim: Color::Reset,
                accent: Color::Reset,

                popup_background: Color::Reset,
                popup_text: Color::Reset,
                popup_border: Color::Reset,
                icon_waiting: Color::Reset,
                icon_info: Color::Reset,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
