//! Construction-time popup style.
//!
//! The popup is built once per process, so its style is fixed at
//! construction and never changed afterwards.

use ratatui::widgets::{BorderType, Borders};

use crate::constants::{
    DEFAULT_POPUP_MAX_WIDTH_PERCENT, DEFAULT_POPUP_MIN_HEIGHT, DEFAULT_POPUP_MIN_WIDTH,
    DEFAULT_POPUP_PADDING,
};

/// Frame drawn around the popup content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decorator {
    /// Rounded border on all sides, the window-like look.
    #[default]
    Window,
    /// Plain single-line border on all sides.
    Plain,
    /// No border.
    None,
}

impl Decorator {
    pub fn borders(self) -> Borders {
        match self {
            Self::Window | Self::Plain => Borders::ALL,
            Self::None => Borders::NONE,
        }
    }

    pub fn border_type(self) -> BorderType {
        match self {
            Self::Window => BorderType::Rounded,
            Self::Plain | Self::None => BorderType::Plain,
        }
    }

    /// Cells consumed by the border on each axis (left + right, top + bottom).
    pub fn frame_cells(self) -> u16 {
        match self {
            Self::Window | Self::Plain => 2,
            Self::None => 0,
        }
    }
}

/// Fixed geometry and behavior of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupStyle {
    pub decorator: Decorator,
    /// Minimum outer width, border included.
    pub min_width: u16,
    /// Minimum outer height, border included.
    pub min_height: u16,
    /// Horizontal padding inside the border.
    pub padding: u16,
    /// Upper bound for the outer width relative to the display width.
    pub max_width_percent: u16,
    /// The popup never hides itself on outside interaction.
    pub auto_hide: bool,
}

impl PopupStyle {
    /// Widest the popup may grow on a display of `display_width` cells.
    pub fn max_width(&self, display_width: u16) -> u16 {
        let percent = self.max_width_percent.clamp(1, 100) as u32;
        let limit = (display_width as u32 * percent / 100) as u16;
        limit.max(self.min_width).min(display_width.max(1))
    }
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            decorator: Decorator::Window,
            min_width: DEFAULT_POPUP_MIN_WIDTH,
            min_height: DEFAULT_POPUP_MIN_HEIGHT,
            padding: DEFAULT_POPUP_PADDING,
            max_width_percent: DEFAULT_POPUP_MAX_WIDTH_PERCENT,
            auto_hide: false,
        }
    }
}
