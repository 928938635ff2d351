//! Configuration types shared by the popup widget and its host.

mod style;
mod theme;

pub use style::{Decorator, PopupStyle};
pub use theme::{ColorTheme, Theme};

use std::time::Duration;

use crate::constants::{DEFAULT_CENTER_DELAY_MS, DEFAULT_UI_TICK_MS};

/// Fully resolved configuration for one application run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupConfig {
    pub theme: ColorTheme,
    pub style: PopupStyle,
    /// Delay between showing the popup and its first centering pass.
    pub center_delay: Duration,
    /// Interval of the UI tick that drives deferred work.
    pub tick_interval: Duration,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            style: PopupStyle::default(),
            center_delay: Duration::from_millis(DEFAULT_CENTER_DELAY_MS),
            tick_interval: Duration::from_millis(DEFAULT_UI_TICK_MS),
        }
    }
}
