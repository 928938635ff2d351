//! Action enum for the TUI event system.
//!
//! Actions carry both raw user input and the popup operations it maps to.
//! `App::update` is the only place actions are applied.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::ui::canvas::WidgetId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw key press from the terminal.
    Input(KeyEvent),
    /// Raw mouse event from the terminal.
    Mouse(MouseEvent),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
    /// Periodic tick driving deferred work.
    Tick,
    /// Show `text` centered, or next to `anchor` when given. Empty text hides.
    Display {
        text: String,
        anchor: Option<WidgetId>,
    },
    /// Switch the popup icon by alias.
    UseIcon(String),
    /// Hide the popup.
    Hide,
    /// Open or close the details panel.
    ToggleDetails,
    Quit,
}

impl Action {
    /// Whether losing this action under backpressure would drop user intent.
    pub fn is_critical(&self) -> bool {
        !matches!(self, Self::Mouse(_) | Self::Tick)
    }
}
