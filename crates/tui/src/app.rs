//! Application state and rendering.
//!
//! The `App` is the application-level context that owns the one and only
//! `InfoPopup`, the canvas it is measured on, and a small host surface with
//! anchor widgets to place the popup next to.
//!
//! The module is organized into submodules:
//! - `actions`: Action handling
//! - `mouse`: Mouse event handling
//! - `render`: Rendering logic

mod actions;
mod mouse;
mod render;

use crate::action::Action;
use crate::ui::canvas::{Canvas, WidgetId};
use crate::ui::popup::InfoPopup;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use info_popup_config::{PopupConfig, Theme};
use ratatui::layout::Rect;

/// Height of the header area.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area.
pub const FOOTER_HEIGHT: u16 = 3;

/// Height of the anchor button row.
pub const BUTTON_ROW_HEIGHT: u16 = 3;

/// Text shown when the popup is centered from the keyboard.
pub const CENTERED_MESSAGE: &str = "Package index is up to date.";

/// Text shown when the popup is placed next to the details panel.
pub const DETAILS_MESSAGE: &str = "Pinned to the details panel.";

/// A labelled widget the popup can be anchored to.
#[derive(Debug, Clone)]
pub struct AnchorButton {
    pub id: WidgetId,
    pub label: &'static str,
    pub message: &'static str,
}

/// Main application state.
pub struct App {
    pub canvas: Canvas,
    pub popup: InfoPopup,
    pub theme: Theme,
    pub buttons: Vec<AnchorButton>,
    /// Panel that can be closed, so anchoring to it may have to wait.
    pub details: WidgetId,
    pub details_open: bool,
    /// Last error reported to the user, shown in the footer.
    pub status: Option<String>,
    pub last_area: Rect,
    pub running: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&PopupConfig::default())
    }
}

impl App {
    /// Create the application context and its single popup.
    pub fn new(config: &PopupConfig) -> Self {
        let mut canvas = Canvas::new();
        let popup = InfoPopup::new(&mut canvas, config.style, config.center_delay);

        let buttons = [
            ("Packages", "Browse the package catalog."),
            ("Search", "Type to filter packages by name."),
            ("About", "Info popup demo, press ? for keys."),
        ]
        .into_iter()
        .map(|(label, message)| AnchorButton {
            id: canvas.add_widget(),
            label,
            message,
        })
        .collect();
        let details = canvas.add_widget();

        Self {
            canvas,
            popup,
            theme: Theme::from_color_theme(config.theme),
            buttons,
            details,
            details_open: false,
            status: None,
            last_area: Rect::default(),
            running: true,
        }
    }

    /// Map a key press to an action.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc | KeyCode::Char('h') => Some(Action::Hide),
            KeyCode::Char('c') => Some(Action::Display {
                text: CENTERED_MESSAGE.to_string(),
                anchor: None,
            }),
            KeyCode::Char('?') => Some(Action::Display {
                text: KEY_HELP.to_string(),
                anchor: None,
            }),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.buttons.get(index).map(|button| Action::Display {
                    text: button.message.to_string(),
                    anchor: Some(button.id),
                })
            }
            KeyCode::Char('d') => Some(Action::ToggleDetails),
            KeyCode::Char('p') => Some(Action::Display {
                text: DETAILS_MESSAGE.to_string(),
                anchor: Some(self.details),
            }),
            KeyCode::Char('w') => Some(Action::UseIcon("waiting".to_string())),
            KeyCode::Char('i') => Some(Action::UseIcon("info".to_string())),
            _ => None,
        }
    }

    /// Tear the popup down before the application exits.
    pub fn shutdown(&mut self) {
        self.popup.teardown();
        self.running = false;
    }
}

/// Key reference shown by `?`.
pub const KEY_HELP: &str = "c center · 1-3 anchor to button · d toggle details · \
p anchor to details · w/i waiting/info icon · h hide · q quit";
