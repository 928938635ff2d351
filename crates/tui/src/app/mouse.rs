//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Anchor the popup to whichever widget was clicked
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI

use crate::action::Action;
use crate::app::{App, DETAILS_MESSAGE};
use crate::ui::canvas::BoundsSource;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let at = Position::new(mouse.column, mouse.row);
        let hit = |id| {
            self.canvas
                .widget_rect(id)
                .is_some_and(|rect| rect.contains(at))
        };

        if let Some(button) = self.buttons.iter().find(|b| hit(b.id)) {
            return Some(Action::Display {
                text: button.message.to_string(),
                anchor: Some(button.id),
            });
        }
        if hit(self.details) {
            return Some(Action::Display {
                text: DETAILS_MESSAGE.to_string(),
                anchor: Some(self.details),
            });
        }
        None
    }
}
