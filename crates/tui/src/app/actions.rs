//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Forward popup operations to the single `InfoPopup`
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT perform async operations

use std::time::Instant;

use crate::action::Action;
use crate::app::App;

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Input(key) => {
                if let Some(action) = self.handle_input(key) {
                    self.update(action);
                }
            }
            Action::Mouse(mouse) => {
                if let Some(action) = self.handle_mouse(mouse) {
                    self.update(action);
                }
            }
            Action::Resize(width, height) => {
                self.last_area = ratatui::layout::Rect::new(0, 0, width, height);
                self.canvas.resize(width, height);
                self.popup.on_display_resized(&self.canvas);
            }
            Action::Tick => self.tick_at(Instant::now()),
            Action::Display { text, anchor } => {
                self.popup.display(&text, anchor, &self.canvas);
            }
            Action::UseIcon(alias) => match self.popup.use_icon(&alias) {
                Ok(_) => self.status = None,
                Err(e) => {
                    tracing::error!(error = %e, "Rejected icon alias");
                    self.status = Some(e.to_string());
                }
            },
            Action::Hide => {
                self.popup.hide();
            }
            Action::ToggleDetails => {
                self.details_open = !self.details_open;
                tracing::debug!(open = self.details_open, "Details panel toggled");
            }
            Action::Quit => self.running = false,
        }
    }

    /// Run deferred work that is due at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.popup.on_tick(now, &self.canvas);
    }
}
