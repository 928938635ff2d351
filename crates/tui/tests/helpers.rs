//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard and mouse input and a
//! harness that renders the application into an in-memory terminal.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use info_popup::app::App;
use info_popup_config::PopupConfig;
use ratatui::{Terminal, backend::TestBackend};
use std::time::{Duration, Instant};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create a left click at the given cell.
pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// An `App` wired to a `TestBackend` terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, &PopupConfig::default())
    }

    pub fn with_config(width: u16, height: u16, config: &PopupConfig) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self {
            app: App::new(config),
            terminal,
        }
    }

    /// Run one render pass.
    pub fn render(&mut self) {
        let app = &mut self.app;
        self.terminal
            .draw(|f| app.render(f))
            .expect("Failed to render");
    }

    /// Fire every timer that would be due after `after`.
    pub fn tick_after(&mut self, after: Duration) {
        self.app.tick_at(Instant::now() + after);
    }

    /// Render the current frame and return it as text.
    pub fn render_to_string(&mut self) -> String {
        self.render();
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string for assertions.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
