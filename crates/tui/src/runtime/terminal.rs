//! Terminal session for the popup demo.
//!
//! Responsibilities:
//! - Switch the terminal into raw mode and the alternate screen.
//! - Optionally capture the mouse so popup clicks reach the app.
//! - Put everything back exactly once, on explicit restore or on drop.
//!
//! Invariants / Assumptions:
//! - `restore` is idempotent; a second call touches nothing.
//! - Drop never panics and ignores restore errors (it also runs while unwinding).

use std::io::{self, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Owns the raw-mode/alternate-screen session for the lifetime of the app.
#[derive(Debug)]
pub struct TerminalGuard {
    mouse_capture: bool,
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, capturing the mouse when asked.
    ///
    /// Raw mode is undone if entering the alternate screen fails.
    pub fn enter(mouse_capture: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            mouse_capture,
            active: true,
        };
        if let Err(err) = guard.enter_screen(&mut io::stdout()) {
            let _ = guard.restore();
            return Err(err);
        }
        tracing::debug!(mouse_capture, "Terminal session entered");
        Ok(guard)
    }

    /// Whether the session still needs restoring.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Leave the alternate screen and raw mode. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let raw = disable_raw_mode();
        let screen = self.leave_screen(&mut io::stdout());
        tracing::debug!("Terminal session restored");
        raw.and(screen)
    }

    fn enter_screen(&self, out: &mut impl Write) -> io::Result<()> {
        if self.mouse_capture {
            execute!(out, EnterAlternateScreen, EnableMouseCapture)
        } else {
            execute!(out, EnterAlternateScreen)
        }
    }

    fn leave_screen(&self, out: &mut impl Write) -> io::Result<()> {
        if self.mouse_capture {
            execute!(out, LeaveAlternateScreen, DisableMouseCapture)
        } else {
            execute!(out, LeaveAlternateScreen)
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
