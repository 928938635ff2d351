//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Configuration loading
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `info_popup::app` and `info_popup::ui`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod config;
pub mod terminal;
