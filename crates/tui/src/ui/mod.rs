//! UI building blocks for the TUI.
//!
//! - `canvas`: widget identities, render-pass layout record, bounds queries
//! - `visibility`: one-shot "on next visible" registrations
//! - `popup`: the info popup itself

pub mod canvas;
pub mod popup;
pub mod visibility;
