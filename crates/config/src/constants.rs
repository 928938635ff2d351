//! Centralized constants for the info popup workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication. All sizes are in terminal cells.

// =============================================================================
// Positioning Defaults
// =============================================================================

/// Delay between showing the popup and the first centering pass, in milliseconds.
///
/// Gives the render loop one pass to measure the popup before it is centered.
pub const DEFAULT_CENTER_DELAY_MS: u64 = 100;

/// Maximum accepted centering delay in milliseconds.
pub const MAX_CENTER_DELAY_MS: u64 = 10_000;

// =============================================================================
// Popup Geometry Defaults
// =============================================================================

/// Minimum popup width, including the border.
pub const DEFAULT_POPUP_MIN_WIDTH: u16 = 20;

/// Minimum popup height, including the border.
pub const DEFAULT_POPUP_MIN_HEIGHT: u16 = 3;

/// Inner horizontal padding between border and content.
pub const DEFAULT_POPUP_PADDING: u16 = 1;

/// Maximum popup width as a percentage of the display width.
pub const DEFAULT_POPUP_MAX_WIDTH_PERCENT: u16 = 60;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
///
/// Kept below [`DEFAULT_CENTER_DELAY_MS`] so the deferred centering pass
/// fires close to its deadline.
pub const DEFAULT_UI_TICK_MS: u64 = 50;

/// Minimum accepted UI tick interval in milliseconds.
pub const MIN_UI_TICK_MS: u64 = 10;

/// Maximum accepted UI tick interval in milliseconds.
pub const MAX_UI_TICK_MS: u64 = 1_000;

// =============================================================================
// Environment Variables
// =============================================================================

/// Selects the color theme (`default`, `dark`, `high_contrast`, `monochrome`).
pub const ENV_THEME: &str = "INFO_POPUP_THEME";

/// Overrides [`DEFAULT_CENTER_DELAY_MS`].
pub const ENV_CENTER_DELAY_MS: &str = "INFO_POPUP_CENTER_DELAY_MS";

/// Overrides [`DEFAULT_UI_TICK_MS`].
pub const ENV_TICK_MS: &str = "INFO_POPUP_TICK_MS";

/// When set to any non-empty value, `.env` loading is skipped.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
