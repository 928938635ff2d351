//! Info Popup Library
//!
//! A single reusable overlay that shows short informational text,
//! optionally with an icon, either centered on the terminal or placed next
//! to another widget. Positioning waits until the popup, or its anchor,
//! has been drawn and measured.
//!
//! # Example
//!
//! ```rust
//! use info_popup::ui::canvas::Canvas;
//! use info_popup::ui::popup::{InfoPopup, PopupPhase};
//! use info_popup_config::PopupStyle;
//! use std::time::Duration;
//!
//! let mut canvas = Canvas::new();
//! let mut popup = InfoPopup::new(&mut canvas, PopupStyle::default(), Duration::from_millis(100));
//! popup.use_icon("info")?.display("Saved.", None, &canvas);
//! assert_eq!(popup.displayed_text(), "Saved.");
//! assert_eq!(popup.phase(), PopupPhase::PendingCenter);
//! # Ok::<(), info_popup::ui::popup::PopupError>(())
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use ui::canvas::{BoundsSource, Canvas, FrameEvents, WidgetId};
pub use ui::popup::{Icon, InfoPopup, PopupError, PopupPhase};
