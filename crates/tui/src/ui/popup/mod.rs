//! The info popup: a single overlay that shows short informational text.
//!
//! The popup is either centered on the display surface or placed next to
//! an anchor widget. Positioning waits for the popup, or the anchor, to be
//! drawn and measured at least once; see `positioner` for the rules.

mod content;
mod error;
mod icon;
mod info_popup;
mod placement;
mod positioner;
mod render;

pub use content::{ContentSlot, wrap_text};
pub use error::PopupError;
pub use icon::Icon;
pub use info_popup::InfoPopup;
pub use placement::{Offset, centered_offset, place_adjacent};
pub use positioner::{PlacementMode, PopupPhase, Positioner};
pub use render::render_popup;
