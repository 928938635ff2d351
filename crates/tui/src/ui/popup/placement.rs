//! Geometry for the two placement modes.
//!
//! Both functions are pure: identical inputs always give identical results.

use ratatui::layout::{Position, Rect, Size};

/// Margin that places the popup in the middle of the display surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub top: i32,
    pub left: i32,
}

impl Offset {
    pub const ZERO: Self = Self { top: 0, left: 0 };
}

/// Half of `diff`, rounding halves toward positive infinity.
fn half_rounded(diff: i32) -> i32 {
    diff.div_euclid(2) + diff.rem_euclid(2)
}

/// Offset that centers a box of size `popup` on a display of size `display`.
///
/// `top = round((H - h) / 2)`, `left = round((W - w) / 2)`. A box larger
/// than the display yields a negative offset.
pub fn centered_offset(display: Size, popup: Size) -> Offset {
    Offset {
        top: half_rounded(display.height as i32 - popup.height as i32),
        left: half_rounded(display.width as i32 - popup.width as i32),
    }
}

/// Top-left corner for a popup placed flush against `anchor`.
///
/// Prefers directly below the anchor with left edges aligned. When the
/// popup size is known and it would run off the bottom while fitting
/// above, it flips above the anchor. A known width is also pulled back
/// from the right edge.
pub fn place_adjacent(anchor: Rect, popup: Option<Size>, display: Size) -> Position {
    let below = Position::new(anchor.x, anchor.bottom());

    let Some(size) = popup else {
        return below;
    };

    let overflows_bottom = below.y as u32 + size.height as u32 > display.height as u32;
    let y = if overflows_bottom && anchor.y >= size.height {
        anchor.y - size.height
    } else {
        below.y
    };
    let x = anchor.x.min(display.width.saturating_sub(size.width));

    Position::new(x, y)
}
