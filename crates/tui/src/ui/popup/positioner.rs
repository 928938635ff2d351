//! Visibility-coordinated positioning of the popup.
//!
//! Responsibilities:
//! - Center the popup on the display surface once its bounds are measurable.
//! - Place the popup next to an anchor widget once the anchor is visible.
//! - Defer both through one-shot visibility continuations and a single
//!   delayed centering pass, never by waiting.
//!
//! Does NOT handle:
//! - Showing or hiding the popup (see `InfoPopup`).
//! - Drawing (see `render.rs`).
//!
//! Invariants:
//! - The mode set by the latest request wins. Continuations and timers left
//!   over from earlier requests re-check the mode and do nothing when it moved on.
//! - In anchored mode the offset is `Offset::ZERO`.
//! - Centering is idempotent: unchanged bounds give an unchanged offset.

use ratatui::layout::Position;
use std::time::{Duration, Instant};

use super::placement::{Offset, centered_offset, place_adjacent};
use crate::ui::canvas::{BoundsSource, WidgetId};
use crate::ui::visibility::OnceVisible;

/// Where the popup is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Centered on the display surface.
    Centered,
    /// Next to the given widget.
    Anchored(WidgetId),
}

/// Observable positioning state of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPhase {
    Hidden,
    /// Shown, waiting for measurable bounds before centering.
    PendingCenter,
    Centered,
    /// Shown, waiting for the anchor to become visible.
    PendingAnchor,
    Anchored,
}

/// Deferred positioning work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuation {
    Center,
    PlaceTo(WidgetId),
}

#[derive(Debug)]
pub struct Positioner {
    popup: WidgetId,
    mode: PlacementMode,
    offset: Offset,
    anchored_at: Option<Position>,
    settled: bool,
    center_delay: Duration,
    center_due: Option<Instant>,
    signals: OnceVisible<Continuation>,
}

impl Positioner {
    /// Create a positioner that centers `popup` the first time it appears.
    pub fn new(popup: WidgetId, center_delay: Duration) -> Self {
        let mut signals = OnceVisible::new();
        signals.once_visible(popup, Continuation::Center);
        Self {
            popup,
            mode: PlacementMode::Centered,
            offset: Offset::ZERO,
            anchored_at: None,
            settled: false,
            center_delay,
            center_due: None,
            signals,
        }
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Top-left corner computed by the last anchored placement.
    pub fn anchored_at(&self) -> Option<Position> {
        self.anchored_at
    }

    /// When the pending delayed centering pass is due, if any.
    pub fn center_due(&self) -> Option<Instant> {
        self.center_due
    }

    /// Number of continuations waiting for `id` to become visible.
    pub fn pending_for(&self, id: WidgetId) -> usize {
        self.signals.pending_for(id)
    }

    pub fn phase(&self, shown: bool) -> PopupPhase {
        match (shown, self.mode, self.settled) {
            (false, _, _) => PopupPhase::Hidden,
            (true, PlacementMode::Centered, false) => PopupPhase::PendingCenter,
            (true, PlacementMode::Centered, true) => PopupPhase::Centered,
            (true, PlacementMode::Anchored(_), false) => PopupPhase::PendingAnchor,
            (true, PlacementMode::Anchored(_), true) => PopupPhase::Anchored,
        }
    }

    /// Switch to centered mode and schedule a centering pass after the fixed delay.
    pub fn request_center(&mut self, now: Instant) {
        self.mode = PlacementMode::Centered;
        self.anchored_at = None;
        self.settled = false;
        self.center_due = Some(now + self.center_delay);
        tracing::debug!(delay_ms = self.center_delay.as_millis() as u64, "Centering scheduled");
    }

    /// Switch to anchored mode and place next to `anchor` now or once it is visible.
    pub fn request_anchor(&mut self, anchor: WidgetId, shown: bool, bounds: &dyn BoundsSource) {
        self.mode = PlacementMode::Anchored(anchor);
        self.offset = Offset::ZERO;
        self.anchored_at = None;
        self.settled = false;
        self.center_due = None;

        if bounds.is_visible(anchor) {
            self.place_to(anchor, shown, bounds);
        } else {
            tracing::debug!(?anchor, "Anchor not visible, deferring placement");
            self.signals
                .once_visible(anchor, Continuation::PlaceTo(anchor));
        }
    }

    /// Center the popup on the display surface.
    ///
    /// Registers a retry for the popup's next appearance when it is not
    /// visible, and does nothing while its bounds are unmeasurable.
    pub fn center(&mut self, shown: bool, bounds: &dyn BoundsSource) {
        if self.mode != PlacementMode::Centered {
            tracing::debug!(mode = ?self.mode, "Skipping stale centering request");
            return;
        }

        if !shown || !bounds.is_visible(self.popup) {
            self.signals.once_visible(self.popup, Continuation::Center);
            return;
        }

        let Some(size) = bounds.bounds(self.popup) else {
            return;
        };

        let offset = centered_offset(bounds.display_size(), size);
        if offset != self.offset || !self.settled {
            tracing::debug!(top = offset.top, left = offset.left, "Popup centered");
        }
        self.offset = offset;
        self.settled = true;
    }

    /// Place the popup flush against `anchor`.
    fn place_to(&mut self, anchor: WidgetId, shown: bool, bounds: &dyn BoundsSource) {
        if self.mode != PlacementMode::Anchored(anchor) {
            tracing::debug!(?anchor, mode = ?self.mode, "Skipping stale placement request");
            return;
        }

        let Some(rect) = bounds.widget_rect(anchor) else {
            self.signals
                .once_visible(anchor, Continuation::PlaceTo(anchor));
            return;
        };

        let popup_size = if shown {
            bounds.bounds(self.popup)
        } else {
            None
        };
        let position = place_adjacent(rect, popup_size, bounds.display_size());
        tracing::debug!(?anchor, x = position.x, y = position.y, "Popup placed next to anchor");
        self.anchored_at = Some(position);
        self.settled = true;
    }

    fn run(&mut self, continuation: Continuation, shown: bool, bounds: &dyn BoundsSource) {
        match continuation {
            Continuation::Center => self.center(shown, bounds),
            Continuation::PlaceTo(anchor) => self.place_to(anchor, shown, bounds),
        }
    }

    /// Fire the delayed centering pass once it is due.
    pub fn tick(&mut self, now: Instant, shown: bool, bounds: &dyn BoundsSource) {
        if self.center_due.is_some_and(|due| due <= now) {
            self.center_due = None;
            self.center(shown, bounds);
        }
    }

    /// Run everything that was waiting for `id` to become visible.
    pub fn notify_visible(&mut self, id: WidgetId, shown: bool, bounds: &dyn BoundsSource) {
        for continuation in self.signals.take(id) {
            self.run(continuation, shown, bounds);
        }
    }

    /// Recompute the current placement after `id` appeared or changed size.
    ///
    /// Only the popup itself matters in centered mode; in anchored mode the
    /// popup and its anchor both matter, once the first placement happened.
    pub fn refresh(&mut self, id: WidgetId, shown: bool, bounds: &dyn BoundsSource) {
        match self.mode {
            PlacementMode::Centered if id == self.popup => self.center(shown, bounds),
            PlacementMode::Anchored(anchor) if self.settled && (id == anchor || id == self.popup) => {
                self.place_to(anchor, shown, bounds)
            }
            _ => {}
        }
    }

    /// Recompute the current placement after the display surface changed size.
    pub fn display_resized(&mut self, shown: bool, bounds: &dyn BoundsSource) {
        match self.mode {
            PlacementMode::Centered if shown => self.center(shown, bounds),
            PlacementMode::Anchored(anchor) if self.settled => self.place_to(anchor, shown, bounds),
            _ => {}
        }
    }

    /// Forget every pending continuation and timer and return to centered mode.
    pub fn reset(&mut self) {
        self.signals.clear();
        self.center_due = None;
        self.mode = PlacementMode::Centered;
        self.offset = Offset::ZERO;
        self.anchored_at = None;
        self.settled = false;
    }
}
