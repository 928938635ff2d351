//! Layout record for one render pass and the bounds queries built on it.
//!
//! Responsibilities:
//! - Hand out widget identities.
//! - Record where each widget was drawn during a render pass.
//! - Answer bounds and visibility queries from the last completed pass.
//! - Report which widgets appeared or changed size between passes.
//!
//! Does NOT handle:
//! - Drawing (callers draw into the ratatui `Frame` themselves).
//! - Popup positioning (see `ui::popup::positioner`).
//!
//! Invariants:
//! - A widget is visible exactly when it was laid out in the last completed pass.
//! - Bounds are unmeasurable (`None`) for hidden widgets and zero-area rectangles.
//! - Queries made while a pass is in progress see the previous pass.

use ratatui::layout::{Rect, Size};
use std::collections::BTreeMap;

/// Opaque identity of a widget on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

/// Measurement queries the popup positioner needs from its host.
pub trait BoundsSource {
    /// Measured size of a widget, or `None` while it is not measurable.
    fn bounds(&self, id: WidgetId) -> Option<Size>;

    /// Screen rectangle of a widget, or `None` while it is hidden.
    fn widget_rect(&self, id: WidgetId) -> Option<Rect>;

    /// Whether the widget is currently visible.
    fn is_visible(&self, id: WidgetId) -> bool {
        self.widget_rect(id).is_some()
    }

    /// Total size of the display surface.
    fn display_size(&self) -> Size;
}

/// Visibility and size transitions produced by one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// Widgets drawn in this pass that were not drawn in the previous one.
    pub appeared: Vec<WidgetId>,
    /// Widgets drawn in both passes whose size changed.
    pub resized: Vec<WidgetId>,
}

impl FrameEvents {
    pub fn is_empty(&self) -> bool {
        self.appeared.is_empty() && self.resized.is_empty()
    }
}

/// The display surface and the widgets drawn on it.
#[derive(Debug, Default)]
pub struct Canvas {
    area: Rect,
    next_id: u64,
    laid_out: BTreeMap<WidgetId, Rect>,
    in_progress: Option<BTreeMap<WidgetId, Rect>>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new widget identity.
    pub fn add_widget(&mut self) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Update the display surface ahead of the next render pass.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Start a render pass over `area`.
    pub fn begin_frame(&mut self, area: Rect) {
        self.area = area;
        self.in_progress = Some(BTreeMap::new());
    }

    /// Record that `id` was drawn at `rect` during the current pass.
    pub fn layout(&mut self, id: WidgetId, rect: Rect) {
        self.in_progress
            .get_or_insert_with(BTreeMap::new)
            .insert(id, rect);
    }

    /// Finish the current pass and report what changed since the previous one.
    pub fn end_frame(&mut self) -> FrameEvents {
        let current = self.in_progress.take().unwrap_or_default();
        let mut events = FrameEvents::default();

        for (id, rect) in &current {
            match self.laid_out.get(id) {
                None => events.appeared.push(*id),
                Some(previous) if previous.as_size() != rect.as_size() => {
                    events.resized.push(*id)
                }
                Some(_) => {}
            }
        }

        self.laid_out = current;
        events
    }
}

impl BoundsSource for Canvas {
    fn bounds(&self, id: WidgetId) -> Option<Size> {
        self.laid_out
            .get(&id)
            .filter(|rect| !rect.is_empty())
            .map(|rect| rect.as_size())
    }

    fn widget_rect(&self, id: WidgetId) -> Option<Rect> {
        self.laid_out.get(&id).copied()
    }

    fn display_size(&self) -> Size {
        self.area.as_size()
    }
}
