//! The info popup façade.
//!
//! Responsibilities:
//! - Expose `display`, `use_icon`, `displayed_text`, `show` and `hide`.
//! - Route host events (ticks, render passes, display resizes) to the positioner.
//! - Compute the on-screen rectangle for the current placement.
//!
//! Does NOT handle:
//! - Drawing (see `render.rs`).
//! - Owning the single instance (see `App`).
//!
//! Invariants:
//! - Text and icon are updated and the popup is shown before any positioning starts.
//! - Hiding never touches text, icon or placement.

use info_popup_config::PopupStyle;
use ratatui::layout::{Position, Rect, Size};
use std::time::{Duration, Instant};

use super::content::ContentSlot;
use super::error::PopupError;
use super::icon::Icon;
use super::placement::Offset;
use super::positioner::{PlacementMode, PopupPhase, Positioner};
use crate::ui::canvas::{BoundsSource, Canvas, FrameEvents, WidgetId};

/// Overlay that shows a short message, optionally with an icon, either
/// centered on the display or next to another widget.
#[derive(Debug)]
pub struct InfoPopup {
    id: WidgetId,
    content: ContentSlot,
    visible: bool,
    style: PopupStyle,
    positioner: Positioner,
}

impl InfoPopup {
    /// Build the popup and register it on `canvas`.
    ///
    /// The popup starts hidden and centers itself the first time it appears.
    pub fn new(canvas: &mut Canvas, style: PopupStyle, center_delay: Duration) -> Self {
        let id = canvas.add_widget();
        Self {
            id,
            content: ContentSlot::new(),
            visible: false,
            style,
            positioner: Positioner::new(id, center_delay),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn style(&self) -> &PopupStyle {
        &self.style
    }

    /// Show `text`, centered or next to `anchor`.
    ///
    /// Empty text hides the popup and leaves everything else untouched.
    /// Centering waits for the configured delay so the popup can be
    /// measured by a render pass first; anchoring happens immediately when
    /// the anchor is visible and otherwise on its next appearance.
    pub fn display(
        &mut self,
        text: &str,
        anchor: Option<WidgetId>,
        bounds: &dyn BoundsSource,
    ) -> &mut Self {
        if text.is_empty() {
            return self.hide();
        }

        self.content.set_text(text);
        self.show();

        match anchor {
            Some(anchor) => self.positioner.request_anchor(anchor, self.visible, bounds),
            None => self.positioner.request_center(Instant::now()),
        }
        self
    }

    /// Show the icon registered under `alias` next to the text.
    ///
    /// An unknown alias leaves the current icon unchanged.
    pub fn use_icon(&mut self, alias: &str) -> Result<&mut Self, PopupError> {
        let icon = Icon::from_alias(alias)?;
        self.content.set_icon(icon);
        Ok(self)
    }

    pub fn displayed_text(&self) -> &str {
        self.content.text()
    }

    pub fn icon(&self) -> Option<Icon> {
        self.content.icon()
    }

    pub fn show(&mut self) -> &mut Self {
        if !self.visible {
            tracing::debug!("Info popup shown");
        }
        self.visible = true;
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        if self.visible {
            tracing::debug!("Info popup hidden");
        }
        self.visible = false;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Widget the popup is currently placed next to, if any.
    pub fn anchor(&self) -> Option<WidgetId> {
        match self.positioner.mode() {
            PlacementMode::Anchored(anchor) => Some(anchor),
            PlacementMode::Centered => None,
        }
    }

    /// Margin applied in centered mode; zero in anchored mode.
    pub fn offset(&self) -> Offset {
        self.positioner.offset()
    }

    /// Top-left corner chosen by the last anchored placement.
    pub fn anchored_position(&self) -> Option<Position> {
        self.positioner.anchored_at()
    }

    pub fn phase(&self) -> PopupPhase {
        self.positioner.phase(self.visible)
    }

    /// Number of deferred placements waiting for `id` to become visible.
    pub fn pending_for(&self, id: WidgetId) -> usize {
        self.positioner.pending_for(id)
    }

    /// Outer size the popup wants on a display of size `display`.
    pub fn preferred_size(&self, display: Size) -> Size {
        self.content.preferred_size(&self.style, display)
    }

    /// Text lines as laid out on a display of size `display`.
    pub fn lines(&self, display: Size) -> Vec<String> {
        self.content.lines(&self.style, display)
    }

    /// Screen rectangle for the current placement, or `None` while hidden.
    ///
    /// Placement that is still pending draws at the top-left corner.
    pub fn rect(&self, area: Rect) -> Option<Rect> {
        if !self.visible {
            return None;
        }

        let size = self.preferred_size(area.as_size());
        let (x, y) = match self.positioner.mode() {
            PlacementMode::Centered => {
                let offset = self.positioner.offset();
                (offset.left.max(0) as u16, offset.top.max(0) as u16)
            }
            PlacementMode::Anchored(_) => self
                .positioner
                .anchored_at()
                .map_or((0, 0), |pos| (pos.x, pos.y)),
        };

        let x = x.min(area.width.saturating_sub(size.width));
        let y = y.min(area.height.saturating_sub(size.height));
        Some(Rect::new(area.x + x, area.y + y, size.width, size.height).intersection(area))
    }

    /// Fire the delayed centering pass once it is due.
    pub fn on_tick(&mut self, now: Instant, bounds: &dyn BoundsSource) {
        self.positioner.tick(now, self.visible, bounds);
    }

    /// Feed the visibility transitions of a completed render pass.
    pub fn on_frame(&mut self, events: &FrameEvents, bounds: &dyn BoundsSource) {
        for id in &events.appeared {
            self.positioner.notify_visible(*id, self.visible, bounds);
            self.positioner.refresh(*id, self.visible, bounds);
        }
        for id in &events.resized {
            self.positioner.refresh(*id, self.visible, bounds);
        }
    }

    /// Recompute the placement after the display surface changed size.
    ///
    /// The popup's width depends on the display width, so placement uses
    /// the size it will be drawn at on the new surface rather than the
    /// size measured in the last pass.
    pub fn on_display_resized(&mut self, bounds: &dyn BoundsSource) {
        let projected = ProjectedBounds {
            inner: bounds,
            popup: self.id,
            size: self.preferred_size(bounds.display_size()),
        };
        self.positioner.display_resized(self.visible, &projected);
    }

    /// Hide the popup and drop its content and all pending positioning work.
    pub fn teardown(&mut self) {
        self.hide();
        self.content.clear();
        self.positioner.reset();
        tracing::info!("Info popup torn down");
    }
}

/// Bounds where the popup, once measurable, reports its upcoming size.
struct ProjectedBounds<'a> {
    inner: &'a dyn BoundsSource,
    popup: WidgetId,
    size: Size,
}

impl BoundsSource for ProjectedBounds<'_> {
    fn bounds(&self, id: WidgetId) -> Option<Size> {
        let measured = self.inner.bounds(id)?;
        Some(if id == self.popup { self.size } else { measured })
    }

    fn widget_rect(&self, id: WidgetId) -> Option<Rect> {
        self.inner.widget_rect(id)
    }

    fn is_visible(&self, id: WidgetId) -> bool {
        self.inner.is_visible(id)
    }

    fn display_size(&self) -> Size {
        self.inner.display_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popup() -> (Canvas, InfoPopup) {
        let mut canvas = Canvas::new();
        let popup = InfoPopup::new(&mut canvas, PopupStyle::default(), Duration::ZERO);
        (canvas, popup)
    }

    #[test]
    fn test_new_popup_is_hidden_and_empty() {
        let (_canvas, popup) = popup();
        assert!(!popup.is_visible());
        assert_eq!(popup.displayed_text(), "");
        assert_eq!(popup.phase(), PopupPhase::Hidden);
        assert_eq!(popup.rect(Rect::new(0, 0, 80, 24)), None);
    }

    #[test]
    fn test_display_sets_text_and_shows() {
        let (canvas, mut popup) = popup();
        popup.display("hello", None, &canvas);
        assert_eq!(popup.displayed_text(), "hello");
        assert!(popup.is_visible());
        assert_eq!(popup.phase(), PopupPhase::PendingCenter);
    }

    #[test]
    fn test_display_empty_hides_without_touching_content() {
        let (canvas, mut popup) = popup();
        popup.use_icon("info").unwrap();
        popup.display("hello", None, &canvas);
        popup.display("", None, &canvas);
        assert!(!popup.is_visible());
        assert_eq!(popup.displayed_text(), "hello");
        assert_eq!(popup.icon(), Some(Icon::Info));
    }

    #[test]
    fn test_methods_chain() {
        let (canvas, mut popup) = popup();
        popup
            .use_icon("waiting")
            .unwrap()
            .display("Loading…", None, &canvas)
            .hide()
            .show();
        assert!(popup.is_visible());
        assert_eq!(popup.icon(), Some(Icon::Waiting));
    }

    #[test]
    fn test_invalid_icon_keeps_previous_icon() {
        let (_canvas, mut popup) = popup();
        popup.use_icon("info").unwrap();
        let err = popup.use_icon("bogus").unwrap_err();
        assert_eq!(
            err,
            PopupError::InvalidIconAlias {
                alias: "bogus".to_string()
            }
        );
        assert_eq!(popup.icon(), Some(Icon::Info));
    }

    #[test]
    fn test_rect_is_clamped_into_area() {
        let (canvas, mut popup) = popup();
        popup.display("hello", None, &canvas);
        let area = Rect::new(0, 0, 10, 2);
        let rect = popup.rect(area).unwrap();
        assert!(area.contains(rect.as_position()));
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
    }

    #[test]
    fn test_display_resize_centers_on_the_new_width() {
        let (mut canvas, mut popup) = popup();
        popup.display(&"word ".repeat(40), None, &canvas);

        canvas.begin_frame(Rect::new(0, 0, 80, 24));
        let rect = popup.rect(canvas.area()).unwrap();
        canvas.layout(popup.id(), rect);
        let events = canvas.end_frame();
        popup.on_frame(&events, &canvas);
        assert_eq!(rect.as_size(), Size::new(48, 7));

        canvas.resize(100, 30);
        popup.on_display_resized(&canvas);

        let upcoming = popup.preferred_size(Size::new(100, 30));
        assert_eq!(upcoming, Size::new(58, 6));
        assert_eq!(popup.offset(), Offset { top: 12, left: 21 });
    }

    #[test]
    fn test_display_resize_keeps_unmeasured_popup_pending() {
        let (mut canvas, mut popup) = popup();
        popup.display("hello", None, &canvas);
        canvas.resize(100, 30);
        popup.on_display_resized(&canvas);
        assert_eq!(popup.phase(), PopupPhase::PendingCenter);
    }

    #[test]
    fn test_teardown_clears_everything() {
        let (canvas, mut popup) = popup();
        popup.use_icon("info").unwrap();
        popup.display("bye", None, &canvas);
        popup.teardown();
        assert!(!popup.is_visible());
        assert_eq!(popup.displayed_text(), "");
        assert_eq!(popup.icon(), None);
        assert_eq!(popup.pending_for(popup.id()), 0);
    }
}
