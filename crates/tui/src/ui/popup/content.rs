//! Text and icon shown inside the popup, and the size they need.

use info_popup_config::PopupStyle;
use ratatui::layout::Size;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::icon::Icon;

/// The popup's single child element: a message with an optional icon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSlot {
    text: String,
    icon: Option<Icon>,
}

impl ContentSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = Some(icon);
    }

    /// Drop text and icon.
    pub fn clear(&mut self) {
        self.text.clear();
        self.icon = None;
    }

    /// Columns reserved in front of every text line for the icon and its gap.
    pub fn icon_columns(&self) -> u16 {
        self.icon
            .map_or(0, |icon| UnicodeWidthStr::width(icon.glyph()) as u16 + 1)
    }

    /// Text wrapped to the inner width available on a display of `display` size.
    pub fn lines(&self, style: &PopupStyle, display: Size) -> Vec<String> {
        let text_width = style
            .max_width(display.width)
            .saturating_sub(style.decorator.frame_cells())
            .saturating_sub(style.padding.saturating_mul(2))
            .saturating_sub(self.icon_columns());
        wrap_text(&self.text, text_width.max(1) as usize)
    }

    /// Outer size of the popup, border and padding included.
    ///
    /// Never smaller than the style's minimum and never larger than the display.
    pub fn preferred_size(&self, style: &PopupStyle, display: Size) -> Size {
        let lines = self.lines(style, display);
        let text_width = lines
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .max()
            .unwrap_or(0);
        let text_height = lines.len().max(1);

        let frame = style.decorator.frame_cells();
        let width = u16::try_from(text_width)
            .unwrap_or(u16::MAX)
            .saturating_add(self.icon_columns())
            .saturating_add(style.padding.saturating_mul(2))
            .saturating_add(frame)
            .max(style.min_width)
            .min(style.max_width(display.width));
        let height = u16::try_from(text_height)
            .unwrap_or(u16::MAX)
            .saturating_add(frame)
            .max(style.min_height)
            .min(display.height);

        Size::new(width, height)
    }
}

/// Word-wrap `text` to `width` columns.
///
/// Explicit newlines start new lines. Words wider than `width` are split
/// at character boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + ch_width > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        let lines = wrap_text("first\n\nthird", 20);
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_empty_text_wraps_to_nothing() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_preferred_size_respects_minimum() {
        let mut slot = ContentSlot::new();
        slot.set_text("hi");
        let style = PopupStyle::default();
        let size = slot.preferred_size(&style, Size::new(80, 24));
        assert_eq!(size, Size::new(style.min_width, style.min_height));
    }

    #[test]
    fn test_preferred_size_grows_with_text() {
        let mut slot = ContentSlot::new();
        slot.set_text("a".repeat(30));
        let style = PopupStyle::default();
        // 30 text + 2 padding + 2 border
        assert_eq!(slot.preferred_size(&style, Size::new(80, 24)), Size::new(34, 3));
    }

    #[test]
    fn test_preferred_size_wraps_at_max_width() {
        let mut slot = ContentSlot::new();
        slot.set_text("word ".repeat(40));
        let style = PopupStyle::default();
        let size = slot.preferred_size(&style, Size::new(80, 24));
        assert_eq!(size.width, style.max_width(80));
        assert!(size.height > 3);
    }

    #[test]
    fn test_preferred_size_clamps_huge_line_counts_to_display() {
        let style = PopupStyle::default();
        for count in [65_535, 65_536, 65_537] {
            let mut slot = ContentSlot::new();
            slot.set_text("x\n".repeat(count));
            let size = slot.preferred_size(&style, Size::new(80, 24));
            assert_eq!(size.height, 24, "{count} lines");
            assert_eq!(size.width, style.min_width);
        }
    }

    #[test]
    fn test_icon_reserves_columns() {
        let mut slot = ContentSlot::new();
        slot.set_text("a".repeat(30));
        slot.set_icon(Icon::Info);
        let style = PopupStyle::default();
        let with_icon = slot.preferred_size(&style, Size::new(80, 24));
        assert_eq!(with_icon.width, 34 + slot.icon_columns());
    }

    #[test]
    fn test_clear_drops_text_and_icon() {
        let mut slot = ContentSlot::new();
        slot.set_text("x");
        slot.set_icon(Icon::Waiting);
        slot.clear();
        assert_eq!(slot, ContentSlot::new());
    }
}
