//! Popup rendering implementation.

use info_popup_config::Theme;
use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Padding, Paragraph},
};

use super::icon::Icon;
use super::info_popup::InfoPopup;
use crate::ui::canvas::Canvas;

fn icon_style(icon: Icon, theme: &Theme) -> Style {
    match icon {
        Icon::Waiting => Style::default().fg(theme.icon_waiting),
        Icon::Info => Style::default().fg(theme.icon_info),
    }
}

/// Render the popup on top of everything drawn so far and record its bounds.
///
/// Hidden popups draw nothing and are left out of the canvas, which makes
/// them unmeasurable for the positioner.
pub fn render_popup(f: &mut Frame, popup: &InfoPopup, canvas: &mut Canvas, theme: &Theme) {
    let area = f.area();
    let Some(rect) = popup.rect(area) else {
        return;
    };
    canvas.layout(popup.id(), rect);

    let style = popup.style();
    let indent = popup
        .icon()
        .map(|icon| " ".repeat(unicode_width::UnicodeWidthStr::width(icon.glyph()) + 1))
        .unwrap_or_default();

    let lines: Vec<Line> = popup
        .lines(area.as_size())
        .into_iter()
        .enumerate()
        .map(|(i, text)| match (i, popup.icon()) {
            (0, Some(icon)) => Line::from(vec![
                Span::styled(icon.glyph(), icon_style(icon, theme)),
                Span::raw(" "),
                Span::raw(text),
            ]),
            _ => Line::from(format!("{indent}{text}")),
        })
        .collect();

    let block = Block::default()
        .borders(style.decorator.borders())
        .border_type(style.decorator.border_type())
        .border_style(Style::default().fg(theme.popup_border))
        .padding(Padding::horizontal(style.padding));

    let paragraph = Paragraph::new(lines).block(block).style(
        Style::default()
            .bg(theme.popup_background)
            .fg(theme.popup_text),
    );

    f.render_widget(Clear, rect);
    f.render_widget(paragraph, rect);
}
