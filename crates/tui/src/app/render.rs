//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the host layout (header, anchor buttons, details panel, footer)
//! - Record every drawn widget on the canvas
//! - Render the popup last and feed the pass's visibility events back to it
//!
//! Non-responsibilities:
//! - Does NOT handle input

use crate::app::{App, BUTTON_ROW_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, KEY_HELP};
use crate::ui::popup::render_popup;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        self.last_area = area;
        self.canvas.begin_frame(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(BUTTON_ROW_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let header = Paragraph::new(Line::from(Span::styled(
            "Info Popup",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(header, chunks[0]);

        let button_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, self.buttons.len().max(1) as u32);
                self.buttons.len()
            ])
            .split(chunks[1]);
        for (index, (button, rect)) in self.buttons.iter().zip(button_areas.iter()).enumerate() {
            let label = Paragraph::new(format!("{} {}", index + 1, button.label))
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.text))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(label, *rect);
            self.canvas.layout(button.id, *rect);
        }

        if self.details_open {
            let details = Paragraph::new(
                "Selected package: tui-overlay\nVersion 1.2.0\nOne overlay, reused for every message.",
            )
            .style(Style::default().fg(self.theme.text))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Details").borders(Borders::ALL));
            f.render_widget(details, chunks[2]);
            self.canvas.layout(self.details, chunks[2]);
        }

        let footer_text = match &self.status {
            Some(status) => Line::from(Span::styled(
                status.as_str(),
                Style::default().fg(ratatui::style::Color::Red),
            )),
            None => Line::from(Span::styled(
                KEY_HELP,
                Style::default().fg(self.theme.text_dim),
            )),
        };
        let footer = Paragraph::new(footer_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(footer, chunks[3]);

        render_popup(f, &self.popup, &mut self.canvas, &self.theme);

        let events = self.canvas.end_frame();
        if !events.is_empty() {
            self.popup.on_frame(&events, &self.canvas);
        }
    }
}
