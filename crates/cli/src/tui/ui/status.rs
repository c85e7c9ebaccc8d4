//! Status bar rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

const HINTS: &str = " [Tab] next  [Enter] submit  [^N] add  [^D] remove  [^R] reset  [Esc] quit";

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (right_text, right_style) = match &app.status {
        Some(status) if status.is_error => (status.text.as_str(), Style::default().fg(Color::Red)),
        Some(status) => (status.text.as_str(), Style::default().fg(Color::Green)),
        None => ("Editing", Style::default().fg(Color::DarkGray)),
    };

    // Calculate padding for right-alignment
    let padding =
        area.width.saturating_sub(HINTS.len() as u16 + right_text.len() as u16 + 2) as usize;

    let line = Line::from(vec![
        Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, right_style),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
