//! Preview pane rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use signup_core::form::SubmitOutcome;

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (content, style) = match (&app.preview, app.form.last_outcome()) {
        (Some(preview), _) => (preview.clone(), Style::default()),
        (None, Some(SubmitOutcome::Invalid)) => (
            format!("{} problem(s) left to fix", app.form.errors().len()),
            Style::default().fg(Color::Red),
        ),
        _ => (
            String::from("Press Enter to submit the form"),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let title = format!("Preview ({})", app.config.preview.as_str());
    let paragraph = Paragraph::new(content)
        .style(style)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
