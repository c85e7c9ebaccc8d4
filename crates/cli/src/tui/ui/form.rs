//! Form pane: one line per input, errors underneath.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use signup_core::schema::FieldPath;

use crate::tui::app::{App, Focus};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();

    for focus in [Focus::Avatar, Focus::Name, Focus::Email, Focus::Password] {
        let label = match focus {
            Focus::Avatar => "Avatar",
            Focus::Name => "Name",
            Focus::Email => "Email",
            _ => "Password",
        };
        push_input(&mut lines, app, focus, label);
    }

    if let Some(file) = app.form.state().avatar.first() {
        lines.push(Line::from(Span::styled(
            format!("          attached {} ({} bytes)", file.name, file.size),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("Technologies ({})", app.form.state().techs().len()),
        Style::default().bold(),
    )));
    if let Some(message) = app.form.error_for(&FieldPath::key("techs")) {
        lines.push(error_line(message));
    }

    for row in app.form.state().techs() {
        push_input(&mut lines, app, Focus::Title(row.id), &format!("{} title", row.id));
        push_input(&mut lines, app, Focus::Knowledge(row.id), "  knowledge");
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Register")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn push_input<'a>(lines: &mut Vec<Line<'a>>, app: &App, focus: Focus, label: &str) {
    let focused = app.focus == focus;
    let mut value = app.input_text(focus);
    if focus == Focus::Password {
        value = "*".repeat(value.chars().count());
    }
    if focused {
        value.push('▏');
    }

    let label_style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::Cyan)
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{label:<16}"), label_style),
        Span::raw(value),
    ]));

    if let Some(message) = app.error_for(focus) {
        lines.push(error_line(message));
    }
}

fn error_line<'a>(message: &str) -> Line<'a> {
    Line::from(Span::styled(format!("  ! {message}"), Style::default().fg(Color::Red)))
}
