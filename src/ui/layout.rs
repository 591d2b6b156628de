//! Layout and status bar

use crate::app::App;
use crate::platform::{ADD_SHORTCUT, CLEAR_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the status bar with shortcut help, or the latest status message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled("│", text_style));
    }

    for (key, label) in [
        ("Tab", "next"),
        (ADD_SHORTCUT, "add"),
        (CLEAR_SHORTCUT, "clear"),
        (SUBMIT_SHORTCUT, "submit"),
        ("Esc", "quit"),
    ] {
        spans.push(Span::styled(format!(" {key}"), key_style));
        spans.push(Span::styled(format!(" {label} "), text_style));
    }

    let form = &app.state.form;
    let invalid = form.invalid_rows().len();
    let summary = if invalid == 0 {
        format!("│ {} ready ", form.len())
    } else {
        format!("│ {}/{} need attention ", invalid, form.len())
    };
    spans.push(Span::styled(summary, text_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
