//! Field rendering utilities for forms

use crate::state::EmailField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one email field: bordered input plus error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw an email input with its inline error line underneath
pub fn draw_email_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &EmailField,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if field.has_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let (display_value, value_style) = if field.value.is_empty() && !is_active {
        ("(empty)", Style::default().fg(Color::DarkGray))
    } else if is_active {
        (field.value.as_str(), Style::default().fg(Color::Cyan))
    } else {
        (field.value.as_str(), Style::default())
    };

    let cursor = if is_active { "▌" } else { "" };

    // Keep the tail of long values (and the cursor) visible
    let inner_width = chunks[0].width.saturating_sub(2) as usize;
    let visible = tail(display_value, inner_width.saturating_sub(cursor.chars().count()));

    let input = Paragraph::new(Line::from(vec![
        Span::styled(visible, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, chunks[0]);

    let error = Paragraph::new(Span::styled(
        format!(" {}", field.error_message()),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(error, chunks[1]);
}

/// Last `max_chars` characters of `s`
fn tail(s: &str, max_chars: usize) -> &str {
    let count = s.chars().count();
    if count <= max_chars {
        return s;
    }
    let skip = count - max_chars;
    match s.char_indices().nth(skip) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_short_string_unchanged() {
        assert_eq!(tail("a@b.com", 20), "a@b.com");
    }

    #[test]
    fn test_tail_truncates_from_front() {
        assert_eq!(tail("someone@example.com", 7), "ple.com");
        assert_eq!(tail("üüü@x.de", 4), "x.de");
        assert_eq!(tail("abc", 0), "");
    }
}
