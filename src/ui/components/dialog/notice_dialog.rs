//! Submit outcome dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::{Notice, NoticeLevel};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a notice as a modal dialog centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let color = match notice.level {
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Error => Color::Red,
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &notice.title,
            color,
            message: &notice.message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
