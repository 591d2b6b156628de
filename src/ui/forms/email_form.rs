//! Dynamic email form rendering

use super::field_renderer::{draw_email_field, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{ADD_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Focus;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::ops::Range;

/// Draw the email form with its action panel and entered-emails list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and side column (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(28), // Actions + entered emails
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT * 2 + 2), // Action panel
            Constraint::Min(0),                        // Entered emails
        ])
        .split(main_chunks[1]);

    draw_action_panel(frame, side_chunks[0], app);
    if app.state.show_entered_emails {
        draw_entered_emails(frame, side_chunks[1], app);
    }
}

/// Number of rows that fit in `height` lines, keeping one line for the scroll
/// indicator when not every row fits
pub fn row_capacity(total: usize, height: u16) -> usize {
    let full = (height / FIELD_HEIGHT) as usize;
    if total <= full {
        full
    } else {
        (height.saturating_sub(1) / FIELD_HEIGHT) as usize
    }
}

/// Rows to render so the focused row stays on screen
pub fn visible_rows(total: usize, focused: Option<usize>, capacity: usize) -> Range<usize> {
    let capacity = capacity.max(1);
    if total <= capacity {
        return 0..total;
    }
    let start = match focused {
        Some(i) => (i + 1).saturating_sub(capacity).min(total - capacity),
        None => total - capacity,
    };
    start..start + capacity
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let focused = app.state.focus.field_index();

    let title = if form.len() > 1 {
        format!(" {} ({} emails) ", app.state.title, form.len())
    } else {
        format!(" {} ", app.state.title)
    };
    let border_color = if focused.is_some() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let capacity = row_capacity(form.len(), inner.height);
    let rows = visible_rows(form.len(), focused, capacity);
    let hidden_above = rows.start;
    let hidden_below = form.len() - rows.end;

    let mut constraints: Vec<Constraint> = rows
        .clone()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (slot, index) in rows.enumerate() {
        if let Some(field) = form.get(index) {
            let label = format!("Email {}", index + 1);
            draw_email_field(frame, chunks[slot], &label, field, focused == Some(index));
        }
    }

    if hidden_above > 0 || hidden_below > 0 {
        let indicator = Paragraph::new(Span::styled(
            format!(" ↑ {hidden_above} more  ↓ {hidden_below} more"),
            Style::default().fg(Color::DarkGray),
        ));
        if let Some(last) = chunks.last() {
            frame.render_widget(indicator, *last);
        }
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let focus = app.state.focus;
    let is_focused = matches!(focus, Focus::AddButton | Focus::SubmitButton);

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Add Email
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        "Add Email",
        ADD_SHORTCUT,
        focus == Focus::AddButton,
        true,
    );
    render_action_button(
        frame,
        button_chunks[1],
        "Submit",
        SUBMIT_SHORTCUT,
        focus == Focus::SubmitButton,
        app.state.form.can_submit(),
    );
}

/// Draw the list of currently entered values
fn draw_entered_emails(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state
        .form
        .fields()
        .iter()
        .map(|field| {
            let style = if field.has_error() {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw("• "),
                Span::styled(field.value.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Entered Emails ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_rows_fits_everything() {
        assert_eq!(visible_rows(3, Some(2), 5), 0..3);
        assert_eq!(visible_rows(0, None, 5), 0..0);
    }

    #[test]
    fn test_visible_rows_follows_focus() {
        assert_eq!(visible_rows(10, Some(0), 4), 0..4);
        assert_eq!(visible_rows(10, Some(3), 4), 0..4);
        assert_eq!(visible_rows(10, Some(4), 4), 1..5);
        assert_eq!(visible_rows(10, Some(9), 4), 6..10);
    }

    #[test]
    fn test_visible_rows_without_field_focus_shows_tail() {
        assert_eq!(visible_rows(10, None, 4), 6..10);
    }

    #[test]
    fn test_row_capacity_reserves_indicator_line() {
        assert_eq!(row_capacity(4, 16), 4);
        assert_eq!(row_capacity(8, 16), 3);
        assert_eq!(row_capacity(8, 17), 4);
        assert_eq!(row_capacity(8, 3), 0);
    }

    #[test]
    fn test_visible_rows_zero_capacity() {
        assert_eq!(visible_rows(3, Some(1), 0), 1..2);
    }
}
