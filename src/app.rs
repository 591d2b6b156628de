//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Focus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::from_config(config),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a key press should be treated as a global Ctrl+C quit
    pub fn is_quit_key(&self, key: &KeyEvent) -> bool {
        !self.state.has_notice()
            && key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn is_shortcut(key: &KeyEvent, c: char) -> bool {
        key.code == KeyCode::Char(c)
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER))
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notice dialog is modal
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        if self.is_quit_key(&key) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let on_field = self.state.focus.field_index().is_some();

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            _ if Self::is_shortcut(&key, 's') => self.submit(),
            _ if Self::is_shortcut(&key, 'n') => self.add_field(),
            _ if Self::is_shortcut(&key, 'u') => self.state.clear_field(),
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Enter => match self.state.focus {
                Focus::AddButton => self.add_field(),
                Focus::SubmitButton | Focus::Field(_) => self.submit(),
            },
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) if on_field && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input_char(c)
            }
            KeyCode::Backspace if on_field => self.state.backspace(),
            _ => {}
        }

        Ok(())
    }

    fn add_field(&mut self) {
        self.state.add_field();
        self.status_message = Some(format!("Added Email {}", self.state.form.len()));
    }

    fn submit(&mut self) {
        self.status_message = Some(match self.state.submit() {
            Ok(accepted) => format!("Submitted {} email(s)", accepted.len()),
            Err(rejected) => format!("{} field(s) need attention", rejected.rows().len()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldError;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn press(app: &mut App, event: KeyEvent) {
        tokio_test::block_on(app.handle_key(event)).unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, key(KeyCode::Char(c)));
        }
    }

    fn new_app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_new_app() {
        let app = new_app();
        assert!(!app.should_quit());
        assert!(app.status_message.is_none());
        assert_eq!(app.state.form.len(), 1);
    }

    #[test]
    fn test_typing_updates_focused_field() {
        let mut app = new_app();
        type_str(&mut app, "foo");
        assert_eq!(app.state.form.get(0).unwrap().value, "foo");
        assert_eq!(app.state.form.get(0).unwrap().error, Some(FieldError::InvalidFormat));

        press(&mut app, key(KeyCode::Backspace));
        press(&mut app, key(KeyCode::Backspace));
        press(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.state.form.get(0).unwrap().error, Some(FieldError::Required));
    }

    #[test]
    fn test_ctrl_u_clears_field() {
        let mut app = new_app();
        type_str(&mut app, "a@b.com");
        press(&mut app, ctrl('u'));
        assert_eq!(app.state.form.get(0).unwrap().value, "");
    }

    #[test]
    fn test_add_via_shortcut_and_button() {
        let mut app = new_app();
        press(&mut app, ctrl('n'));
        assert_eq!(app.state.form.len(), 2);
        assert_eq!(app.state.focus, Focus::Field(1));

        app.state.focus = Focus::AddButton;
        press(&mut app, key(KeyCode::Enter));
        assert_eq!(app.state.form.len(), 3);
        assert_eq!(app.status_message.as_deref(), Some("Added Email 3"));
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut app = new_app();
        press(&mut app, key(KeyCode::Tab));
        assert_eq!(app.state.focus, Focus::AddButton);
        press(&mut app, key(KeyCode::Down));
        assert_eq!(app.state.focus, Focus::SubmitButton);
        press(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.state.focus, Focus::AddButton);
    }

    #[test]
    fn test_typing_on_button_is_ignored() {
        let mut app = new_app();
        app.state.focus = Focus::SubmitButton;
        type_str(&mut app, "abc");
        assert_eq!(app.state.form.get(0).unwrap().value, "");
    }

    #[test]
    fn test_rejected_submit_shows_modal_notice() {
        let mut app = new_app();
        type_str(&mut app, "a@b.com");
        press(&mut app, ctrl('n'));
        press(&mut app, ctrl('s'));

        assert!(app.state.has_notice());
        assert_eq!(app.state.focus, Focus::Field(1));
        assert_eq!(
            app.status_message.as_deref(),
            Some("1 field(s) need attention")
        );

        // Input is blocked while the notice is shown
        type_str(&mut app, "x");
        assert_eq!(app.state.form.get(1).unwrap().value, "");

        press(&mut app, key(KeyCode::Enter));
        assert!(!app.state.has_notice());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_accepted_submit_via_enter_on_field() {
        let mut app = new_app();
        type_str(&mut app, "a@b.com");
        press(&mut app, key(KeyCode::Enter));

        let notice = app.state.notices.current().unwrap();
        assert_eq!(notice.title, "Submitted");
        assert_eq!(app.status_message.as_deref(), Some("Submitted 1 email(s)"));
        assert_eq!(app.state.form.get(0).unwrap().value, "a@b.com");
    }

    #[test]
    fn test_esc_dismisses_notice_before_quitting() {
        let mut app = new_app();
        press(&mut app, ctrl('s'));
        press(&mut app, key(KeyCode::Esc));
        assert!(!app.should_quit());
        press(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_only_without_notice() {
        let mut app = new_app();
        press(&mut app, ctrl('s'));
        assert!(!app.is_quit_key(&ctrl('c')));
        press(&mut app, ctrl('c'));
        assert!(!app.should_quit());

        press(&mut app, key(KeyCode::Enter));
        press(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }
}
