//! Application state definitions

use super::forms::{AcceptedEmails, FormState, Rejected};
use super::notice::{submit_and_notify, NoticeQueue};
use crate::config::TuiConfig;

/// Default heading of the form
pub const DEFAULT_TITLE: &str = "Dynamic Email Form";

/// Upper bound for the configured number of starting rows
pub const MAX_INITIAL_ROWS: usize = 100;

/// Which element of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Email row at the given index
    Field(usize),
    AddButton,
    SubmitButton,
}

impl Focus {
    /// Next focus stop: every row in order, then Add, then Submit, then wrap
    pub fn next(self, field_count: usize) -> Self {
        match self {
            Focus::Field(i) if i + 1 < field_count => Focus::Field(i + 1),
            Focus::Field(_) => Focus::AddButton,
            Focus::AddButton => Focus::SubmitButton,
            Focus::SubmitButton => Focus::Field(0),
        }
    }

    /// Previous focus stop, wrapping from the first row to Submit
    pub fn prev(self, field_count: usize) -> Self {
        match self {
            Focus::Field(0) => Focus::SubmitButton,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::AddButton => Focus::Field(field_count.saturating_sub(1)),
            Focus::SubmitButton => Focus::AddButton,
        }
    }

    pub fn field_index(self) -> Option<usize> {
        match self {
            Focus::Field(i) => Some(i),
            _ => None,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current email list
    pub form: FormState,
    pub focus: Focus,
    /// Pending submit outcomes, shown as a modal dialog
    pub notices: NoticeQueue,
    /// Form heading
    pub title: String,
    /// Whether to render the "Entered Emails" panel
    pub show_entered_emails: bool,
    /// Last successfully submitted list
    pub last_submitted: Option<AcceptedEmails>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: FormState::new(),
            focus: Focus::Field(0),
            notices: NoticeQueue::default(),
            title: DEFAULT_TITLE.to_string(),
            show_entered_emails: true,
            last_submitted: None,
        }
    }
}

impl AppState {
    /// Build the initial state from user configuration
    pub fn from_config(config: &TuiConfig) -> Self {
        let mut state = Self::default();
        if let Some(title) = config.title.as_deref().filter(|t| !t.trim().is_empty()) {
            state.title = title.to_string();
        }
        if let Some(rows) = config.initial_rows {
            if rows > MAX_INITIAL_ROWS {
                tracing::warn!(rows, max = MAX_INITIAL_ROWS, "initial_rows capped");
            }
            state.form = FormState::with_rows(rows.min(MAX_INITIAL_ROWS));
        }
        if let Some(show) = config.show_entered_emails {
            state.show_entered_emails = show;
        }
        state
    }

    pub fn has_notice(&self) -> bool {
        self.notices.has_notice()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.dismiss();
    }

    /// Move focus to the next element
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next(self.form.len());
    }

    /// Move focus to the previous element
    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev(self.form.len());
    }

    /// Append a character to the focused row and revalidate it
    pub fn input_char(&mut self, c: char) {
        if let Some(index) = self.focus.field_index() {
            if let Some(field) = self.form.get(index) {
                let value = field.value_with_char(c);
                self.form = self.form.update_field(index, value);
            }
        }
    }

    /// Remove the last character of the focused row and revalidate it
    pub fn backspace(&mut self) {
        if let Some(index) = self.focus.field_index() {
            if let Some(field) = self.form.get(index) {
                let value = field.value_without_last_char();
                self.form = self.form.update_field(index, value);
            }
        }
    }

    /// Clear the focused row
    pub fn clear_field(&mut self) {
        if let Some(index) = self.focus.field_index() {
            self.form = self.form.update_field(index, "");
        }
    }

    /// Append a row and focus it
    pub fn add_field(&mut self) {
        self.form = self.form.add_field();
        self.focus = Focus::Field(self.form.len() - 1);
        tracing::debug!(rows = self.form.len(), "Added email field");
    }

    /// Submit the form, queueing a notice for the outcome.
    ///
    /// A rejected submit moves focus to the first row that blocked it.
    pub fn submit(&mut self) -> Result<AcceptedEmails, Rejected> {
        let outcome = submit_and_notify(&self.form, &mut self.notices);
        match &outcome {
            Ok(accepted) => self.last_submitted = Some(accepted.clone()),
            Err(rejected) => {
                if let Some(row) = rejected.first_row() {
                    self.focus = Focus::Field(row);
                }
            }
        }
        outcome
    }
}
