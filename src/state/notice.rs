//! User-facing notices for submit outcomes

use super::forms::{AcceptedEmails, FormState, Rejected};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A message to surface to the user, rendered as a modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn accepted(emails: &AcceptedEmails) -> Self {
        let mut message = String::from("All emails are valid!\n");
        for email in emails.as_slice() {
            message.push('\n');
            message.push_str(email);
        }
        Self {
            level: NoticeLevel::Success,
            title: "Submitted".to_string(),
            message,
        }
    }

    pub fn rejected(rejected: &Rejected) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Cannot submit".to_string(),
            message: rejected.to_string(),
        }
    }
}

/// Receiver for submit outcomes
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// FIFO of pending notices; the head is shown until dismissed
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn current(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Remove the notice currently shown
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }
}

/// Submit the form and report the outcome through `notifier`
pub fn submit_and_notify<N: Notifier + ?Sized>(
    form: &FormState,
    notifier: &mut N,
) -> Result<AcceptedEmails, Rejected> {
    let outcome = form.submit();
    match &outcome {
        Ok(emails) => {
            tracing::info!(count = emails.len(), "Form submitted");
            notifier.notify(Notice::accepted(emails));
        }
        Err(rejected) => {
            tracing::debug!(rows = ?rejected.rows(), "Submit rejected");
            notifier.notify(Notice::rejected(rejected));
        }
    }
    outcome
}
