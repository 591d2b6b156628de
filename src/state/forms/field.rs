//! Email field value objects

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error shown under a single email row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Email is required")]
    #[serde(rename = "Email is required")]
    Required,
    #[error("Invalid email format")]
    #[serde(rename = "Invalid email format")]
    InvalidFormat,
}

impl FieldError {
    /// Get the message displayed to the user
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "Email is required",
            FieldError::InvalidFormat => "Invalid email format",
        }
    }
}

/// One row of the email form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailField {
    pub value: String,
    pub error: Option<FieldError>,
}

impl EmailField {
    /// Create a blank, untouched field
    pub fn empty() -> Self {
        Self::default()
    }

    /// Error message for this field, or an empty string when there is none
    pub fn error_message(&self) -> &'static str {
        self.error.map(|e| e.message()).unwrap_or("")
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Value with the last character removed
    pub fn value_without_last_char(&self) -> String {
        let mut value = self.value.clone();
        value.pop();
        value
    }

    /// Value with one character appended
    pub fn value_with_char(&self, c: char) -> String {
        let mut value = self.value.clone();
        value.push(c);
        value
    }
}
