//! Email list form state and validation
//!
//! `FormState` is a value type: every operation that changes the form takes `&self`
//! and returns a new state, leaving previously held states untouched.

use super::field::{EmailField, FieldError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// One or more chars that are neither `@` nor ECMAScript whitespace.
///
/// Spelled out instead of `\s`: regex's `\s` is Unicode White_Space, which includes
/// U+0085 and excludes U+FEFF.
const EMAIL_PART: &str = r"[^@\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        let pattern = format!(r"^{EMAIL_PART}@{EMAIL_PART}\.{EMAIL_PART}$");
        Regex::new(&pattern).unwrap()
    })
}

/// Coarse syntactic email check: `local@domain.tld` with no whitespace and a single `@`
pub fn validate(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Compute the error a field should show for a freshly edited value
fn error_for(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::Required)
    } else if !validate(value) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

/// Emails accepted by a successful submit, in row order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedEmails(Vec<String>);

impl AcceptedEmails {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl IntoIterator for AcceptedEmails {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Submit was blocked because at least one row is blank or invalid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fix the errors before submitting.")]
pub struct Rejected {
    rows: Vec<usize>,
}

impl Rejected {
    /// Zero-based indices of the rows that blocked submission
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn first_row(&self) -> Option<usize> {
        self.rows.first().copied()
    }
}

/// A serialized form that cannot be restored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormStateError {
    #[error("form must contain at least one email field")]
    Empty,
}

/// Wire shape of `FormState`, validated on the way in
#[derive(Deserialize)]
struct RawFormState {
    fields: Vec<EmailField>,
}

impl TryFrom<RawFormState> for FormState {
    type Error = FormStateError;

    /// Rejects an empty list and recomputes every error from its value. A blank row may
    /// keep "no error" since untouched rows show none.
    fn try_from(raw: RawFormState) -> Result<Self, Self::Error> {
        if raw.fields.is_empty() {
            return Err(FormStateError::Empty);
        }
        let fields = raw
            .fields
            .into_iter()
            .map(|field| {
                let error = match error_for(&field.value) {
                    Some(FieldError::Required) => field.error.map(|_| FieldError::Required),
                    other => other,
                };
                EmailField {
                    value: field.value,
                    error,
                }
            })
            .collect();
        Ok(Self { fields })
    }
}

/// Ordered list of email rows; never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFormState")]
pub struct FormState {
    fields: Vec<EmailField>,
}

impl FormState {
    /// Create a form with a single untouched row
    pub fn new() -> Self {
        Self {
            fields: vec![EmailField::empty()],
        }
    }

    /// Create a form with `rows` untouched rows (at least one)
    pub fn with_rows(rows: usize) -> Self {
        Self {
            fields: vec![EmailField::empty(); rows.max(1)],
        }
    }

    pub fn fields(&self) -> &[EmailField] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&EmailField> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Current values in row order
    pub fn values(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.value.as_str()).collect()
    }

    /// Rows that currently block submission
    pub fn invalid_rows(&self) -> Vec<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.has_error() || f.value.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Set the value of row `index` and revalidate it.
    ///
    /// An out-of-range index returns the state unchanged.
    pub fn update_field(&self, index: usize, new_value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match next.fields.get_mut(index) {
            Some(field) => {
                let value = new_value.into();
                field.error = error_for(&value);
                field.value = value;
            }
            None => {
                tracing::warn!(index, len = self.len(), "update_field index out of range");
            }
        }
        next
    }

    /// Append a blank row. The new row shows no error until it is edited.
    pub fn add_field(&self) -> Self {
        let mut next = self.clone();
        next.fields.push(EmailField::empty());
        next
    }

    /// True when no row is blank and no row has a validation error
    pub fn can_submit(&self) -> bool {
        self.fields
            .iter()
            .all(|f| !f.has_error() && !f.value.is_empty())
    }

    /// Evaluate the form for submission without modifying it
    pub fn submit(&self) -> Result<AcceptedEmails, Rejected> {
        if !self.can_submit() {
            return Err(Rejected {
                rows: self.invalid_rows(),
            });
        }
        Ok(AcceptedEmails(
            self.fields.iter().map(|f| f.value.clone()).collect(),
        ))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
