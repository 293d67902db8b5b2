//! Form fields and the record they fill.
//!
//! The set of fields is closed: every input in the dialog maps to exactly
//! one [`FormField`] variant, so a record can never gain or lose a key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a field is rendered and what the webview checks natively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Plain single-line text
    Text,
    /// Single-line, `type="email"`
    Email,
    /// Single-line, `type="tel"`
    Tel,
    /// Multi-line textarea
    Multiline,
}

impl InputKind {
    /// Value for the HTML `type` attribute (`None` for textareas)
    pub fn html_type(&self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Tel => Some("tel"),
            InputKind::Multiline => None,
        }
    }
}

/// One of the six fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Company,
    Name,
    Email,
    Phone,
    Budget,
    Message,
}

impl FormField {
    /// All fields in display order
    pub const ALL: [FormField; 6] = [
        FormField::Company,
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Budget,
        FormField::Message,
    ];

    /// Stable lowercase key, used for element ids and serialization
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Company => "company",
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Budget => "budget",
            FormField::Message => "message",
        }
    }

    /// Whether submit is blocked while this field is empty
    pub fn is_required(&self) -> bool {
        matches!(self, FormField::Company | FormField::Name | FormField::Email)
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            FormField::Email => InputKind::Email,
            FormField::Phone => InputKind::Tel,
            FormField::Message => InputKind::Multiline,
            FormField::Company | FormField::Name | FormField::Budget => InputKind::Text,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current values of the contact form
///
/// Every field is always present; the default is all-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub budget: String,
    pub message: String,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Company => &self.company,
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Budget => &self.budget,
            FormField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Company => &mut self.company,
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Budget => &mut self.budget,
            FormField::Message => &mut self.message,
        }
    }

    /// Replace a single field in place
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Copy of this record with one field replaced
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> FormRecord {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    /// Required fields that are currently empty, in display order
    ///
    /// Whitespace counts as content, matching the webview's `required` check.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
