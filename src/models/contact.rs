use serde::{Deserialize, Serialize};

/// A contact form submission as posted by the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// The form's fields with their validation rules, in page order.
    pub fn fields(&self) -> Vec<FormField<'_>> {
        vec![
            FormField::required("name", &self.name),
            FormField::required("email", &self.email).with_kind(FieldKind::Email),
            FormField::optional("subject", self.subject.as_deref().unwrap_or("")),
            FormField::required("message", &self.message),
        ]
    }
}

/// A single input of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub required: bool,
    pub kind: FieldKind,
}

impl<'a> FormField<'a> {
    pub fn required(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value,
            required: true,
            kind: FieldKind::Text,
        }
    }

    pub fn optional(name: &'a str, value: &'a str) -> Self {
        Self {
            required: false,
            ..Self::required(name, value)
        }
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Input type of a form field. Only email fields get a format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

/// Inline message attached to one field after a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
