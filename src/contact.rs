//! Contact form validation and forwarding.
//!
//! Submissions are checked locally first. Only a submission with no field
//! errors is forwarded to the third-party form endpoint.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use thiserror::Error;

use crate::models::{
    ContactSubmission, FieldError, FieldKind, FormField, Notification, NotificationKind,
};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Whether `value` looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check every field. Returns at most one error per field, in field order.
///
/// A required field that is blank after trimming fails with
/// [`REQUIRED_MESSAGE`]. A non-empty email field that does not look like an
/// address fails with [`INVALID_EMAIL_MESSAGE`], which replaces the required
/// error when both apply (an email of only spaces).
pub fn validate_fields(fields: &[FormField<'_>]) -> Vec<FieldError> {
    fields.iter().filter_map(field_error).collect()
}

fn field_error(field: &FormField<'_>) -> Option<FieldError> {
    let message = if field.kind == FieldKind::Email
        && !field.value.is_empty()
        && !is_valid_email(field.value)
    {
        INVALID_EMAIL_MESSAGE
    } else if field.required && field.value.trim().is_empty() {
        REQUIRED_MESSAGE
    } else {
        return None;
    };
    Some(FieldError {
        field: field.name.to_string(),
        message: message.to_string(),
    })
}

/// Validate a contact submission.
pub fn validate(submission: &ContactSubmission) -> Result<(), Vec<FieldError>> {
    let errors = validate_fields(&submission.fields());
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Invalid submission: {} field error(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Form endpoint rejected submission: {0}")]
    Rejected(String),
}

/// Forwards validated submissions to the third-party form endpoint.
///
/// Without an endpoint, valid submissions are accepted and only logged.
#[derive(Debug, Clone)]
pub struct ContactForwarder {
    endpoint: Option<String>,
    client: Client,
}

impl ContactForwarder {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Validate, then forward as `application/x-www-form-urlencoded`.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<Notification, SubmitError> {
        if let Err(errors) = validate(submission) {
            tracing::warn!("Contact form rejected with {} error(s)", errors.len());
            return Err(SubmitError::Invalid(errors));
        }

        match &self.endpoint {
            Some(url) => {
                let response = self.client.post(url).form(submission).send().await?;
                let status = response.status();
                if !status.is_success() {
                    let body = response.text().await.unwrap_or_default();
                    return Err(SubmitError::Rejected(format!("{}: {}", status, body)));
                }
                tracing::info!("Contact form forwarded to {}", url);
            }
            None => {
                tracing::info!("Contact form accepted from {} (no endpoint configured)", submission.email);
            }
        }

        Ok(Notification::new(SUCCESS_MESSAGE, NotificationKind::Success))
    }
}
