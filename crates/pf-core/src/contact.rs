//! Contact form model and validation.
//!
//! 联系表单模型与校验。

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormErrors {
    fields: BTreeMap<ContactField, &'static str>,
}

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    /// Typing into a field clears its error.
    pub fn clear(&mut self, field: ContactField) {
        self.fields.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: ContactField, message: &'static str) {
        self.fields.insert(field, message);
    }
}

impl fmt::Display for ContactFormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Raw form input as typed by the visitor.
///
/// 访客填写的原始表单内容。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Name, email and message are required; email must look like `a@b.c`.
    /// Subject is optional.
    pub fn validate(&self) -> Result<(), ContactFormErrors> {
        let mut errors = ContactFormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(ContactField::Email, "Email is invalid");
        }
        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, "Message is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// A validated message ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Validate `form` and build the outgoing message.
    pub fn from_form(form: &ContactForm, submitted_at: DateTime<Utc>) -> Result<Self, ContactFormErrors> {
        form.validate()?;

        let subject = form.subject.trim();
        Ok(Self {
            id: Uuid::new_v4(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: form.message.trim().to_string(),
            submitted_at,
        })
    }
}

/// Acknowledgement returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub message_id: Uuid,
    pub accepted_at: DateTime<Utc>,
}
