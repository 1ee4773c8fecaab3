use std::sync::LazyLock;

use regex::Regex;

/// Minimum trimmed message length, in characters
pub const MIN_MESSAGE_CHARS: usize = 20;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Raw contact form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

/// Why a single field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort,
}

/// Per-field results; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
        }
    }

    /// User-facing text for a field's error
    pub fn message_for(&self, field: ContactField) -> Option<&'static str> {
        let err = self.get(field)?;
        Some(match (field, err) {
            (ContactField::Name, _) => "Name is required.",
            (ContactField::Email, FieldError::Required) => "Email is required.",
            (ContactField::Email, _) => "Please enter a valid email address.",
            (ContactField::Message, FieldError::Required) => "Message is required.",
            (ContactField::Message, _) => "Message should be at least 20 characters long.",
        })
    }
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Validate every field independently
pub fn validate_contact(form: &ContactForm) -> ContactErrors {
    ContactErrors {
        name: validate_name(&form.name),
        email: validate_email(&form.email),
        message: validate_message(&form.message),
    }
}

fn validate_name(name: &str) -> Option<FieldError> {
    name.trim().is_empty().then_some(FieldError::Required)
}

fn validate_email(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        Some(FieldError::Required)
    } else if !EMAIL_RE.is_match(email) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

fn validate_message(message: &str) -> Option<FieldError> {
    let message = message.trim();
    if message.is_empty() {
        Some(FieldError::Required)
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        Some(FieldError::TooShort)
    } else {
        None
    }
}
