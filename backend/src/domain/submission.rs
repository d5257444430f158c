//! Contact-form submissions and their validation.
//!
//! Inbound adapters hand a [`SubmissionDraft`] to the domain; the validator
//! turns it into a [`ContactSubmission`] whose invariants every later stage
//! can rely on.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Shape every accepted address must match: one `@`, and a dot somewhere in
/// the domain part.
pub const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+$";

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Raw submission as received from a transport, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    /// Submitter name, untrimmed.
    pub name: String,
    /// Submitter address.
    pub email: String,
    /// Optional company name.
    pub company: Option<String>,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Message body, untrimmed.
    pub message: String,
    /// Optional service the submitter is interested in.
    pub service_type: Option<String>,
}

/// Reasons a draft is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionValidationError {
    /// Name is empty after trimming.
    #[error("Name is required")]
    EmptyName,
    /// Message is empty after trimming.
    #[error("Message is required")]
    EmptyMessage,
    /// Address does not match [`EMAIL_PATTERN`].
    #[error("Invalid email format")]
    InvalidEmail,
}

impl SubmissionValidationError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyMessage => "message",
            Self::InvalidEmail => "email",
        }
    }
}

/// A validated contact-form submission.
///
/// ## Invariants
/// - `name` and `message` are trimmed and non-empty.
/// - `email` matches [`EMAIL_PATTERN`].
/// - Optional fields are carried exactly as submitted.
///
/// # Examples
/// ```
/// use novashield_backend::domain::{ContactSubmission, SubmissionDraft};
///
/// let draft = SubmissionDraft {
///     name: "  Ada ".into(),
///     email: "ada@example.com".into(),
///     message: "Hello".into(),
///     ..SubmissionDraft::default()
/// };
/// let submission = ContactSubmission::try_from_draft(draft).expect("valid draft");
/// assert_eq!(submission.name(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    company: Option<String>,
    phone: Option<String>,
    message: String,
    service_type: Option<String>,
}

impl ContactSubmission {
    /// Validate a draft.
    ///
    /// # Errors
    /// Returns the first [`SubmissionValidationError`] found, checking name,
    /// then message, then the address shape.
    pub fn try_from_draft(draft: SubmissionDraft) -> Result<Self, SubmissionValidationError> {
        let SubmissionDraft {
            name,
            email,
            company,
            phone,
            message,
            service_type,
        } = draft;

        let name = name.trim();
        if name.is_empty() {
            return Err(SubmissionValidationError::EmptyName);
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(SubmissionValidationError::EmptyMessage);
        }
        if !has_email_shape(&email) {
            return Err(SubmissionValidationError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_owned(),
            email,
            company,
            phone,
            message: message.to_owned(),
            service_type,
        })
    }

    /// Trimmed submitter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Submitter address; also the confirmation recipient.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Company, if supplied.
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Phone number, if supplied.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Trimmed message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Requested service, if supplied.
    pub fn service_type(&self) -> Option<&str> {
        self.service_type.as_deref()
    }
}

impl TryFrom<SubmissionDraft> for ContactSubmission {
    type Error = SubmissionValidationError;

    fn try_from(value: SubmissionDraft) -> Result<Self, Self::Error> {
        Self::try_from_draft(value)
    }
}

/// Whether `candidate` matches [`EMAIL_PATTERN`].
#[must_use]
pub fn has_email_shape(candidate: &str) -> bool {
    EMAIL_SHAPE.is_match(candidate)
}
