//! Validation rules for the contact form fields
//!
//! Every check works on the trimmed value and is side-effect free: it returns a
//! verdict and leaves rendering to the caller.

use std::sync::LazyLock;

use regex::Regex;

use super::form::{ContactForm, Field, SubmissionRequest};

/// Minimum trimmed length of the sender name
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum trimmed length of the message body
pub const MIN_MESSAGE_LENGTH: usize = 20;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A failed rule for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    NameTooShort,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
    /// Message shorter than [`MIN_MESSAGE_LENGTH`], with the trimmed length
    MessageTooShort { actual: usize },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::NameRequired => write!(f, "Name is required"),
            FieldError::NameTooShort => {
                write!(f, "Name must be at least {} characters", MIN_NAME_LENGTH)
            }
            FieldError::EmailRequired => write!(f, "Email is required"),
            FieldError::EmailInvalid => write!(f, "Please enter a valid email address"),
            FieldError::MessageRequired => write!(f, "Message is required"),
            FieldError::MessageTooShort { actual } => write!(
                f,
                "Message must be at least {} characters (currently {} characters)",
                MIN_MESSAGE_LENGTH, actual
            ),
        }
    }
}

impl std::error::Error for FieldError {}

/// Pass/fail outcome for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldVerdict {
    pub field: Field,
    pub error: Option<FieldError>,
}

impl FieldVerdict {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Verdicts for every field of one submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub verdicts: Vec<FieldVerdict>,
}

impl ValidationResult {
    pub fn all_valid(&self) -> bool {
        self.verdicts.iter().all(FieldVerdict::is_valid)
    }

    /// Failing fields in validation order
    pub fn failures(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.verdicts
            .iter()
            .filter_map(|v| v.error.as_ref().map(|e| (v.field, e)))
    }
}

/// Trimmed length in characters
pub fn trimmed_len(raw: &str) -> usize {
    raw.trim().chars().count()
}

/// Checks whether a trimmed value looks like `local@domain.tld`
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw.trim())
}

/// Validates a single field value
pub fn validate(field: Field, raw: &str) -> FieldVerdict {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    let error = match field {
        Field::Name if trimmed.is_empty() => Some(FieldError::NameRequired),
        Field::Name if len < MIN_NAME_LENGTH => Some(FieldError::NameTooShort),
        Field::Email if trimmed.is_empty() => Some(FieldError::EmailRequired),
        Field::Email if !is_valid_email(trimmed) => Some(FieldError::EmailInvalid),
        Field::Message if trimmed.is_empty() => Some(FieldError::MessageRequired),
        Field::Message if len < MIN_MESSAGE_LENGTH => {
            Some(FieldError::MessageTooShort { actual: len })
        }
        _ => None,
    };

    FieldVerdict { field, error }
}

/// Validates name, email and message in that order, without stopping at the
/// first failure
pub fn validate_all(form: &ContactForm) -> ValidationResult {
    let verdicts = Field::ALL
        .iter()
        .map(|&field| validate(field, form.value(field)))
        .collect();

    ValidationResult { verdicts }
}

/// Validates the whole form and builds the request only when every field passes
pub fn validate_submission(form: &ContactForm) -> Result<SubmissionRequest, ValidationResult> {
    let result = validate_all(form);
    if result.all_valid() {
        Ok(SubmissionRequest::from_validated(form))
    } else {
        Err(result)
    }
}

/// What the email field should show after it loses focus
pub fn email_blur_check(raw: &str) -> Option<FieldError> {
    if !raw.trim().is_empty() && !is_valid_email(raw) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

/// Live feedback for the message field while typing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageHint {
    /// Show the length counter in the warning tone
    Counter(String),
    /// Long enough, drop any feedback
    Clear,
    /// Empty, keep whatever is currently shown
    Unchanged,
}

/// Computes the live length counter for the message field
pub fn message_hint(raw: &str) -> MessageHint {
    match trimmed_len(raw) {
        0 => MessageHint::Unchanged,
        len if len < MIN_MESSAGE_LENGTH => MessageHint::Counter(format!(
            "Message must be at least {} characters ({}/{})",
            MIN_MESSAGE_LENGTH, len, MIN_MESSAGE_LENGTH
        )),
        _ => MessageHint::Clear,
    }
}
