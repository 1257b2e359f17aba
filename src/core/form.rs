//! Contact form data model
//!
//! Field identities, the raw form snapshot, per-field feedback, the submit
//! control and the validated request handed to delivery.

use serde::Serialize;

/// One input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Validation order
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Element id and form name of the input
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Element id of the inline error text
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Message => "messageError",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }
}

/// Visual tone of inline field feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackTone {
    /// Post-submit or blur failure
    #[default]
    Error,
    /// Live length counter
    Warning,
}

impl FeedbackTone {
    /// Text color of the feedback line
    pub fn color(&self) -> &'static str {
        match self {
            FeedbackTone::Error => "#ef4444",
            FeedbackTone::Warning => "#fbbf24",
        }
    }
}

/// Inline message attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFeedback {
    pub message: String,
    pub tone: FeedbackTone,
    flags_input: bool,
}

impl FieldFeedback {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: FeedbackTone::Error,
            flags_input: true,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: FeedbackTone::Warning,
            flags_input: false,
        }
    }

    /// Whether the input itself is flagged as errored
    pub fn flags_input(&self) -> bool {
        self.flags_input
    }

    /// Keeps the input flagged if the feedback being replaced flagged it
    pub fn replacing(mut self, previous: Option<&FieldFeedback>) -> Self {
        self.flags_input |= previous.is_some_and(FieldFeedback::flags_input);
        self
    }
}

/// Raw, untrimmed values currently typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Snapshot of validated, trimmed values for one delivery attempt
///
/// Only built through [`crate::core::validate_submission`], so holding one
/// means every field passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    name: String,
    email: String,
    message: String,
}

impl SubmissionRequest {
    pub(crate) fn from_validated(form: &ContactForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            message: form.message.trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The sender doubles as the reply-to address
    pub fn reply_to(&self) -> &str {
        &self.email
    }

    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
            reply_to: self.reply_to().to_string(),
        }
    }
}

/// Parameters accepted by the email template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub reply_to: String,
}

/// Label shown on the submit button while a delivery is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Label and enabled state of the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    /// Disabled copy carrying the sending indicator
    pub fn sending(&self) -> Self {
        Self {
            label: SENDING_LABEL.to_string(),
            disabled: true,
        }
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::idle("Send Message")
    }
}
