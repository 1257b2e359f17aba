//! Contact form submission controller
//!
//! Drives one submit attempt through validation, remote delivery and the
//! `mailto:` fallback. The controller never touches a UI runtime directly: it
//! talks to a [`ContactSurface`], which the Leptos layer implements with
//! signals and the tests implement in memory.

use leptos::logging::{log, warn};

use super::config::ContactConfig;
use super::delivery::{DeliveryClient, DeliveryError};
use super::form::{ContactForm, Field, FieldFeedback, SubmissionRequest, SubmitControl};
use super::mailto::compose_mailto;
use super::notification::Severity;
use super::validation::{
    MessageHint, ValidationResult, email_blur_check, message_hint, validate_submission,
};

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form";
pub const DELIVERED_MESSAGE: &str = "Message sent successfully! 🚀";
pub const FALLBACK_MESSAGE: &str = "Opening email client as backup...";

/// Renders and clears inline field errors
pub trait ErrorPresenter {
    fn show_error(&self, field: Field, feedback: FieldFeedback);

    fn clear_error(&self, field: Field);

    /// Feedback currently shown for a field
    fn current_feedback(&self, field: Field) -> Option<FieldFeedback>;

    fn clear_all(&self, fields: &[Field]) {
        for &field in fields {
            self.clear_error(field);
        }
    }
}

/// Shows transient notifications
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Everything the controller needs from the page
pub trait ContactSurface: ErrorPresenter + Notifier {
    /// Current raw values of the three inputs
    fn form_values(&self) -> ContactForm;

    /// Empties all inputs
    fn reset_fields(&self);

    fn submit_control(&self) -> SubmitControl;

    fn set_submit_control(&self, control: SubmitControl);

    /// Navigates to a `mailto:` link
    fn open_mail_client(&self, href: &str);

    fn state(&self) -> SubmissionState;

    fn set_state(&self, state: SubmissionState);
}

/// Lifecycle of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Sending,
    Delivered,
    FallbackComposed,
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt is still in flight
    Busy,
    /// At least one field failed validation
    Invalid(ValidationResult),
    /// The email service accepted the message
    Delivered,
    /// Delivery was unavailable or failed, the mail client was opened instead
    FallbackComposed { href: String, reason: DeliveryError },
}

/// Orchestrates validation, delivery and fallback for the contact form
#[derive(Debug, Clone)]
pub struct SubmissionController<D> {
    config: ContactConfig,
    client: Option<D>,
}

impl<D: DeliveryClient> SubmissionController<D> {
    /// `client` is `None` when the delivery service was never initialized
    pub fn new(config: ContactConfig, client: Option<D>) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Handles a submit action from start to finish
    pub async fn submit<S: ContactSurface>(&self, surface: &S) -> SubmitOutcome {
        if surface.state() != SubmissionState::Idle || surface.submit_control().disabled {
            return SubmitOutcome::Busy;
        }

        match self.validate(surface) {
            Ok(request) => self.deliver(surface, request).await,
            Err(result) => SubmitOutcome::Invalid(result),
        }
    }

    /// Clears stale errors, validates every field and reports all failures.
    ///
    /// Leaves the surface in `Validating` on success so delivery can follow,
    /// or back in `Idle` on failure.
    pub fn validate<S: ContactSurface>(
        &self,
        surface: &S,
    ) -> Result<SubmissionRequest, ValidationResult> {
        surface.set_state(SubmissionState::Validating);
        surface.clear_all(&Field::ALL);

        let form = surface.form_values();
        let result = validate_submission(&form);

        if let Err(invalid) = &result {
            surface.set_state(SubmissionState::Invalid);
            for (field, error) in invalid.failures() {
                surface.show_error(field, FieldFeedback::error(error.to_string()));
            }
            surface.notify(INVALID_FORM_MESSAGE, Severity::Error);
            surface.set_state(SubmissionState::Idle);
        }

        result
    }

    /// Sends a validated request, falling back to a `mailto:` link on failure.
    ///
    /// The submit control is disabled for the duration and restored before
    /// returning on every path.
    pub async fn deliver<S: ContactSurface>(
        &self,
        surface: &S,
        request: SubmissionRequest,
    ) -> SubmitOutcome {
        let original = surface.submit_control();
        surface.set_state(SubmissionState::Sending);
        surface.set_submit_control(original.sending());

        let outcome = match self.send(&request).await {
            Ok(()) => {
                log!("contact message delivered");
                surface.set_state(SubmissionState::Delivered);
                surface.notify(DELIVERED_MESSAGE, Severity::Success);
                surface.reset_fields();
                SubmitOutcome::Delivered
            }
            Err(reason) => {
                warn!("contact delivery failed, opening mail client: {}", reason);
                let href = compose_mailto(&self.config.operator_address, &request);
                surface.set_state(SubmissionState::FallbackComposed);
                surface.open_mail_client(&href);
                surface.notify(FALLBACK_MESSAGE, Severity::Success);
                SubmitOutcome::FallbackComposed { href, reason }
            }
        };

        surface.set_submit_control(original);
        surface.set_state(SubmissionState::Idle);
        outcome
    }

    async fn send(&self, request: &SubmissionRequest) -> Result<(), DeliveryError> {
        let client = self.client.as_ref().ok_or(DeliveryError::Unavailable)?;
        let (service_id, template_id) =
            self.config.template_ref().ok_or(DeliveryError::Unavailable)?;

        client
            .send(service_id, template_id, &request.template_params())
            .await
    }
}

/// Typing a non-blank email drops any stale email error
pub fn handle_email_input<P: ErrorPresenter>(presenter: &P, raw: &str) {
    if !raw.trim().is_empty() {
        presenter.clear_error(Field::Email);
    }
}

/// Checks the email pattern when the field loses focus
pub fn handle_email_blur<P: ErrorPresenter>(presenter: &P, raw: &str) {
    match email_blur_check(raw) {
        Some(error) => presenter.show_error(Field::Email, FieldFeedback::error(error.to_string())),
        None => presenter.clear_error(Field::Email),
    }
}

/// Updates the live length counter of the message field
pub fn handle_message_input<P: ErrorPresenter>(presenter: &P, raw: &str) {
    match message_hint(raw) {
        MessageHint::Counter(text) => {
            let previous = presenter.current_feedback(Field::Message);
            presenter.show_error(
                Field::Message,
                FieldFeedback::warning(text).replacing(previous.as_ref()),
            )
        }
        MessageHint::Clear => presenter.clear_error(Field::Message),
        MessageHint::Unchanged => {}
    }
}
