//! Contact context for the contact form
//!
//! This module provides the reactive state behind the contact section:
//! - Field values and inline feedback
//! - Submit button label and enabled state
//! - Submission lifecycle state
//! - The page-wide notification center
//!
//! `ContactContext` implements [`ContactSurface`], so the submission
//! controller drives the page through it without knowing about Leptos.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    ContactConfig, ContactForm, ContactSurface, EmailJsClient, ErrorPresenter, Field,
    FieldFeedback, Notifier, Severity, SubmissionController, SubmissionState, SubmitControl,
    handle_email_blur, handle_email_input, handle_message_input,
};
use crate::ui::notifications::NotificationCenter;

/// Contact context providing form state and actions
#[derive(Clone, Copy)]
pub struct ContactContext {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub message: RwSignal<String>,
    name_feedback: RwSignal<Option<FieldFeedback>>,
    email_feedback: RwSignal<Option<FieldFeedback>>,
    message_feedback: RwSignal<Option<FieldFeedback>>,
    /// Submit button label and enabled state
    pub submit_control: RwSignal<SubmitControl>,
    /// Current step of the submission lifecycle
    pub state: RwSignal<SubmissionState>,
    pub notifications: NotificationCenter,
    controller: StoredValue<SubmissionController<EmailJsClient>>,
}

impl ContactContext {
    pub fn new(config: ContactConfig) -> Self {
        let client = EmailJsClient::from_config(&config);
        let controller = SubmissionController::new(config, client);
        if !controller.has_client() {
            log!("email delivery is not configured, contact form will open the mail client");
        }

        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            name_feedback: RwSignal::new(None),
            email_feedback: RwSignal::new(None),
            message_feedback: RwSignal::new(None),
            submit_control: RwSignal::new(SubmitControl::default()),
            state: RwSignal::new(SubmissionState::Idle),
            notifications: NotificationCenter::new(),
            controller: StoredValue::new(controller),
        }
    }

    /// Value signal of a field
    pub fn value(&self, field: Field) -> RwSignal<String> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    /// Inline feedback signal of a field
    pub fn feedback(&self, field: Field) -> RwSignal<Option<FieldFeedback>> {
        match field {
            Field::Name => self.name_feedback,
            Field::Email => self.email_feedback,
            Field::Message => self.message_feedback,
        }
    }

    /// Address the fallback link and the contact details point to
    pub fn operator_address(&self) -> String {
        self.controller
            .with_value(|controller| controller.config().operator_address.clone())
    }

    pub fn on_name_input(&self, value: String) {
        self.name.set(value);
    }

    pub fn on_email_input(&self, value: String) {
        handle_email_input(self, &value);
        self.email.set(value);
    }

    pub fn on_email_blur(&self) {
        handle_email_blur(self, &self.email.get_untracked());
    }

    pub fn on_message_input(&self, value: String) {
        handle_message_input(self, &value);
        self.message.set(value);
    }

    /// Run a submit attempt in the background
    pub fn submit(&self) {
        let ctx = *self;
        let controller = self.controller.get_value();

        spawn_local(async move {
            controller.submit(&ctx).await;
        });
    }
}

impl ErrorPresenter for ContactContext {
    fn show_error(&self, field: Field, feedback: FieldFeedback) {
        self.feedback(field).set(Some(feedback));
    }

    fn clear_error(&self, field: Field) {
        self.feedback(field).maybe_update(|current| current.take().is_some());
    }

    fn current_feedback(&self, field: Field) -> Option<FieldFeedback> {
        self.feedback(field).get_untracked()
    }
}

impl Notifier for ContactContext {
    fn notify(&self, message: &str, severity: Severity) {
        self.notifications.notify(message, severity);
    }
}

impl ContactSurface for ContactContext {
    fn form_values(&self) -> ContactForm {
        ContactForm::new(
            self.name.get_untracked(),
            self.email.get_untracked(),
            self.message.get_untracked(),
        )
    }

    fn reset_fields(&self) {
        for field in Field::ALL {
            self.value(field).set(String::new());
        }
    }

    fn submit_control(&self) -> SubmitControl {
        self.submit_control.get_untracked()
    }

    fn set_submit_control(&self, control: SubmitControl) {
        self.submit_control.set(control);
    }

    fn open_mail_client(&self, href: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window()
                && let Err(e) = window.location().set_href(href)
            {
                warn!("Failed to open mail client: {:?}", e);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        warn!(
            "Cannot open mail client outside the browser ({} byte link)",
            href.len()
        );
    }

    fn state(&self) -> SubmissionState {
        self.state.get_untracked()
    }

    fn set_state(&self, state: SubmissionState) {
        self.state.set(state);
    }
}

/// Provide contact context to the component tree
pub fn provide_contact_context(config: ContactConfig) -> ContactContext {
    let ctx = ContactContext::new(config);
    provide_context(ctx);
    ctx
}

/// Get contact context from the component tree
pub fn use_contact_context() -> ContactContext {
    expect_context::<ContactContext>()
}
