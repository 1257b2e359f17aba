#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use futures::executor::block_on;

    use crate::core::{
        ContactConfig, ContactForm, ContactSurface, DELIVERED_MESSAGE, DeliveryClient,
        DeliveryError, ErrorPresenter, FALLBACK_MESSAGE, FeedbackTone, Field, FieldFeedback,
        INVALID_FORM_MESSAGE, Notifier, Severity, SubmissionController, SubmissionState,
        SubmitControl, SubmitOutcome, TemplateParams, handle_email_blur, handle_email_input,
        handle_message_input,
    };

    /// In-memory stand-in for the rendered contact section
    #[derive(Default)]
    struct FakePage {
        form: RefCell<ContactForm>,
        errors: RefCell<HashMap<Field, FieldFeedback>>,
        notifications: RefCell<Vec<(String, Severity)>>,
        control: RefCell<SubmitControl>,
        control_history: RefCell<Vec<SubmitControl>>,
        navigated: RefCell<Vec<String>>,
        state: Cell<SubmissionState>,
        states: RefCell<Vec<SubmissionState>>,
    }

    impl FakePage {
        fn with_form(name: &str, email: &str, message: &str) -> Self {
            let page = Self::default();
            *page.form.borrow_mut() = ContactForm::new(name, email, message);
            page
        }

        fn error(&self, field: Field) -> Option<FieldFeedback> {
            self.errors.borrow().get(&field).cloned()
        }

        fn notifications(&self) -> Vec<(String, Severity)> {
            self.notifications.borrow().clone()
        }
    }

    impl ErrorPresenter for FakePage {
        fn show_error(&self, field: Field, feedback: FieldFeedback) {
            self.errors.borrow_mut().insert(field, feedback);
        }

        fn clear_error(&self, field: Field) {
            self.errors.borrow_mut().remove(&field);
        }

        fn current_feedback(&self, field: Field) -> Option<FieldFeedback> {
            self.error(field)
        }
    }

    impl Notifier for FakePage {
        fn notify(&self, message: &str, severity: Severity) {
            self.notifications
                .borrow_mut()
                .push((message.to_string(), severity));
        }
    }

    impl ContactSurface for FakePage {
        fn form_values(&self) -> ContactForm {
            self.form.borrow().clone()
        }

        fn reset_fields(&self) {
            *self.form.borrow_mut() = ContactForm::default();
        }

        fn submit_control(&self) -> SubmitControl {
            self.control.borrow().clone()
        }

        fn set_submit_control(&self, control: SubmitControl) {
            self.control_history.borrow_mut().push(control.clone());
            *self.control.borrow_mut() = control;
        }

        fn open_mail_client(&self, href: &str) {
            self.navigated.borrow_mut().push(href.to_string());
        }

        fn state(&self) -> SubmissionState {
            self.state.get()
        }

        fn set_state(&self, state: SubmissionState) {
            self.states.borrow_mut().push(state);
            self.state.set(state);
        }
    }

    /// Delivery client with a canned answer that records every call
    struct ScriptedClient {
        answer: Result<(), DeliveryError>,
        calls: RefCell<Vec<(String, String, TemplateParams)>>,
    }

    impl ScriptedClient {
        fn accepting() -> Self {
            Self {
                answer: Ok(()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(error: DeliveryError) -> Self {
            Self {
                answer: Err(error),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl DeliveryClient for &ScriptedClient {
        async fn send(
            &self,
            service_id: &str,
            template_id: &str,
            params: &TemplateParams,
        ) -> Result<(), DeliveryError> {
            self.calls.borrow_mut().push((
                service_id.to_string(),
                template_id.to_string(),
                params.clone(),
            ));
            self.answer.clone()
        }
    }

    fn config() -> ContactConfig {
        ContactConfig {
            public_key: Some("pk_test".to_string()),
            service_id: Some("service_site".to_string()),
            template_id: Some("template_contact".to_string()),
            operator_address: "owner@example.com".to_string(),
            ..ContactConfig::default()
        }
    }

    fn valid_page() -> FakePage {
        FakePage::with_form(
            "  Ada Lovelace ",
            "ada@example.com",
            "I would love a new website for my studio.",
        )
    }

    #[test]
    fn test_invalid_submission_reports_every_field() {
        let client = ScriptedClient::accepting();
        let controller = SubmissionController::new(config(), Some(&client));
        let page = FakePage::with_form("A", "not-an-email", "too short");

        let outcome = block_on(controller.submit(&page));

        let SubmitOutcome::Invalid(result) = outcome else {
            panic!("expected invalid outcome");
        };
        assert_eq!(result.failures().count(), 3);

        assert_eq!(
            page.error(Field::Name).unwrap().message,
            "Name must be at least 2 characters"
        );
        assert_eq!(
            page.error(Field::Email).unwrap().message,
            "Please enter a valid email address"
        );
        assert_eq!(
            page.error(Field::Message).unwrap().message,
            "Message must be at least 20 characters (currently 9 characters)"
        );
        assert!(
            [Field::Name, Field::Email, Field::Message]
                .iter()
                .all(|f| page.error(*f).unwrap().tone == FeedbackTone::Error)
        );

        assert_eq!(
            page.notifications(),
            vec![(INVALID_FORM_MESSAGE.to_string(), Severity::Error)]
        );
        assert!(client.calls.borrow().is_empty());
    }

    #[test]
    fn test_invalid_submission_never_disables_submit() {
        let client = ScriptedClient::accepting();
        let controller = SubmissionController::new(config(), Some(&client));
        let page = FakePage::with_form("", "", "");

        block_on(controller.submit(&page));

        assert!(page.control_history.borrow().is_empty());
        assert!(!page.submit_control().disabled);
        assert_eq!(page.state(), SubmissionState::Idle);
        assert_eq!(
            *page.states.borrow(),
            vec![
                SubmissionState::Validating,
                SubmissionState::Invalid,
                SubmissionState::Idle
            ]
        );
    }

    #[test]
    fn test_resubmit_clears_previous_errors() {
        let client = ScriptedClient::accepting();
        let controller = SubmissionController::new(config(), Some(&client));
        let page = FakePage::with_form("", "ada@example.com", "");

        block_on(controller.submit(&page));
        assert!(page.error(Field::Name).is_some());
        assert!(page.error(Field::Email).is_none());

        *page.form.borrow_mut() = ContactForm::new("Ada", "ada@example.com", "");
        block_on(controller.submit(&page));

        assert!(page.error(Field::Name).is_none());
        assert_eq!(
            page.error(Field::Message).unwrap().message,
            "Message is required"
        );
        assert_eq!(page.notifications().len(), 2);
    }

    #[test]
    fn test_successful_delivery_resets_form() {
        let client = ScriptedClient::accepting();
        let controller = SubmissionController::new(config(), Some(&client));
        let page = valid_page();
        *page.control.borrow_mut() = SubmitControl::idle("Send Message");

        let outcome = block_on(controller.submit(&page));

        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(page.form_values(), ContactForm::default());
        assert_eq!(
            page.notifications(),
            vec![(DELIVERED_MESSAGE.to_string(), Severity::Success)]
        );
        assert_eq!(page.submit_control(), SubmitControl::idle("Send Message"));
        assert!(page.navigated.borrow().is_empty());

        let calls = client.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (service_id, template_id, params) = &calls[0];
        assert_eq!(service_id, "service_site");
        assert_eq!(template_id, "template_contact");
        assert_eq!(params.from_name, "Ada Lovelace");
        assert_eq!(params.from_email, "ada@example.com");
        assert_eq!(params.reply_to, "ada@example.com");
        assert_eq!(params.message, "I would love a new website for my studio.");
    }

    #[test]
    fn test_submit_control_disabled_only_while_sending() {
        let client = ScriptedClient::accepting();
        let controller = SubmissionController::new(config(), Some(&client));
        let page = valid_page();

        block_on(controller.submit(&page));

        let history = page.control_history.borrow();
        assert_eq!(history.len(), 2);
        assert!(history[0].disabled);
        assert_eq!(history[0].label, "Sending...");
        assert!(!history[1].disabled);
        assert_eq!(history[1].label, SubmitControl::default().label);

        assert_eq!(
            *page.states.borrow(),
            vec![
                SubmissionState::Validating,
                SubmissionState::Sending,
                SubmissionState::Delivered,
                SubmissionState::Idle
            ]
        );
    }

    #[test]
    fn test_rejected_delivery_composes_fallback() {
        let client = ScriptedClient::failing(DeliveryError::Rejected {
            status: 400,
            body: "The public key is invalid".to_string(),
        });
        let controller = SubmissionController::new(config(), Some(&client));
        let page = FakePage::with_form(
            "Zoë & Co",
            "zoe@example.com",
            "Quote for 3 pages? Budget: 50% now",
        );
        let before = page.form_values();

        let outcome = block_on(controller.submit(&page));

        let SubmitOutcome::FallbackComposed { href, reason } = outcome else {
            panic!("expected fallback outcome");
        };
        assert!(matches!(reason, DeliveryError::Rejected { status: 400, .. }));
        assert_eq!(
            href,
            "mailto:owner@example.com\
             ?subject=Contact%20Form%3A%20Message%20from%20Zo%C3%AB%20%26%20Co\
             &body=Name%3A%20Zo%C3%AB%20%26%20Co%0AEmail%3A%20zoe%40example.com%0A%0A\
             Message%3A%0AQuote%20for%203%20pages%3F%20Budget%3A%2050%25%20now"
        );
        assert_eq!(*page.navigated.borrow(), vec![href.clone()]);
        assert_eq!(
            page.notifications(),
            vec![(FALLBACK_MESSAGE.to_string(), Severity::Success)]
        );

        // fallback leaves the form as typed
        assert_eq!(page.form_values(), before);
        assert!(!page.submit_control().disabled);
        assert_eq!(page.state(), SubmissionState::Idle);
        assert_eq!(client.calls.borrow().len(), 1);
    }

    #[test]
    fn test_absent_client_falls_back_without_sending() {
        let controller: SubmissionController<&ScriptedClient> =
            SubmissionController::new(config(), None);
        assert!(!controller.has_client());
        let page = valid_page();

        let outcome = block_on(controller.submit(&page));

        assert!(matches!(
            outcome,
            SubmitOutcome::FallbackComposed {
                reason: DeliveryError::Unavailable,
                ..
            }
        ));
        assert_eq!(page.navigated.borrow().len(), 1);
        assert!(page.navigated.borrow()[0].starts_with("mailto:owner@example.com?subject="));
        assert_eq!(page.notifications().len(), 1);
        assert_ne!(page.form_values(), ContactForm::default());
        assert!(!page.submit_control().disabled);
    }

    #[test]
    fn test_missing_template_ids_fall_back() {
        let client = ScriptedClient::accepting();
        let mut partial = config();
        partial.template_id = None;
        let controller = SubmissionController::new(partial, Some(&client));
        let page = valid_page();

        let outcome = block_on(controller.submit(&page));

        assert!(matches!(outcome, SubmitOutcome::FallbackComposed { .. }));
        assert!(client.calls.borrow().is_empty());
    }

    #[test]
    fn test_busy_surface_rejects_second_submit() {
        let client = ScriptedClient::accepting();
        let controller = SubmissionController::new(config(), Some(&client));
        let page = valid_page();
        page.state.set(SubmissionState::Sending);
        *page.control.borrow_mut() = SubmitControl::default().sending();

        let outcome = block_on(controller.submit(&page));

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert!(client.calls.borrow().is_empty());
        assert!(page.notifications().is_empty());
        assert!(page.states.borrow().is_empty());
    }

    #[test]
    fn test_email_live_checks() {
        let page = FakePage::default();

        handle_email_blur(&page, "ada@");
        assert_eq!(
            page.error(Field::Email).unwrap(),
            FieldFeedback::error("Please enter a valid email address")
        );

        // blank input keeps the error, typing clears it
        handle_email_input(&page, "  ");
        assert!(page.error(Field::Email).is_some());
        handle_email_input(&page, "ada@ex");
        assert!(page.error(Field::Email).is_none());

        handle_email_blur(&page, "bad");
        handle_email_blur(&page, "");
        assert!(page.error(Field::Email).is_none());
    }

    #[test]
    fn test_message_live_counter() {
        let page = FakePage::default();

        handle_message_input(&page, "Hi there");
        assert_eq!(
            page.error(Field::Message).unwrap(),
            FieldFeedback::warning("Message must be at least 20 characters (8/20)")
        );

        // emptying the field leaves the counter as it was
        handle_message_input(&page, "");
        assert!(page.error(Field::Message).is_some());

        handle_message_input(&page, "This message is definitely long enough.");
        assert!(page.error(Field::Message).is_none());
    }

    #[test]
    fn test_live_counter_keeps_submit_error_flag() {
        let page = FakePage::with_form("Ada", "ada@example.com", "Too short");
        let controller: SubmissionController<&ScriptedClient> =
            SubmissionController::new(config(), None);
        let _ = block_on(controller.submit(&page));
        assert!(page.error(Field::Message).unwrap().flags_input());

        handle_message_input(&page, "Too short!");
        let feedback = page.error(Field::Message).unwrap();
        assert_eq!(feedback.tone, FeedbackTone::Warning);
        assert_eq!(
            feedback.message,
            "Message must be at least 20 characters (10/20)"
        );
        assert!(feedback.flags_input());

        // still flagged while the counter keeps updating
        handle_message_input(&page, "Too short!!");
        assert!(page.error(Field::Message).unwrap().flags_input());

        handle_message_input(&page, "Now this one is long enough.");
        assert!(page.error(Field::Message).is_none());

        // a fresh counter does not flag the input
        handle_message_input(&page, "Short again");
        assert!(!page.error(Field::Message).unwrap().flags_input());
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let page = FakePage::default();
        page.show_error(Field::Name, FieldFeedback::error("Name is required"));

        page.clear_all(&Field::ALL);
        page.clear_all(&Field::ALL);

        assert!(page.errors.borrow().is_empty());
    }
}
