//! Contact section component
//!
//! Renders the contact details and the form with the element ids the
//! submission pipeline relies on (`contactForm`, `name`, `email`, `message`
//! and their `{field}Error` lines).

use leptos::prelude::*;

use super::context::use_contact_context;
use crate::core::Field;
use crate::ui::common::{FormField, TextAreaField};

/// Contact section with the validated contact form
#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_contact_context();
    let operator_address = ctx.operator_address();
    let mailto = format!("mailto:{}", operator_address);

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let control = ctx.submit_control;

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <div class="section-header reveal">
                    <span class="section-tag">"Contact"</span>
                    <h2 class="section-title">"Let's build something together"</h2>
                    <p class="section-subtitle">
                        "Tell us about your project and we'll get back to you within one business day."
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info reveal">
                        <h3>"Get in touch"</h3>
                        <p>
                            "Prefer email? Write to us directly and we'll reply as soon as we can."
                        </p>
                        <a href=mailto class="contact-link">{operator_address}</a>
                    </div>

                    <div class="contact-form-container reveal">
                        <form
                            id="contactForm"
                            class="contact-form"
                            novalidate=true
                            on:submit=on_submit
                        >
                            <FormField
                                field=Field::Name
                                placeholder="Jane Doe"
                                autocomplete="name"
                                value=ctx.name.into()
                                on_input=Callback::new(move |v| ctx.on_name_input(v))
                                feedback=ctx.feedback(Field::Name).into()
                            />
                            <FormField
                                field=Field::Email
                                input_type="email"
                                placeholder="jane@company.com"
                                autocomplete="email"
                                value=ctx.email.into()
                                on_input=Callback::new(move |v| ctx.on_email_input(v))
                                on_blur=Callback::new(move |_| ctx.on_email_blur())
                                feedback=ctx.feedback(Field::Email).into()
                            />
                            <TextAreaField
                                field=Field::Message
                                placeholder="Tell us about your project..."
                                value=ctx.message.into()
                                on_input=Callback::new(move |v| ctx.on_message_input(v))
                                feedback=ctx.feedback(Field::Message).into()
                            />

                            <button
                                type="submit"
                                class="btn btn-primary btn-block"
                                disabled=move || control.get().disabled
                            >
                                {move || control.get().label}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
