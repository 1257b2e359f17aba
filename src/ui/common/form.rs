use leptos::prelude::*;

use crate::core::{Field, FieldFeedback};

/// Text input bound to one contact field, with its inline feedback line
#[component]
pub fn FormField(
    /// Which contact field this input edits
    field: Field,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Focus-loss callback
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Inline feedback to display
    feedback: Signal<Option<FieldFeedback>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.id() class="form-label">{field.label()}</label>
            <input
                type=input_type
                id=field.id()
                name=field.id()
                class="form-input"
                class:form-input-error=move || feedback.get().is_some_and(|f| f.flags_input())
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(callback) = on_blur.as_ref() {
                        callback.run(());
                    }
                }
            />
            <FieldMessage field=field feedback=feedback />
        </div>
    }
}

/// Text area bound to one contact field
#[component]
pub fn TextAreaField(
    /// Which contact field this text area edits
    field: Field,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Inline feedback to display
    feedback: Signal<Option<FieldFeedback>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.id() class="form-label">{field.label()}</label>
            <textarea
                id=field.id()
                name=field.id()
                class="form-input form-textarea"
                class:form-input-error=move || feedback.get().is_some_and(|f| f.flags_input())
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldMessage field=field feedback=feedback />
        </div>
    }
}

/// The `{field}Error` line under an input
#[component]
fn FieldMessage(field: Field, feedback: Signal<Option<FieldFeedback>>) -> impl IntoView {
    let style = move || match feedback.get() {
        Some(f) => format!("display: block; color: {};", f.tone.color()),
        None => "display: none;".to_string(),
    };

    view! {
        <span id=field.error_id() class="form-error" style=style aria-live="polite">
            {move || feedback.get().map(|f| f.message).unwrap_or_default()}
        </span>
    }
}
