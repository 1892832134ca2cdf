//! Label, control and error message for one contact form field.
//!
//! The message under a field is its validation error, or failing that the
//! server's message for that field from the last rejected submission.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::html::{Input, Textarea};
use leptos::prelude::*;

use crate::forms::field::Field;
use crate::state::contact::ContactFormState;

/// DOM handles for every control, so the page can focus the first invalid field.
#[derive(Clone, Copy)]
pub struct FieldRefs {
    pub name: NodeRef<Input>,
    pub email: NodeRef<Input>,
    pub message: NodeRef<Textarea>,
}

impl FieldRefs {
    pub fn new() -> Self {
        Self { name: NodeRef::new(), email: NodeRef::new(), message: NodeRef::new() }
    }

    /// Single-line input backing `field`, or `None` for the textarea.
    pub fn input_ref(&self, field: Field) -> Option<NodeRef<Input>> {
        match field {
            Field::Name => Some(self.name),
            Field::Email => Some(self.email),
            Field::Message => None,
        }
    }

    /// Move keyboard focus to `field`'s control if it is mounted.
    #[cfg(feature = "hydrate")]
    pub fn focus(&self, field: Field) {
        let focused = match self.input_ref(field) {
            Some(node_ref) => node_ref.get_untracked().map(|el| el.focus()),
            None => self.message.get_untracked().map(|el| el.focus()),
        };
        if let Some(Err(e)) = focused {
            log::debug!("focus {field} failed: {e:?}");
        }
    }
}

impl Default for FieldRefs {
    fn default() -> Self {
        Self::new()
    }
}

fn label_class(has_error: bool) -> &'static str {
    if has_error { "error" } else { "" }
}

fn control_class(has_error: bool) -> &'static str {
    if has_error { "form-control error" } else { "form-control" }
}

fn error_id(field: Field) -> String {
    format!("{}-error", field.name())
}

/// Label / control / error triad bound to `field` of the shared form state.
#[component]
pub fn FormField(field: Field, form: RwSignal<ContactFormState>, refs: FieldRefs) -> impl IntoView {
    let has_error = move || form.with(|f| f.has_error(field));
    let error_text = move || form.with(|f| f.displayed_error(field)).unwrap_or_default();
    let value = move || form.with(|f| f.value(field).to_owned());

    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        form.update(|f| f.input(field, next));
    };
    let on_blur = move |_: leptos::ev::FocusEvent| {
        form.update(|f| {
            let _ = f.blur(field);
        });
    };

    let control = match refs.input_ref(field) {
        Some(node_ref) => view! {
            <input
                id=field.name()
                name=field.name()
                type="text"
                class=move || control_class(has_error())
                aria-invalid=move || has_error().to_string()
                aria-describedby=error_id(field)
                node_ref=node_ref
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any(),
        None => view! {
            <textarea
                id=field.name()
                name=field.name()
                class=move || control_class(has_error())
                aria-invalid=move || has_error().to_string()
                aria-describedby=error_id(field)
                node_ref=refs.message
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <label for=field.name() class=move || label_class(has_error())>
            {field.label()}
        </label>
        {control}
        <Show when=has_error>
            <span id=error_id(field) class="error">{error_text}</span>
        </Show>
    }
}
