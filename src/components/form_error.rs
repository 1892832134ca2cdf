//! Inline submission error summary rendered above the form fields.

#[cfg(test)]
#[path = "form_error_test.rs"]
mod form_error_test;

use leptos::prelude::*;

use crate::net::types::SubmissionError;
use crate::state::contact::ContactFormState;

/// Summary title plus detail lines for the last submission error, if any.
fn summary_parts(error: Option<&SubmissionError>) -> Option<(String, Vec<String>)> {
    error.map(|e| (e.message.clone(), e.details.clone()))
}

#[component]
pub fn FormError(form: RwSignal<ContactFormState>) -> impl IntoView {
    let summary = Memo::new(move |_| form.with(|f| summary_parts(f.submission_error.as_ref())));
    let title = move || summary.with(|s| s.as_ref().map(|(title, _)| title.clone()).unwrap_or_default());
    let details = move || summary.with(|s| s.as_ref().map(|(_, details)| details.clone()).unwrap_or_default());

    view! {
        <Show when=move || summary.with(Option::is_some)>
            <div class="form-error" role="alert">
                <p class="form-error__title">{title}</p>
                <Show when=move || !details().is_empty()>
                    <ul class="form-error__list">
                        {move || details().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ul>
                </Show>
            </div>
        </Show>
    }
}
