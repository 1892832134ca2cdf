//! Contact page: name, email and message submitted as one `createContact` mutation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fields validate on blur. Submit validates everything, sends at most one
//! request at a time, and on success clears the form and shows a toast. On
//! failure the server's message is shown above the fields and the typed
//! values stay put for a manual retry.
//!
//! A response that lands after the page unmounts is dropped: the `alive`
//! flag is cleared on cleanup and signal writes go through `try_update`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::form_error::FormError;
use crate::components::form_field::{FieldRefs, FormField};
use crate::config::ContactConfig;
use crate::forms::field::Field;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::contact::SubmitOutcome;
use crate::state::contact::{ContactFormState, SubmitAttempt};

/// Label on the submit button.
const SUBMIT_LABEL: &str = "Save";

/// Toast text to show for an outcome, if any.
#[cfg(any(test, feature = "hydrate"))]
fn outcome_toast<'a>(outcome: Option<&SubmitOutcome>, success_message: &'a str) -> Option<&'a str> {
    match outcome {
        Some(SubmitOutcome::Succeeded { .. }) => Some(success_message),
        Some(SubmitOutcome::Failed) | None => None,
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = expect_context::<ContactConfig>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<crate::components::toaster::ToastHandle>();

    let form = RwSignal::new(ContactFormState::default());
    let refs = FieldRefs::new();
    let submitting = move || form.with(ContactFormState::is_submitting);

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let endpoint = config.graphql_endpoint.clone();
    let success_message = config.success_message.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(attempt) = form.try_update(ContactFormState::begin_submit) else {
            return;
        };
        match attempt {
            SubmitAttempt::AlreadySubmitting => {}
            SubmitAttempt::Blocked { first_invalid } => {
                #[cfg(feature = "hydrate")]
                refs.focus(first_invalid);
                #[cfg(not(feature = "hydrate"))]
                let _ = first_invalid;
            }
            SubmitAttempt::Ready(input) => {
                #[cfg(feature = "hydrate")]
                {
                    let endpoint = endpoint.clone();
                    let success_message = success_message.clone();
                    let alive = alive.clone();
                    log::info!("submitting contact form to {endpoint}");
                    leptos::task::spawn_local(async move {
                        let result = crate::net::api::create_contact(&endpoint, input).await;
                        if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                            return;
                        }
                        if let Err(e) = &result {
                            log::warn!("contact submission failed: {e}");
                        }
                        let outcome = form.try_update(|f| f.finish_submit(result)).flatten();
                        if let Some(SubmitOutcome::Succeeded { id }) = &outcome {
                            log::debug!("contact created: {id}");
                        }
                        if let Some(message) = outcome_toast(outcome.as_ref(), &success_message) {
                            toasts.success(message);
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (input, &endpoint, &success_message, &alive);
                }
            }
        }
    };

    view! {
        <Title text=config.page_title.clone()/>
        <Meta name="description" content=config.page_description.clone()/>

        <form class="contact-form" novalidate=true on:submit=on_submit>
            <FormError form=form/>
            {Field::ALL
                .into_iter()
                .map(|field| view! { <FormField field=field form=form refs=refs/> })
                .collect_view()}
            <button type="submit" disabled=submitting>
                {SUBMIT_LABEL}
            </button>
        </form>
    }
}
